//! 対話式ブラウザ
//!
//! 一覧 ⇄ 記事詳細 を履歴スタックで行き来する。一覧の状態は一覧を
//! 表示している間だけ保持し、詳細へ移ると破棄する。

use crate::error::Result;
use crate::render;
use aiblog_common::{
    resolve, Accent, ArticleStore, Facets, History, KeyValueStore, ListState, PreferenceStore, Route, Theme,
    View, PALETTE,
};
use dialoguer::{Input, Select};

/// 一覧画面の操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// 表示中の n 番目（1始まり）を開く
    Open(usize),
    /// 検索語を設定（空でクリア）
    Search(String),
    PickCategory,
    PickSource,
    PickReadingTime,
    ToggleSort,
    LoadMore,
    ClearFilters,
    Settings,
    Quit,
    Unknown(String),
}

/// 詳細画面の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Back,
    Settings,
    Quit,
}

pub fn parse_list_action(input: &str) -> ListAction {
    let trimmed = input.trim();
    if let Some(query) = trimmed.strip_prefix('/') {
        return ListAction::Search(query.trim().to_string());
    }
    if let Ok(n) = trimmed.parse::<usize>() {
        return ListAction::Open(n);
    }
    match trimmed {
        "c" => ListAction::PickCategory,
        "s" => ListAction::PickSource,
        "t" => ListAction::PickReadingTime,
        "o" => ListAction::ToggleSort,
        "" | "m" => ListAction::LoadMore,
        "x" => ListAction::ClearFilters,
        "p" => ListAction::Settings,
        "q" | "Q" => ListAction::Quit,
        other => ListAction::Unknown(other.to_string()),
    }
}

pub fn parse_detail_action(input: &str) -> Option<DetailAction> {
    match input.trim() {
        "" | "b" => Some(DetailAction::Back),
        "p" => Some(DetailAction::Settings),
        "q" | "Q" => Some(DetailAction::Quit),
        _ => None,
    }
}

/// 対話ブラウザを起動
pub fn run_browser<S: KeyValueStore>(
    store: &ArticleStore,
    page_size: usize,
    prefs: &mut PreferenceStore<S>,
) -> Result<()> {
    let facets = store.facets();
    let mut history = History::default();

    println!("📚 AI Library - {} articles", store.len());
    println!("{}\n", render::format_preferences(prefs.preferences()));

    loop {
        let route = history.current().clone();
        let next = match resolve(store, &route) {
            View::List => run_list(store, &facets, page_size, prefs)?,
            View::Detail(article) => {
                println!("\n{}\n", render::format_article(article, false));
                run_detail(prefs)?
            }
            View::NotFound(slug) => {
                println!("\n{}\n", render::format_not_found(slug));
                run_detail(prefs)?
            }
        };

        match next {
            Some(Route::List) => {
                if !history.back() {
                    history.replace(Route::List);
                }
            }
            Some(route) => {
                history.push(route);
            }
            None => break,
        }
    }

    Ok(())
}

/// 一覧画面（戻り値: 遷移先、Noneで終了）
fn run_list<S: KeyValueStore>(
    store: &ArticleStore,
    facets: &Facets,
    page_size: usize,
    prefs: &mut PreferenceStore<S>,
) -> Result<Option<Route>> {
    let mut state = ListState::with_page_size(page_size);
    let mut redraw = true;

    loop {
        let outcome = state.outcome(store);
        if redraw {
            println!("\n{}\n", render::format_outcome(&outcome, state.criteria()));
        }
        redraw = true;

        let input: String = Input::new()
            .with_prompt("[n]open [/text]search [c]topic [s]source [t]time [o]sort [m]more [x]clear [p]prefs [q]quit")
            .allow_empty(true)
            .interact_text()?;

        match parse_list_action(&input) {
            ListAction::Open(n) => match outcome.visible().get(n.wrapping_sub(1)) {
                Some(article) => return Ok(Some(Route::detail(article.slug.as_str()))),
                None => {
                    println!("  → no article #{}", n);
                    redraw = false;
                }
            },
            ListAction::Search(query) => state.set_search_query(query),
            ListAction::PickCategory => state.set_category(pick_facet("Topic", &facets.categories)?),
            ListAction::PickSource => state.set_source(pick_facet("Source", &facets.sources)?),
            ListAction::PickReadingTime => {
                state.set_reading_time(pick_facet("Reading time", &facets.reading_times)?)
            }
            ListAction::ToggleSort => state.set_sort_order(state.criteria().sort_order.reversed()),
            ListAction::LoadMore => {
                if !state.load_more(outcome.total()) {
                    println!("  → nothing more to load");
                    redraw = false;
                }
            }
            ListAction::ClearFilters => state.clear_filters(),
            ListAction::Settings => {
                run_settings(prefs)?;
                redraw = false;
            }
            ListAction::Quit => return Ok(None),
            ListAction::Unknown(raw) => {
                println!("  → unknown command: {}", raw);
                redraw = false;
            }
        }
    }
}

/// 詳細画面（戻る: 一覧へ）
fn run_detail<S: KeyValueStore>(prefs: &mut PreferenceStore<S>) -> Result<Option<Route>> {
    loop {
        let input: String = Input::new()
            .with_prompt("[b]back [p]prefs [q]quit")
            .allow_empty(true)
            .interact_text()?;

        match parse_detail_action(&input) {
            Some(DetailAction::Back) => return Ok(Some(Route::List)),
            Some(DetailAction::Settings) => run_settings(prefs)?,
            Some(DetailAction::Quit) => return Ok(None),
            None => println!("  → unknown command: {}", input.trim()),
        }
    }
}

/// フィルタ候補を選択（先頭は「すべて」）
fn pick_facet(label: &str, values: &[String]) -> Result<Option<String>> {
    let mut items = vec![format!("All {}", label.to_lowercase())];
    items.extend(values.iter().cloned());

    let selection = Select::new()
        .with_prompt(label)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(selection.checked_sub(1).and_then(|i| values.get(i).cloned()))
}

/// 表示設定パネル（変更は即時保存）
fn run_settings<S: KeyValueStore>(prefs: &mut PreferenceStore<S>) -> Result<()> {
    let theme_item = match prefs.theme() {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };
    let mut items = vec![theme_item.to_string()];
    items.extend(PALETTE.iter().map(|c| {
        let marker = if prefs.accent().as_str() == c.value { "●" } else { "○" };
        format!("{} {} ({})", marker, c.name, c.value)
    }));
    items.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("Settings")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => prefs.toggle_theme(),
        i if i <= PALETTE.len() => {
            if let Some(accent) = Accent::parse(PALETTE[i - 1].value) {
                prefs.set_accent(accent);
            }
        }
        _ => return Ok(()),
    }

    println!("{}", render::format_preferences(prefs.preferences()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_action() {
        assert_eq!(parse_list_action("3"), ListAction::Open(3));
        assert_eq!(parse_list_action(" /gemini ultra "), ListAction::Search("gemini ultra".into()));
        assert_eq!(parse_list_action("/"), ListAction::Search(String::new()));
        assert_eq!(parse_list_action(""), ListAction::LoadMore);
        assert_eq!(parse_list_action("o"), ListAction::ToggleSort);
        assert_eq!(parse_list_action("x"), ListAction::ClearFilters);
        assert_eq!(parse_list_action("Q"), ListAction::Quit);
        assert_eq!(parse_list_action("zz"), ListAction::Unknown("zz".into()));
    }

    #[test]
    fn test_parse_detail_action() {
        assert_eq!(parse_detail_action(""), Some(DetailAction::Back));
        assert_eq!(parse_detail_action("b"), Some(DetailAction::Back));
        assert_eq!(parse_detail_action("p"), Some(DetailAction::Settings));
        assert_eq!(parse_detail_action("q"), Some(DetailAction::Quit));
        assert_eq!(parse_detail_action("open"), None);
    }
}
