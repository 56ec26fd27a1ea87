//! 一覧画面
//!
//! 状態（検索語・フィルタ・ソート・ページ）はこの画面がマウントされている間だけ
//! 存在する。詳細へ遷移すると破棄され、戻ると初期状態から始まる。

use aiblog_common::{Article, ArticleStore, ListState, Route, ScrollChrome};
use leptos::ev;
use leptos::prelude::*;

use crate::app::APP_TITLE;
use crate::components::{article_card::ArticleCard, filter_bar::FilterBar, header::SearchHeader};
use crate::routing;

/// 表示中のページ（ストアから切り離した所有値）
#[derive(Debug, Clone, Default, PartialEq)]
struct Snapshot {
    visible: Vec<Article>,
    total: usize,
    has_more: bool,
}

#[component]
pub fn ListPage(
    store: StoredValue<ArticleStore>,
    route: RwSignal<Route>,
    settings_open: RwSignal<bool>,
) -> impl IntoView {
    let list = RwSignal::new(ListState::new());
    let facets = store.with_value(|s| s.facets());

    let snapshot = Memo::new(move |_| {
        let state = list.get();
        store.with_value(|s| {
            let outcome = state.outcome(s);
            Snapshot {
                visible: outcome.visible().iter().map(|a| (*a).clone()).collect(),
                total: outcome.total(),
                has_more: outcome.has_more(),
            }
        })
    });
    let total = Signal::derive(move || snapshot.with(|s| s.total));

    // スクロール位置によるヘッダー切替・トップへ戻るボタン
    let chrome = RwSignal::new(ScrollChrome::from_scroll(routing::scroll_y()));
    let handle = window_event_listener(ev::scroll, move |_| {
        let next = ScrollChrome::from_scroll(routing::scroll_y());
        if chrome.get_untracked() != next {
            chrome.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(APP_TITLE);
    }

    let load_more = move |_| {
        let total = snapshot.with_untracked(|s| s.total);
        list.update(|s| {
            s.load_more(total);
        });
    };

    view! {
        <div class="app-shell">
            <SearchHeader list=list chrome=chrome />
            <FilterBar list=list facets=facets chrome=chrome total=total />

            <main class="container">
                <Show
                    when=move || snapshot.with(|s| s.total > 0)
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"No articles match your filters."</p>
                            <button class="btn btn-secondary" on:click=move |_| list.update(|s| s.clear_filters())>
                                "Clear all filters"
                            </button>
                        </div>
                    }
                >
                    <div class="doodle-grid">
                        <For
                            each=move || snapshot.get().visible
                            key=|article| article.slug.clone()
                            children=move |article| view! { <ArticleCard article=article route=route /> }
                        />
                    </div>
                    <div class="list-footer">
                        <p class="text-muted">
                            {move || snapshot.with(|s| format!("Showing {} of {}", s.visible.len(), s.total))}
                        </p>
                        <Show when=move || snapshot.with(|s| s.has_more)>
                            <button class="btn btn-primary" on:click=load_more>"Load more"</button>
                        </Show>
                    </div>
                </Show>
            </main>

            <div class="floating-ui">
                <Show when=move || chrome.get().show_scroll_top>
                    <button class="fab" title="Back to top" on:click=move |_| routing::scroll_to_top(true)>
                        "↑"
                    </button>
                </Show>
                <button class="fab fab-settings" title="Settings" on:click=move |_| settings_open.set(true)>
                    "⚙"
                </button>
            </div>
        </div>
    }
}
