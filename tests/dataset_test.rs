//! 同梱データセットのテスト
//!
//! `data/posts.json` を読み込み、一覧・詳細の振る舞いを検証

use aiblog::data;
use aiblog_common::{resolve, ArticleStore, ListState, Route, SortOrder, View, PAGE_SIZE};
use std::path::Path;

fn bundled() -> ArticleStore {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("posts.json");
    data::load_store(&path).expect("同梱データ読み込み失敗")
}

#[test]
fn test_bundled_dataset_is_valid() {
    let store = bundled();
    assert_eq!(store.len(), 12);
    assert!(store.validate().is_empty());
    assert!(data::validate_store(&store).is_ok());
}

#[test]
fn test_initial_list_shows_first_page_newest_first() {
    let store = bundled();
    let state = ListState::new();
    let outcome = state.outcome(&store);

    assert_eq!(outcome.visible().len(), PAGE_SIZE);
    assert_eq!(outcome.total(), 12);
    assert!(outcome.has_more());
    assert_eq!(outcome.visible()[0].slug, "supply-chain-attacks-on-package-registries");
}

#[test]
fn test_oldest_first() {
    let store = bundled();
    let mut state = ListState::new();
    state.set_sort_order(SortOrder::Oldest);
    let outcome = state.outcome(&store);

    assert_eq!(outcome.visible()[0].slug, "open-weight-models-catch-up-to-frontier-labs");
}

#[test]
fn test_load_more_shows_everything() {
    let store = bundled();
    let mut state = ListState::new();
    assert!(state.load_more(12));
    let outcome = state.outcome(&store);

    assert_eq!(outcome.visible().len(), 12);
    assert!(!outcome.has_more());
    assert!(!state.load_more(12));
}

#[test]
fn test_category_filter_matches_counts() {
    let store = bundled();
    let mut state = ListState::new();
    state.set_category(Some("AI".to_string()));

    let outcome = state.outcome(&store);
    assert_eq!(outcome.total(), 3);
    assert!(outcome.visible().iter().all(|a| a.category == "AI"));
}

#[test]
fn test_search_without_match_is_empty() {
    let store = bundled();
    let mut state = ListState::new();
    state.set_search_query("zzzz-no-such-term");
    assert!(state.outcome(&store).is_empty());
}

#[test]
fn test_facets_from_bundled_data() {
    let facets = bundled().facets();
    assert_eq!(facets.categories.len(), 5);
    assert_eq!(facets.sources, vec!["techcrunch.com", "theverge.com", "wired.com"]);

    let mut sorted = facets.reading_times.clone();
    sorted.sort();
    assert_eq!(facets.reading_times, sorted);
}

#[test]
fn test_resolve_detail_and_not_found() {
    let store = bundled();

    let route = Route::from_path("/blog/article/passkeys-are-finally-replacing-passwords", "/blog");
    match resolve(&store, &route) {
        View::Detail(article) => assert_eq!(article.title, "Passkeys Are Finally Replacing Passwords"),
        other => panic!("詳細画面になるはず: {:?}", other),
    }

    let missing = Route::detail("no-such-post");
    assert_eq!(resolve(&store, &missing), View::NotFound("no-such-post"));
}
