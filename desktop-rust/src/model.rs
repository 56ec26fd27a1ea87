use std::path::PathBuf;

use aiblog_common::{ArticleStore, Facets, History, ListState, Route, PAGE_SIZE};

/// ビューアの状態
///
/// 一覧の状態は一覧を表示している間だけ保持する。
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub store: ArticleStore,
    pub facets: Facets,
    pub source_path: Option<PathBuf>,
    pub history: History,
    pub list: Option<ListState>,
    pub page_size: usize,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            store: ArticleStore::default(),
            facets: Facets::default(),
            source_path: None,
            history: History::default(),
            list: None,
            page_size: PAGE_SIZE,
        }
    }
}

impl ViewerState {
    pub fn replace_store(&mut self, store: ArticleStore, path: PathBuf) {
        self.facets = store.facets();
        self.store = store;
        self.source_path = Some(path);
        self.history = History::default();
        self.list = None;
    }

    /// 一覧の状態（未マウントなら初期状態で作る）
    pub fn list_mut(&mut self) -> &mut ListState {
        let page_size = self.page_size;
        self.list.get_or_insert_with(|| ListState::with_page_size(page_size))
    }

    pub fn navigate(&mut self, route: Route) -> bool {
        let moved = self.history.push(route);
        self.discard_list_if_hidden();
        moved
    }

    pub fn back(&mut self) -> bool {
        let moved = self.history.back();
        self.discard_list_if_hidden();
        moved
    }

    fn discard_list_if_hidden(&mut self) {
        if *self.history.current() != Route::List {
            self.list = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_is_fresh_after_detail_roundtrip() {
        let mut state = ViewerState::default();
        state.list_mut().set_search_query("robots");
        state.list_mut().load_more(100);

        assert!(state.navigate(Route::detail("a")));
        assert!(state.list.is_none());

        assert!(state.back());
        assert_eq!(state.history.current(), &Route::List);
        let list = state.list_mut();
        assert_eq!(list.page(), 1);
        assert!(list.criteria().search_query.is_empty());
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut state = ViewerState::default();
        state.list_mut().set_category(Some("AI".to_string()));
        assert!(!state.back());
        assert_eq!(state.list_mut().criteria().category.as_deref(), Some("AI"));
    }

    #[test]
    fn test_replace_store_resets_navigation() {
        let mut state = ViewerState::default();
        state.navigate(Route::detail("a"));
        state.replace_store(ArticleStore::default(), PathBuf::from("posts.json"));
        assert_eq!(state.history.current(), &Route::List);
        assert!(!state.history.can_go_back());
    }
}
