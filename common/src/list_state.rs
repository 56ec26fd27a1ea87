//! 一覧画面の状態
//!
//! 検索語・フィルタ・ソート・ページ数を保持する。条件が変わるたびに
//! ページは1に戻り、表示セットはエンジンで全件から再計算される。

use crate::article::{Article, ArticleStore};
use crate::filter::{derive_display_set, visible_len, DisplayOutcome, FilterCriteria, SortOrder, PAGE_SIZE};

/// 一覧画面の状態（マウント中のみ存在）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.criteria.search_query != query {
            self.criteria.search_query = query;
            self.reset_page();
        }
    }

    pub fn set_category(&mut self, category: Option<String>) {
        if replace(&mut self.criteria.category, category) {
            self.reset_page();
        }
    }

    pub fn set_source(&mut self, source: Option<String>) {
        if replace(&mut self.criteria.source, source) {
            self.reset_page();
        }
    }

    pub fn set_reading_time(&mut self, reading_time: Option<String>) {
        if replace(&mut self.criteria.reading_time, reading_time) {
            self.reset_page();
        }
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        if replace(&mut self.criteria.sort_order, sort_order) {
            self.reset_page();
        }
    }

    /// 検索語と3種のフィルタをクリア（ソート順は維持）
    pub fn clear_filters(&mut self) {
        let sort_order = self.criteria.sort_order;
        let cleared = FilterCriteria {
            sort_order,
            ..Default::default()
        };
        if replace(&mut self.criteria, cleared) {
            self.reset_page();
        }
    }

    /// 次のページを表示（残りがなければ何もしない）
    pub fn load_more(&mut self, total: usize) -> bool {
        if self.visible_len(total) < total {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn visible_len(&self, total: usize) -> usize {
        visible_len(self.page, self.page_size, total)
    }

    /// 現在の条件での表示セット（全件）
    pub fn display_set<'a>(&self, store: &'a ArticleStore) -> Vec<&'a Article> {
        derive_display_set(store.articles(), &self.criteria)
    }

    /// 現在のページまでの表示結果
    pub fn outcome<'a>(&self, store: &'a ArticleStore) -> DisplayOutcome<'a> {
        DisplayOutcome::paginate(self.display_set(store), self.page, self.page_size)
    }

    fn reset_page(&mut self) {
        self.page = 1;
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

pub const COMPACT_HEADER_THRESHOLD: f64 = 150.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// スクロール位置から決まる一覧画面の装飾状態
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollChrome {
    /// コンパクトなヘッダー検索を表示
    pub compact_header: bool,
    /// 「トップへ戻る」ボタンを表示
    pub show_scroll_top: bool,
}

impl ScrollChrome {
    pub fn from_scroll(scroll_y: f64) -> Self {
        Self {
            compact_header: scroll_y > COMPACT_HEADER_THRESHOLD,
            show_scroll_top: scroll_y > SCROLL_TOP_THRESHOLD,
        }
    }
}
