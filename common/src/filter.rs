//! フィルタ/ソート/ページングエンジン
//!
//! (記事一覧, 条件) → 表示セット の純粋関数。UIフレームワークには依存しない。
//!
//! - 検索: タイトル・本文への大文字小文字を区別しない部分一致
//! - カテゴリ/ソース/読了時間: 設定時のみ完全一致
//! - ソート: 日付の新しい順/古い順（安定ソート）

use crate::article::Article;
use crate::date::parse_date;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// 1ページあたりの表示件数
pub const PAGE_SIZE: usize = 9;

/// ソート順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    /// UI表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" | "new" | "desc" => Ok(SortOrder::Newest),
            "oldest" | "old" | "asc" => Ok(SortOrder::Oldest),
            _ => Err(format!("Unknown sort order: {}. Use newest or oldest", s)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_query: String,
    pub category: Option<String>,
    pub source: Option<String>,
    pub reading_time: Option<String>,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// 検索語またはいずれかのフィルタが有効か（ソート順は含まない）
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.trim().is_empty()
            || self.category.is_some()
            || self.source.is_some()
            || self.reading_time.is_some()
    }
}

/// 記事が条件をすべて満たすか
pub fn matches(article: &Article, criteria: &FilterCriteria) -> bool {
    matches_query(article, &criteria.search_query)
        && matches_field(&article.category, criteria.category.as_deref())
        && matches_field(&article.source, criteria.source.as_deref())
        && matches_field(&article.reading_time, criteria.reading_time.as_deref())
}

/// 空白のみの検索語は「検索なし」。それ以外は前後の空白も含めて部分一致
fn matches_query(article: &Article, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    article.title.to_lowercase().contains(&query) || article.content.to_lowercase().contains(&query)
}

fn matches_field(value: &str, wanted: Option<&str>) -> bool {
    wanted.map_or(true, |w| value == w)
}

/// 表示セットを算出（フィルタ → ソート）
///
/// 日付がパースできない記事は最も古いものとして扱う。
/// 同日時の記事はデータセット上の順序を保つ。
pub fn derive_display_set<'a>(articles: &'a [Article], criteria: &FilterCriteria) -> Vec<&'a Article> {
    let mut keyed: Vec<_> = articles
        .iter()
        .filter(|a| matches(a, criteria))
        .map(|a| (parse_date(&a.date), a))
        .collect();

    match criteria.sort_order {
        SortOrder::Newest => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        SortOrder::Oldest => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    tracing::debug!(
        total = articles.len(),
        matched = keyed.len(),
        sort = %criteria.sort_order,
        "display set derived"
    );

    keyed.into_iter().map(|(_, a)| a).collect()
}

/// 表示件数 = min(page × page_size, total)
pub fn visible_len(page: usize, page_size: usize, total: usize) -> usize {
    page.max(1).saturating_mul(page_size).min(total)
}

/// 一覧の表示結果
///
/// 該当なしは `Empty` として区別する（読み込み中の空グリッドと混同させない）。
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayOutcome<'a> {
    Empty,
    Items {
        visible: Vec<&'a Article>,
        total: usize,
        has_more: bool,
    },
}

impl<'a> DisplayOutcome<'a> {
    pub fn paginate(mut display: Vec<&'a Article>, page: usize, page_size: usize) -> Self {
        let total = display.len();
        if total == 0 {
            return DisplayOutcome::Empty;
        }
        display.truncate(visible_len(page, page_size, total));
        let has_more = display.len() < total;
        DisplayOutcome::Items {
            visible: display,
            total,
            has_more,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayOutcome::Empty)
    }

    pub fn visible(&self) -> &[&'a Article] {
        match self {
            DisplayOutcome::Empty => &[],
            DisplayOutcome::Items { visible, .. } => visible,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            DisplayOutcome::Empty => 0,
            DisplayOutcome::Items { total, .. } => *total,
        }
    }

    pub fn has_more(&self) -> bool {
        matches!(self, DisplayOutcome::Items { has_more: true, .. })
    }
}

/// フィルタ候補一覧
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    /// 出現順
    pub categories: Vec<String>,
    /// 出現順
    pub sources: Vec<String>,
    /// 辞書順
    pub reading_times: Vec<String>,
}

impl Facets {
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut reading_times = distinct(articles.iter().map(|a| a.reading_time.as_str()));
        reading_times.sort();

        Self {
            categories: distinct(articles.iter().map(|a| a.category.as_str())),
            sources: distinct(articles.iter().map(|a| a.source.as_str())),
            reading_times,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(|v| v.to_string())
        .collect()
}
