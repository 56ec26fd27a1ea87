//! AI Library Common Library
//!
//! CLI・デスクトップ・Web(WASM)で共有される記事ストア、
//! フィルタ/ソート/ページングエンジン、ルーティング、設定ストア

pub mod article;
pub mod date;
pub mod error;
pub mod filter;
pub mod list_state;
pub mod markdown;
pub mod prefs;
pub mod progress;
pub mod router;

pub use article::{Article, ArticleStore, DatasetIssue};
pub use date::{format_long_date, parse_date};
pub use error::{Error, Result};
pub use filter::{derive_display_set, matches, DisplayOutcome, Facets, FilterCriteria, SortOrder, PAGE_SIZE};
pub use list_state::{ListState, ScrollChrome};
pub use markdown::{to_blocks, to_html, Block};
pub use prefs::{Accent, KeyValueStore, MemoryStore, PreferenceStore, Preferences, Theme, PALETTE};
#[cfg(feature = "fs-store")]
pub use prefs::FileStore;
pub use progress::reading_progress;
pub use router::{resolve, History, Route, View, BASE_PATH};
