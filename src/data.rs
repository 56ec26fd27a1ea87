//! 記事データの読み込みと検査

use crate::error::{AiBlogError, Result};
use aiblog_common::ArticleStore;
use std::path::Path;

pub fn load_store(path: &Path) -> Result<ArticleStore> {
    if !path.exists() {
        return Err(AiBlogError::DataFileNotFound(path.display().to_string()));
    }

    let store = ArticleStore::from_path(path)?;
    tracing::info!(path = %path.display(), articles = store.len(), "dataset loaded");
    Ok(store)
}

/// データセットを検査し、問題があれば一覧表示してエラーを返す
pub fn validate_store(store: &ArticleStore) -> Result<()> {
    let issues = store.validate();
    if issues.is_empty() {
        println!("✔ {} articles, no issues", store.len());
        return Ok(());
    }

    for issue in &issues {
        println!("✘ {}", issue);
    }
    Err(AiBlogError::InvalidDataset(issues.len()))
}
