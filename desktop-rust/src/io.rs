use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use aiblog_common::{ArticleStore, PAGE_SIZE};

const DEFAULT_DATA_PATH: &str = "data/posts.json";

/// CLIと共有する設定ファイル（必要な項目のみ）
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SharedConfig {
    pub data_path: Option<PathBuf>,
    pub page_size: usize,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size: PAGE_SIZE,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("aiblog"))
}

pub fn preferences_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("preferences.json"))
}

pub fn load_config() -> SharedConfig {
    let Some(path) = config_dir().map(|dir| dir.join("config.json")) else {
        return SharedConfig::default();
    };
    match read_config(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err:#}");
            SharedConfig::default()
        }
    }
}

fn read_config(path: &Path) -> Result<SharedConfig> {
    if !path.exists() {
        return Ok(SharedConfig::default());
    }
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

pub fn load_store(path: &Path) -> Result<ArticleStore> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let store = ArticleStore::from_json_str(&content).with_context(|| format!("parse {}", path.display()))?;
    tracing::info!(path = %path.display(), articles = store.len(), "dataset loaded");
    Ok(store)
}

/// 起動引数 > 設定 > 既定
pub fn resolve_data_path(arg: Option<PathBuf>, config: &SharedConfig) -> PathBuf {
    arg.or_else(|| config.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_store_reports_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("posts.json");
        fs::write(&path, "not json").unwrap();

        let err = load_store(&path).unwrap_err();
        assert!(format!("{err:#}").contains("posts.json"));
    }

    #[test]
    fn test_read_partial_config() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "page_size": 6 }"#).unwrap();

        let config = read_config(&path).expect("設定読み込み失敗");
        assert_eq!(config.page_size, 6);
        assert!(config.data_path.is_none());
        assert_eq!(resolve_data_path(None, &config), PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(
            resolve_data_path(Some(PathBuf::from("x.json")), &config),
            PathBuf::from("x.json")
        );
    }
}
