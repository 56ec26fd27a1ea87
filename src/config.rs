use crate::error::{AiBlogError, Result};
use aiblog_common::PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 記事データの既定パス
pub const DEFAULT_DATA_PATH: &str = "data/posts.json";

/// 記事データパスを上書きする環境変数
pub const DATA_ENV: &str = "AIBLOG_DATA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size: PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AiBlogError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("aiblog"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 表示設定（テーマ・アクセント色）の保存先
    pub fn preferences_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("preferences.json"))
    }

    /// 記事データのパスを決定（引数 > 環境変数 > 設定 > 既定）
    pub fn resolve_data_path(&self, cli_arg: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_arg {
            return path.to_path_buf();
        }
        if let Ok(path) = std::env::var(DATA_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        self.data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(AiBlogError::InvalidArgument("page size must be at least 1".into()));
        }
        self.page_size = page_size;
        Ok(())
    }
}
