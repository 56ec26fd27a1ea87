//! 設定ファイルのテスト

use aiblog::config::{Config, DEFAULT_DATA_PATH};
use aiblog_common::{FileStore, KeyValueStore, PreferenceStore, Theme, PAGE_SIZE};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_missing_config_is_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config, Config::default());
    assert_eq!(config.page_size, PAGE_SIZE);
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("aiblog").join("config.json");

    let mut config = Config::default();
    config.data_path = Some(PathBuf::from("/srv/posts.json"));
    config.set_page_size(6).expect("ページサイズ設定失敗");
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "data_path": "posts.json" }"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.data_path.as_deref(), Some(Path::new("posts.json")));
    assert_eq!(config.page_size, PAGE_SIZE);
}

#[test]
fn test_cli_argument_wins() {
    let config = Config {
        data_path: Some(PathBuf::from("from-config.json")),
        ..Default::default()
    };
    let resolved = config.resolve_data_path(Some(Path::new("from-cli.json")));
    assert_eq!(resolved, PathBuf::from("from-cli.json"));
}

#[test]
fn test_default_data_path() {
    // 環境変数が設定されている環境では検証しない
    if std::env::var(aiblog::config::DATA_ENV).is_ok() {
        return;
    }
    assert_eq!(Config::default().resolve_data_path(None), PathBuf::from(DEFAULT_DATA_PATH));

    let config = Config {
        data_path: Some(PathBuf::from("from-config.json")),
        ..Default::default()
    };
    assert_eq!(config.resolve_data_path(None), PathBuf::from("from-config.json"));
}

#[test]
fn test_preferences_file_written_on_first_run() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("preferences.json");

    let mut prefs = PreferenceStore::load(FileStore::open(&path));
    assert!(path.exists());
    prefs.set_theme(Theme::Dark);

    let content = std::fs::read_to_string(&path).expect("読み込み失敗");
    let saved: serde_json::Value = serde_json::from_str(&content).expect("JSONパース失敗");
    assert_eq!(saved["theme"], "dark");
    assert_eq!(saved["accent"], "#4285f4");
    assert_eq!(prefs.storage().get("theme").as_deref(), Some("dark"));
}
