//! 表示設定ストア
//!
//! テーマとアクセント色の2項目を永続化する。
//! - 起動時に読み込み（未設定・不正値はデフォルト）、解決した値を即書き戻す
//! - 変更は `set_theme` / `set_accent` のみ。毎回書き込み、購読者へ通知する
//!
//! 永続化先は `KeyValueStore` で差し替える（Web: localStorage / ネイティブ: JSONファイル）。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const THEME_KEY: &str = "theme";
pub const ACCENT_KEY: &str = "accent";

/// テーマ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// パレットの色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub value: &'static str,
}

pub const DEFAULT_ACCENT: &str = "#4285f4";

/// アクセント色パレット
pub const PALETTE: [NamedColor; 5] = [
    NamedColor { name: "Google Blue", value: "#4285f4" },
    NamedColor { name: "Cyber Purple", value: "#a855f7" },
    NamedColor { name: "Emerald", value: "#10b981" },
    NamedColor { name: "Sunset", value: "#ef4444" },
    NamedColor { name: "Amber", value: "#f59e0b" },
];

/// アクセント色（`#rgb` または `#rrggbb`、小文字で保持）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Accent(String);

impl TryFrom<String> for Accent {
    type Error = String;

    fn try_from(raw: String) -> std::result::Result<Self, Self::Error> {
        Accent::parse(&raw).ok_or_else(|| format!("invalid accent color '{}'", raw))
    }
}

impl From<Accent> for String {
    fn from(accent: Accent) -> Self {
        accent.0
    }
}

impl Default for Accent {
    fn default() -> Self {
        Accent(DEFAULT_ACCENT.to_string())
    }
}

impl Accent {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let hex = raw.strip_prefix('#')?;
        if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Accent(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// パレット上の名前（任意色ならNone）
    pub fn name(&self) -> Option<&'static str> {
        PALETTE.iter().find(|c| c.value == self.0).map(|c| c.name)
    }

    /// RGB成分
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.0[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        if hex.len() == 3 {
            let expand = |i: usize| channel(hex[i..i + 1].repeat(2).as_str());
            (expand(0), expand(1), expand(2))
        } else {
            (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6]))
        }
    }
}

impl std::fmt::Display for Accent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 現在の表示設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub accent: Accent,
}

/// 文字列キー・値の永続ストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア（テスト・ストレージ非対応環境用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSONファイルに保存するストア
#[cfg(feature = "fs-store")]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
    entries: HashMap<String, String>,
}

#[cfg(feature = "fs-store")]
impl FileStore {
    /// ファイルを開く（存在しない・壊れている場合は空で開始）
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "preferences file is corrupt, starting fresh");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "fs-store")]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

type Subscriber = Box<dyn Fn(&Preferences) + Send + Sync>;

/// 表示設定ストア
pub struct PreferenceStore<S> {
    storage: S,
    current: Preferences,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// ストレージから読み込み、解決した値を書き戻す
    pub fn load(storage: S) -> Self {
        let theme = resolve(&storage, THEME_KEY, Theme::parse);
        let accent = resolve(&storage, ACCENT_KEY, Accent::parse);

        let mut store = Self {
            storage,
            current: Preferences { theme, accent },
            subscribers: Vec::new(),
        };
        store.write(THEME_KEY, theme.as_str().to_string());
        store.write(ACCENT_KEY, store.current.accent.as_str().to_string());
        store
    }

    pub fn preferences(&self) -> &Preferences {
        &self.current
    }

    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    pub fn accent(&self) -> &Accent {
        &self.current.accent
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 変更通知を購読（登録時に現在値で一度呼ばれる）
    pub fn subscribe(&mut self, subscriber: impl Fn(&Preferences) + Send + Sync + 'static) {
        subscriber(&self.current);
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.current.theme == theme {
            return;
        }
        self.current.theme = theme;
        self.write(THEME_KEY, theme.as_str().to_string());
        self.notify();
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.current.theme.toggled());
    }

    pub fn set_accent(&mut self, accent: Accent) {
        if self.current.accent == accent {
            return;
        }
        let value = accent.as_str().to_string();
        self.current.accent = accent;
        self.write(ACCENT_KEY, value);
        self.notify();
    }

    fn write(&mut self, key: &str, value: String) {
        // 書き込み失敗時もメモリ上の値は適用する
        if let Err(e) = self.storage.set(key, &value) {
            tracing::warn!(key, error = %e, "failed to persist preference");
        }
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.current);
        }
    }
}

fn resolve<S, T>(storage: &S, key: &str, parse: impl Fn(&str) -> Option<T>) -> T
where
    S: KeyValueStore,
    T: Default,
{
    match storage.get(key) {
        Some(raw) => parse(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, "invalid stored preference, using default");
            T::default()
        }),
        None => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(crate::Error::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_first_run_defaults_are_persisted() {
        let store = PreferenceStore::load(MemoryStore::new());
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.accent().as_str(), DEFAULT_ACCENT);
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(store.storage().get(ACCENT_KEY).as_deref(), Some(DEFAULT_ACCENT));
    }

    #[test]
    fn test_load_stored_values() {
        let storage = MemoryStore::new()
            .with_entry(THEME_KEY, "dark")
            .with_entry(ACCENT_KEY, "#10B981");
        let store = PreferenceStore::load(storage);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.accent().as_str(), "#10b981");
        assert_eq!(store.accent().name(), Some("Emerald"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let storage = MemoryStore::new()
            .with_entry(THEME_KEY, "sepia")
            .with_entry(ACCENT_KEY, "blue");
        let store = PreferenceStore::load(storage);
        assert_eq!(store.preferences(), &Preferences::default());
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(store.storage().get(ACCENT_KEY).as_deref(), Some(DEFAULT_ACCENT));
    }

    #[test]
    fn test_set_writes_through_and_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = PreferenceStore::load(MemoryStore::new());
        {
            let seen = Arc::clone(&seen);
            store.subscribe(move |p| seen.lock().unwrap().push(p.clone()));
        }

        store.set_theme(Theme::Dark);
        store.set_theme(Theme::Dark);
        store.set_accent(Accent::parse("#f59e0b").unwrap());

        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.storage().get(ACCENT_KEY).as_deref(), Some("#f59e0b"));

        let seen = seen.lock().unwrap();
        // 登録時 + テーマ変更 + アクセント変更（同値の再設定は通知なし）
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], Preferences::default());
        assert_eq!(seen[1].theme, Theme::Dark);
        assert_eq!(seen[2].accent.as_str(), "#f59e0b");
    }

    #[test]
    fn test_toggle_theme() {
        let mut store = PreferenceStore::load(MemoryStore::new());
        store.toggle_theme();
        assert_eq!(store.theme(), Theme::Dark);
        store.toggle_theme();
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_storage_failure_still_applies() {
        let mut store = PreferenceStore::load(FailingStore);
        store.set_theme(Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_accent_parse_and_rgb() {
        assert!(Accent::parse("#abc").is_some());
        assert!(Accent::parse("4285f4").is_none());
        assert!(Accent::parse("#12345").is_none());
        assert!(Accent::parse("#ggg").is_none());
        assert_eq!(Accent::parse("#4285f4").unwrap().rgb(), (0x42, 0x85, 0xf4));
        assert_eq!(Accent::parse("#fa0").unwrap().rgb(), (0xff, 0xaa, 0x00));
        assert_eq!(Accent::parse("#123456").unwrap().name(), None);
    }

    #[test]
    fn test_accent_deserialize_is_validated() {
        let prefs: Preferences =
            serde_json::from_str(r##"{"theme":"dark","accent":"#A855F7"}"##).expect("デシリアライズ失敗");
        assert_eq!(prefs.accent.as_str(), "#a855f7");
        assert_eq!(prefs.accent.rgb(), (0xa8, 0x55, 0xf7));

        for bad in [r#"{"theme":"dark","accent":""}"#, r#"{"theme":"dark","accent":"blue"}"#] {
            assert!(serde_json::from_str::<Preferences>(bad).is_err(), "{}", bad);
        }
        assert_eq!(serde_json::to_string(&Accent::default()).unwrap(), r##""#4285f4""##);
    }

    #[test]
    fn test_palette_values_are_valid() {
        for color in PALETTE {
            assert!(Accent::parse(color.value).is_some(), "{} が不正", color.name);
        }
        assert_eq!(PALETTE[0].value, DEFAULT_ACCENT);
    }

    #[cfg(feature = "fs-store")]
    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("preferences.json");

        {
            let mut store = PreferenceStore::load(FileStore::open(&path));
            store.set_theme(Theme::Dark);
        }

        let reopened = PreferenceStore::load(FileStore::open(&path));
        assert_eq!(reopened.theme(), Theme::Dark);
        assert_eq!(reopened.accent().as_str(), DEFAULT_ACCENT);
    }

    #[cfg(feature = "fs-store")]
    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path);
        assert!(store.get(THEME_KEY).is_none());
    }
}
