//! localStorage を使った設定ストア
//!
//! ストレージが使えない環境（プライベートモード等）では読み込みは常に未設定、
//! 書き込みはエラーになる。設定値そのものはメモリ上で有効なまま。

use aiblog_common::{Error, KeyValueStore, Preferences, Result};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = local_storage().ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

/// ルート要素へテーマ属性とアクセント色のCSS変数を反映
pub fn apply_preferences(prefs: &Preferences) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if root.set_attribute("data-theme", prefs.theme.as_str()).is_err() {
        gloo::console::warn!("failed to set data-theme");
    }
    if let Some(el) = root.dyn_ref::<HtmlElement>() {
        if el.style().set_property("--primary-color", prefs.accent.as_str()).is_err() {
            gloo::console::warn!("failed to set --primary-color");
        }
    }
}
