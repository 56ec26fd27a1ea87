//! History API によるルーティング
//!
//! URLは `/blog/` と `/blog/article/{slug}`。戻る/進むは `popstate` で
//! ルートシグナルへ反映する。

use aiblog_common::{Route, BASE_PATH};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// 現在のURLからルートを決定
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Route::from_path(&path, BASE_PATH)
}

/// 履歴にエントリを積む
pub fn push_route(route: &Route) -> bool {
    let path = route.to_path(BASE_PATH);
    let pushed = web_sys::window()
        .and_then(|w| w.history().ok())
        .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&path)).is_ok())
        .unwrap_or(false);
    if !pushed {
        gloo::console::warn!(format!("history push failed: {}", path));
    }
    pushed
}

/// 画面遷移（現在と同じルートなら何もしない）
pub fn navigate(current: RwSignal<Route>, route: Route) {
    if current.get_untracked() == route {
        return;
    }
    push_route(&route);
    current.set(route);
}

pub fn scroll_to_top(smooth: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    if smooth {
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
    }
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
