//! 読了プログレスバー
//!
//! ページのスクロール量から進捗を算出する。リスナーはアンマウント時に解除。

use aiblog_common::reading_progress;
use leptos::ev;
use leptos::prelude::*;

use crate::routing;

fn measure() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    reading_progress(routing::scroll_y(), document_height, viewport)
}

#[component]
pub fn ReadingProgress() -> impl IntoView {
    let progress = RwSignal::new(0.0f64);
    let handle = window_event_listener(ev::scroll, move |_| progress.set(measure()));
    on_cleanup(move || handle.remove());

    view! {
        <div class="reading-progress">
            <div
                class="reading-progress-fill"
                style=move || format!("width: {:.2}%", progress.get() * 100.0)
            />
        </div>
    }
}
