//! 起動時スプラッシュ

use leptos::prelude::*;

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash-logo">"⚡"</div>
            <b class="splash-title">"AI"<span>"BLOG"</span></b>
        </div>
    }
}
