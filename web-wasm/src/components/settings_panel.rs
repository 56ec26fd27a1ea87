//! 設定パネルコンポーネント
//!
//! テーマとアクセント色。変更は即時保存（キャンセルなし）。
//! 開閉は画面遷移と独立。

use aiblog_common::{Accent, PreferenceStore, Preferences, Theme, PALETTE};
use leptos::prelude::*;

use crate::storage::BrowserStorage;

#[component]
pub fn SettingsPanel(
    open: RwSignal<bool>,
    prefs: RwSignal<Preferences>,
    store: StoredValue<PreferenceStore<BrowserStorage>>,
) -> impl IntoView {
    let set_theme = move |theme: Theme| store.update_value(|s| s.set_theme(theme));
    let is_theme = move |theme: Theme| prefs.with(|p| p.theme == theme);

    view! {
        <Show when=move || open.get()>
            <div class="settings-backdrop" on:click=move |_| open.set(false) />
            <aside class="settings-panel">
                <div class="settings-head">
                    <h2>"Customization"</h2>
                    <button class="icon-btn" on:click=move |_| open.set(false)>"×"</button>
                </div>

                <p class="settings-label">"Theme Mode"</p>
                <div class="theme-options">
                    <button
                        class="theme-option"
                        class:active=move || is_theme(Theme::Light)
                        on:click=move |_| set_theme(Theme::Light)
                    >
                        "☀ Light"
                    </button>
                    <button
                        class="theme-option"
                        class:active=move || is_theme(Theme::Dark)
                        on:click=move |_| set_theme(Theme::Dark)
                    >
                        "☾ Dark"
                    </button>
                </div>

                <p class="settings-label">"Accent Color"</p>
                <div class="color-options">
                    {PALETTE
                        .iter()
                        .map(|color| {
                            let value = color.value;
                            view! {
                                <button
                                    class="color-option"
                                    class:active=move || prefs.with(|p| p.accent.as_str() == value)
                                    style=format!("background: {}", value)
                                    title=color.name
                                    on:click=move |_| {
                                        if let Some(accent) = Accent::parse(value) {
                                            store.update_value(|s| s.set_accent(accent));
                                        }
                                    }
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </aside>
        </Show>
    }
}
