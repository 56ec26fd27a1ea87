//! メインアプリケーションコンポーネント

use std::time::Duration;

use aiblog_common::{resolve, Article, ArticleStore, PreferenceStore, Preferences, View};
use leptos::ev;
use leptos::prelude::*;

use crate::components::{
    detail_page::{DetailPage, NotFound},
    list_page::ListPage,
    settings_panel::SettingsPanel,
    splash::Splash,
};
use crate::routing;
use crate::storage::{apply_preferences, BrowserStorage};

/// 起動時スプラッシュの表示時間
pub const SPLASH_DELAY_MS: u64 = 600;

pub const APP_TITLE: &str = "AI Library";

const POSTS_JSON: &str = include_str!("../../data/posts.json");

/// 現在のルートが指す画面（ストアから切り離した所有値）
#[derive(Clone)]
enum Screen {
    List,
    Detail(Article),
    NotFound(String),
}

fn load_articles() -> ArticleStore {
    match ArticleStore::from_json_str(POSTS_JSON) {
        Ok(store) => {
            gloo::console::log!(format!("{}: {} articles", APP_TITLE, store.len()));
            store
        }
        Err(e) => {
            gloo::console::error!(format!("failed to parse bundled posts: {}", e));
            ArticleStore::default()
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let store = StoredValue::new(load_articles());

    // 表示設定（localStorage → シグナル → DOM）
    let prefs = RwSignal::new(Preferences::default());
    let mut pref_store = PreferenceStore::load(BrowserStorage);
    pref_store.subscribe(move |p| prefs.set(p.clone()));
    let pref_store = StoredValue::new(pref_store);
    Effect::new(move |_| prefs.with(apply_preferences));

    // ルーティング
    let route = RwSignal::new(routing::current_route());
    let popstate = window_event_listener(ev::popstate, move |_| {
        route.set(routing::current_route());
    });
    on_cleanup(move || popstate.remove());

    // スプラッシュ（起動時に一度だけ）
    let (ready, set_ready) = signal(false);
    match set_timeout_with_handle(move || set_ready.set(true), Duration::from_millis(SPLASH_DELAY_MS)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => set_ready.set(true),
    }

    let settings_open = RwSignal::new(false);

    let screen = move || {
        let current = route.get();
        store.with_value(|s| match resolve(s, &current) {
            View::List => Screen::List,
            View::Detail(article) => Screen::Detail(article.clone()),
            View::NotFound(slug) => Screen::NotFound(slug.to_string()),
        })
    };

    view! {
        <Show when=move || ready.get() fallback=|| view! { <Splash /> }>
            <SettingsPanel open=settings_open prefs=prefs store=pref_store />
            {move || match screen() {
                Screen::List => view! {
                    <ListPage store=store route=route settings_open=settings_open />
                }.into_any(),
                Screen::Detail(article) => view! {
                    <DetailPage article=article route=route settings_open=settings_open />
                }.into_any(),
                Screen::NotFound(slug) => view! {
                    <NotFound slug=slug route=route />
                }.into_any(),
            }}
        </Show>
    }
}
