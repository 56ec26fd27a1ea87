//! 記事詳細画面

use aiblog_common::{format_long_date, to_html, Article, Route, BASE_PATH};
use leptos::ev;
use leptos::prelude::*;

use crate::app::APP_TITLE;
use crate::components::progress_bar::ReadingProgress;
use crate::routing;

fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

/// 一覧へ戻るリンク
#[component]
fn BackLink(route: RwSignal<Route>) -> impl IntoView {
    view! {
        <a
            class="editorial-back-btn"
            href=Route::List.to_path(BASE_PATH)
            on:click=move |ev: ev::MouseEvent| {
                ev.prevent_default();
                routing::navigate(route, Route::List);
            }
        >
            "← BACK"
        </a>
    }
}

#[component]
pub fn DetailPage(article: Article, route: RwSignal<Route>, settings_open: RwSignal<bool>) -> impl IntoView {
    set_document_title(&article.title);
    Effect::new(move |_| routing::scroll_to_top(false));
    on_cleanup(|| set_document_title(APP_TITLE));

    let body = to_html(&article.content);
    let hero = article.image.clone().map(|src| view! {
        <div class="editorial-hero-frame"><img src=src alt="" /></div>
    });
    let original = (!article.original_link.is_empty()).then(|| view! {
        <a class="editorial-source-link" href=article.original_link.clone() target="_blank" rel="noopener noreferrer">
            "Read the original on "{article.source.clone()}" →"
        </a>
    });

    view! {
        <ReadingProgress />
        <div class="editorial-page">
            <nav class="editorial-nav">
                <BackLink route=route />
                <div class="editorial-brand">
                    <span class="logo-mark">"⚡"</span>
                    <span>"AI INSIGHTS"</span>
                    <button class="icon-btn" title="Settings" on:click=move |_| settings_open.set(true)>"⚙"</button>
                </div>
            </nav>
            <header class="editorial-header">
                <span class="editorial-category">{article.category.clone()}</span>
                <h1 class="editorial-title">{article.title.clone()}</h1>
                <p class="editorial-meta">
                    {format_long_date(&article.date)}" · "{article.source.clone()}" · "{article.reading_time.clone()}
                </p>
            </header>
            {hero}
            <article class="editorial-body" inner_html=body />
            {original}
        </div>
    }
}

/// 該当記事なし
#[component]
pub fn NotFound(slug: String, route: RwSignal<Route>) -> impl IntoView {
    gloo::console::warn!(format!("post not found: {}", slug));
    set_document_title(APP_TITLE);

    view! {
        <div class="not-found">
            <p>"Post not found."</p>
            <BackLink route=route />
        </div>
    }
}
