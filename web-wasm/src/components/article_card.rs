//! 記事カード

use aiblog_common::{format_long_date, Article, Route, BASE_PATH};
use leptos::ev;
use leptos::prelude::*;

use crate::routing;

#[component]
pub fn ArticleCard(article: Article, route: RwSignal<Route>) -> impl IntoView {
    let target = Route::detail(article.slug.as_str());
    let href = target.to_path(BASE_PATH);
    let accent = format!("--card-accent: {}", article.accent_or("var(--primary-color)"));

    let image = match article.image.clone() {
        Some(src) => view! { <img src=src alt="" loading="lazy" /> }.into_any(),
        None => view! { <div class="doodle-placeholder">"🤖"</div> }.into_any(),
    };

    view! {
        <a
            class="doodle-card"
            href=href
            style=accent
            on:click=move |ev: ev::MouseEvent| {
                // 修飾キー付き・中クリックはブラウザ標準（新しいタブ等）に任せる
                if !is_plain_click(&ev) {
                    return;
                }
                ev.prevent_default();
                routing::navigate(route, target.clone());
            }
        >
            <div class="doodle-image-box">{image}</div>
            <div class="doodle-info">
                <div class="doodle-date">
                    {format_long_date(&article.date)}" • "{article.category.clone()}
                </div>
                <h2 class="doodle-title">{article.title.clone()}</h2>
                <div class="doodle-meta">
                    <span>{article.source.clone()}</span>
                    <span>{article.reading_time.clone()}</span>
                </div>
            </div>
        </a>
    }
}

fn is_plain_click(ev: &ev::MouseEvent) -> bool {
    ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}
