//! 一覧画面のヘッダー
//!
//! スクロール前は大きな検索バー、スクロール後は固定のコンパクトヘッダーを出す。
//! どちらも同じ検索語を編集する。

use aiblog_common::{ListState, ScrollChrome};
use leptos::ev;
use leptos::prelude::*;

use crate::routing;

#[component]
pub fn SearchHeader(list: RwSignal<ListState>, chrome: RwSignal<ScrollChrome>) -> impl IntoView {
    let query = move || list.with(|s| s.criteria().search_query.clone());
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        list.update(|s| s.set_search_query(value));
    };

    let category = move || list.with(|s| s.criteria().category.clone());
    let source = move || list.with(|s| s.criteria().source.clone());
    let reading_time = move || list.with(|s| s.criteria().reading_time.clone());

    view! {
        <header class="home-sticky-header" class:visible=move || chrome.get().compact_header>
            <div class="logo" on:click=move |_| routing::scroll_to_top(true)>
                <span class="logo-mark">"⚡"</span>
                <b>"AI"<span>"BLOG"</span></b>
            </div>
            <div class="compact-search">
                <input
                    type="text"
                    class="compact-input"
                    placeholder="Search AI insights..."
                    prop:value=query
                    on:input=on_input
                />
            </div>
        </header>

        <section class="search-section" class:hidden=move || chrome.get().compact_header>
            <div class="search-pill-container">
                <input
                    type="text"
                    class="main-search-bar"
                    placeholder="Search the AI Library"
                    prop:value=query
                    on:input=on_input
                />
            </div>

            <Show when=move || list.with(|s| s.criteria().has_active_filters())>
                <div class="filter-tags">
                    {move || category().map(|c| view! {
                        <button class="tag-pill" on:click=move |_| list.update(|s| s.set_category(None))>
                            {c}" ×"
                        </button>
                    })}
                    {move || source().map(|c| view! {
                        <button class="tag-pill tag-source" on:click=move |_| list.update(|s| s.set_source(None))>
                            {c}" ×"
                        </button>
                    })}
                    {move || reading_time().map(|c| view! {
                        <button class="tag-pill tag-time" on:click=move |_| list.update(|s| s.set_reading_time(None))>
                            {c}" ×"
                        </button>
                    })}
                    <button class="clear-all" on:click=move |_| list.update(|s| s.clear_filters())>
                        "Clear all ×"
                    </button>
                </div>
            </Show>
        </section>
    }
}
