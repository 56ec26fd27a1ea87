//! フィルタバー（並び順・トピック・ソース・読了時間）

use aiblog_common::{Facets, ListState, ScrollChrome, SortOrder};
use leptos::prelude::*;

#[component]
pub fn FilterBar(
    list: RwSignal<ListState>,
    facets: Facets,
    chrome: RwSignal<ScrollChrome>,
    total: Signal<usize>,
) -> impl IntoView {
    let sort = move || list.with(|s| s.criteria().sort_order);

    view! {
        <div class="blue-filter-bar" class:hidden=move || chrome.get().compact_header>
            <label class="filter-item">
                <span>"Date: "</span>
                <select prop:value=move || sort().as_str() on:change=move |ev| {
                    if let Ok(order) = event_target_value(&ev).parse::<SortOrder>() {
                        list.update(|s| s.set_sort_order(order));
                    }
                }>
                    <option value="newest" selected=move || sort() == SortOrder::Newest>"Newest"</option>
                    <option value="oldest" selected=move || sort() == SortOrder::Oldest>"Oldest"</option>
                </select>
            </label>

            <FacetSelect
                label="Topic"
                any_label="All"
                values=facets.categories
                current=move || list.with(|s| s.criteria().category.clone())
                on_select=move |v| list.update(|s| s.set_category(v))
            />
            <FacetSelect
                label="Source"
                any_label="All"
                values=facets.sources
                current=move || list.with(|s| s.criteria().source.clone())
                on_select=move |v| list.update(|s| s.set_source(v))
            />
            <FacetSelect
                label="Reading"
                any_label="Any Time"
                values=facets.reading_times
                current=move || list.with(|s| s.criteria().reading_time.clone())
                on_select=move |v| list.update(|s| s.set_reading_time(v))
            />

            <div class="filter-item filter-info">
                {move || format!("{} articles", total.get())}
            </div>
        </div>
    }
}

/// 候補から1つ選ぶセレクト（空値 = すべて）
///
/// 表示中の選択肢は `prop:value` で状態に追従させる。
#[component]
fn FacetSelect<C, S>(
    label: &'static str,
    any_label: &'static str,
    values: Vec<String>,
    current: C,
    on_select: S,
) -> impl IntoView
where
    C: Fn() -> Option<String> + Copy + Send + Sync + 'static,
    S: Fn(Option<String>) + Copy + Send + Sync + 'static,
{
    let options = values
        .into_iter()
        .map(|value| {
            let key = value.clone();
            let attr_value = value.clone();
            view! {
                <option value=attr_value selected=move || current().as_deref() == Some(key.as_str())>
                    {value}
                </option>
            }
        })
        .collect_view();

    view! {
        <label class="filter-item">
            <span>{label}": "</span>
            <select
                prop:value=move || current().unwrap_or_default()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    on_select((!value.is_empty()).then_some(value));
                }
            >
                <option value="" selected=move || current().is_none()>{any_label}</option>
                {options}
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::task::Executor;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, HtmlElement, HtmlSelectElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn topic_select(container: &HtmlElement) -> HtmlSelectElement {
        container
            .query_selector_all("select")
            .expect("検索失敗")
            .item(1)
            .expect("トピック選択なし")
            .dyn_into::<HtmlSelectElement>()
            .expect("select要素ではない")
    }

    fn choose(select: &HtmlSelectElement, value: &str) {
        select.set_value(value);
        let change = Event::new("change").expect("イベント生成失敗");
        select.dispatch_event(&change).expect("イベント送出失敗");
    }

    #[wasm_bindgen_test]
    async fn test_select_follows_cleared_filters() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.set();

        let document = web_sys::window().and_then(|w| w.document()).expect("document取得失敗");
        let container: HtmlElement = document
            .create_element("div")
            .expect("要素生成失敗")
            .dyn_into()
            .expect("HtmlElementではない");
        document.body().expect("body取得失敗").append_child(&container).expect("追加失敗");

        let list = RwSignal::new(ListState::default());
        let facets = Facets {
            categories: vec!["AI".to_string(), "Security".to_string()],
            sources: Vec::new(),
            reading_times: Vec::new(),
        };
        let chrome = RwSignal::new(ScrollChrome::default());
        let handle = leptos::mount::mount_to(container.clone(), move || {
            view! { <FilterBar list=list facets=facets.clone() chrome=chrome total=Signal::derive(|| 2) /> }
        });

        let select = topic_select(&container);
        choose(&select, "");
        choose(&select, "AI");
        Executor::tick().await;
        assert_eq!(list.with(|s| s.criteria().category.clone()).as_deref(), Some("AI"));
        assert_eq!(select.value(), "AI");

        list.update(|s| s.clear_filters());
        Executor::tick().await;
        assert_eq!(select.value(), "");

        list.update(|s| s.set_category(Some("Security".to_string())));
        Executor::tick().await;
        assert_eq!(select.value(), "Security");

        drop(handle);
        container.remove();
    }
}
