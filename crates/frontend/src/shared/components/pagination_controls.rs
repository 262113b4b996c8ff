use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous/next pager for server-side collections
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u64>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u64>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Called when "previous" is clicked on any page but the first
    on_previous: Callback<()>,

    /// Called when "next" is clicked on any page but the last
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |ev| {
                    ev.prevent_default();
                    on_previous.run(());
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("{} / {} ({})", page, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |ev| {
                    ev.prevent_default();
                    on_next.run(());
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
