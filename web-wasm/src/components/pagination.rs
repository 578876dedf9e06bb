//! ページネーションコンポーネント

use leptos::prelude::*;
use movie_mania_common::pagination::{has_next, has_previous, page_window};

#[component]
pub fn Pagination<F>(
    current_page: Signal<u32>,
    total_pages: Signal<u32>,
    on_page_change: F,
) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send + Sync,
{
    let window = Memo::new(move |_| page_window(current_page.get(), total_pages.get()));

    let on_prev = on_page_change.clone();
    let on_first = on_page_change.clone();
    let on_item = on_page_change.clone();
    let on_last = on_page_change.clone();
    let on_next = on_page_change;

    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled=move || !has_previous(current_page.get())
                on:click=move |_| on_prev(current_page.get_untracked().saturating_sub(1))
            >
                "‹"
            </button>

            <Show when=move || window.with(|w| w.show_first)>
                <button
                    class="page-btn"
                    on:click={
                        let on_first = on_first.clone();
                        move |_| on_first(1)
                    }
                >
                    "1"
                </button>
                <span class="ellipsis">"..."</span>
            </Show>

            <For
                each=move || window.get().pages
                key=|page| *page
                children=move |page| {
                    let on_item = on_item.clone();
                    view! {
                        <button
                            class="page-btn"
                            class:active=move || current_page.get() == page
                            on:click=move |_| on_item(page)
                        >
                            {page}
                        </button>
                    }
                }
            />

            <Show when=move || window.with(|w| w.show_last)>
                <span class="ellipsis">"..."</span>
                <button
                    class="page-btn"
                    on:click={
                        let on_last = on_last.clone();
                        move |_| on_last(total_pages.get_untracked())
                    }
                >
                    {move || total_pages.get()}
                </button>
            </Show>

            <button
                class="page-btn"
                disabled=move || !has_next(current_page.get(), total_pages.get())
                on:click=move |_| on_next(current_page.get_untracked() + 1)
            >
                "›"
            </button>
        </div>
    }
}
