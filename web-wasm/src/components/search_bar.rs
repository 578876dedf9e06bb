//! 検索バーコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<FI, FS>(
    query: Signal<String>,
    on_input: FI,
    on_submit: FS,
) -> impl IntoView
where
    FI: Fn(String) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="search-bar">
            <div class="search-input">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search for movies..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        on_input(event_target_value(&ev));
                    }
                    on:keydown={
                        let on_submit = on_submit.clone();
                        move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                on_submit(());
                            }
                        }
                    }
                />
            </div>
            <button
                class="btn btn-primary"
                on:click=move |_| on_submit(())
            >
                "🎬 Search"
            </button>
        </div>
    }
}
