//! 検索結果カードコンポーネント

use leptos::prelude::*;
use movie_mania_common::CardView;

#[component]
pub fn MovieGrid<F>(
    cards: Signal<Vec<CardView>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="movie-grid">
            <For
                each=move || cards.get()
                // 読み込み中表示の切り替えでカードを作り直す
                key=|card| (card.imdb_id.clone(), card.loading)
                children=move |card| {
                    let on_select = on_select.clone();
                    view! { <MovieCard card=card on_select=on_select /> }
                }
            />
        </div>
    }
}

#[component]
fn MovieCard<F>(card: CardView, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let imdb_id = card.imdb_id.clone();

    view! {
        <div
            class="movie-card"
            class:loading=card.loading
            on:click=move |_| on_select(imdb_id.clone())
        >
            <img src=card.poster_src.clone() alt=card.title.clone() />
            <div class="movie-info">
                <h3>{card.title.clone()}</h3>
                <p>{card.year.clone()}</p>
            </div>
            {card.loading.then(|| view! {
                <div class="card-overlay">
                    <div class="spinner"></div>
                </div>
            })}
        </div>
    }
}
