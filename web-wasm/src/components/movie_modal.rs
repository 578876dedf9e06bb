//! 詳細オーバーレイコンポーネント
//!
//! 背景クリック・×ボタン・Escキーで閉じる

use leptos::prelude::*;
use movie_mania_common::DetailView;

#[component]
pub fn MovieModal<F>(
    detail: Signal<Option<DetailView>>,
    on_close: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let handle = window_event_listener(leptos::ev::keydown, {
        let on_close = on_close.clone();
        move |ev| {
            if ev.key() == "Escape" && detail.with_untracked(|d| d.is_some()) {
                on_close(());
            }
        }
    });
    on_cleanup(move || handle.remove());

    move || {
        let on_close = on_close.clone();
        detail.get().map(|movie| {
            let on_backdrop = on_close.clone();
            view! {
                <div class="modal-backdrop" on:click=move |_| on_backdrop(())>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" on:click=move |_| on_close(())>
                            "×"
                        </button>
                        <div class="modal-body">
                            <img src=movie.poster_src.clone() alt=movie.title.clone() />
                            <div class="modal-info">
                                <h2>{movie.title.clone()}</h2>
                                <p class="plot">{movie.plot.clone()}</p>
                                <div class="facts">
                                    <p><strong>"Director: "</strong>{movie.director.clone()}</p>
                                    <p><strong>"Actors: "</strong>{movie.actors.clone()}</p>
                                    <p><strong>"Rating: "</strong>{movie.rating.clone()}</p>
                                    <p><strong>"Year: "</strong>{movie.year.clone()}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
