//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use movie_mania_common::{
    view, Action, AppConfig, Controller, DetailView, SearchState, Store, reduce,
};
use crate::api::omdb::FetchApi;
use crate::components::{
    header::Header,
    search_bar::SearchBar,
    movie_card::MovieGrid,
    movie_modal::MovieModal,
    pagination::Pagination,
};

/// ビルド時に OMDB_API_KEY が無ければ使うデモ用キー
const EMBEDDED_API_KEY: &str = "3d54f056";

pub fn app_config() -> AppConfig {
    AppConfig::with_api_key(option_env!("OMDB_API_KEY").unwrap_or(EMBEDDED_API_KEY))
}

/// シグナルを状態ストアとして使う
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<SearchState>);

impl Store for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&SearchState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn dispatch(&self, action: Action) {
        self.0.update(|state| {
            let next = reduce(state, action);
            *state = next;
        });
    }
}

pub type WebController = Controller<FetchApi, SignalStore>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    let page_size = config.page_size;
    let placeholder = config.placeholder_poster.clone();

    // アプリケーション状態
    let state = RwSignal::new(SearchState::new(config.default_query.clone()));
    let controller: WebController =
        Controller::new(FetchApi::new(config.clone()), SignalStore(state), config);

    // 初回検索
    {
        let controller = controller.clone();
        spawn_local(async move { controller.start().await });
    }

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let is_searching = Signal::derive(move || state.with(|s| s.is_searching));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let total_results = Signal::derive(move || state.with(|s| s.total_results));
    let current_page = Signal::derive(move || state.with(|s| s.current_page));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages(page_size)));
    let cards = Signal::derive({
        let placeholder = placeholder.clone();
        move || state.with(|s| view::cards(s, &placeholder))
    });
    let detail = Signal::derive(move || {
        state.with(|s| DetailView::from_detail(s.selected.as_ref(), &placeholder))
    });

    // 入力ハンドラ
    let on_input = {
        let controller = controller.clone();
        move |text: String| controller.edit_query(text)
    };

    // 検索ハンドラ（入力中のクエリで1ページ目）
    let on_submit = {
        let controller = controller.clone();
        move |_: ()| {
            let controller = controller.clone();
            spawn_local(async move {
                let query = controller.store().read(|s| s.query.clone());
                controller.search(&query, 1).await;
            });
        }
    };

    // ページ移動ハンドラ
    let on_page_change = {
        let controller = controller.clone();
        move |page: u32| {
            let controller = controller.clone();
            spawn_local(async move { controller.change_page(page).await });
        }
    };

    // カード選択ハンドラ
    let on_select = {
        let controller = controller.clone();
        move |imdb_id: String| {
            let controller = controller.clone();
            spawn_local(async move { controller.fetch_detail(&imdb_id).await });
        }
    };

    // オーバーレイを閉じる
    let on_close = move |_: ()| controller.close_detail();

    view! {
        <div class="container">
            <Header />

            <SearchBar query=query on_input=on_input on_submit=on_submit />

            <Show when=move || is_searching.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !error.get().is_empty()>
                <div class="error">{move || error.get()}</div>
            </Show>

            <MovieGrid cards=cards on_select=on_select />

            <Show when=move || { total_results.get() > 0 }>
                <Pagination
                    current_page=current_page
                    total_pages=total_pages
                    on_page_change=on_page_change.clone()
                />
            </Show>

            <MovieModal detail=detail on_close=on_close />
        </div>
    }
}
