//! 検索画面の状態とリデューサ
//!
//! 状態は `SearchState` 1つにまとめ、`Action` ごとに丸ごと置き換える。
//! 書き込みは `Store::dispatch` 経由のみ。

use std::cell::RefCell;
use std::rc::Rc;

use crate::omdb::SearchPage;
use crate::pagination::{self, PageWindow};
use crate::types::{Movie, MovieDetail};

/// 検索結果0件時のメッセージ
pub const MSG_NO_MOVIES: &str = "No movies found";
/// 通信・パース失敗時のメッセージ
pub const MSG_FETCH_FAILED: &str = "Failed to fetch movies";

/// 検索失敗の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// `Response: "False"`
    NoResults,
    /// 通信エラー・JSON不正
    Transport,
}

impl SearchFailure {
    pub fn message(&self) -> &'static str {
        match self {
            SearchFailure::NoResults => MSG_NO_MOVIES,
            SearchFailure::Transport => MSG_FETCH_FAILED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// 入力欄の文字列（ページ移動時もこの値で検索する）
    pub query: String,
    /// 1始まり
    pub current_page: u32,
    pub total_results: u32,
    pub movies: Vec<Movie>,
    /// 空文字ならエラーなし
    pub error: String,
    pub is_searching: bool,
    /// 詳細取得中のimdbID
    pub detail_target: Option<String>,
    /// オーバーレイに表示中の詳細
    pub selected: Option<MovieDetail>,
    /// 最後に発行した検索の番号
    pub search_ticket: u64,
    /// 最後に発行した詳細取得の番号
    pub detail_ticket: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new("")
    }
}

impl SearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            current_page: 1,
            total_results: 0,
            movies: Vec::new(),
            error: String::new(),
            is_searching: false,
            detail_target: None,
            selected: None,
            search_ticket: 0,
            detail_ticket: 0,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn total_pages(&self, page_size: u32) -> u32 {
        pagination::total_pages(self.total_results, page_size)
    }

    pub fn page_window(&self, page_size: u32) -> PageWindow {
        pagination::page_window(self.current_page, self.total_pages(page_size))
    }

    /// このカードの詳細を取得中か
    pub fn is_detail_loading(&self, imdb_id: &str) -> bool {
        self.detail_target.as_deref() == Some(imdb_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    QueryEdited(String),
    SearchStarted { query: String },
    SearchSucceeded { page: u32, result: SearchPage },
    SearchFailed(SearchFailure),
    /// 成否に関わらず検索完了時に最後に送る
    SearchSettled,
    DetailRequested { imdb_id: String },
    DetailLoaded(MovieDetail),
    /// 成否に関わらず詳細取得完了時に最後に送る
    DetailSettled,
    DetailClosed,
}

/// 現在の状態とアクションから次の状態を作る
pub fn reduce(state: &SearchState, action: Action) -> SearchState {
    let mut next = state.clone();
    match action {
        Action::QueryEdited(query) => {
            next.query = query;
        }
        Action::SearchStarted { query } => {
            next.query = query;
            next.is_searching = true;
            next.error.clear();
            next.search_ticket += 1;
        }
        Action::SearchSucceeded { page, result } => {
            next.movies = result.movies;
            next.total_results = result.total_results;
            next.current_page = page.max(1);
            next.error.clear();
        }
        Action::SearchFailed(failure) => {
            next.movies.clear();
            next.total_results = 0;
            next.error = failure.message().to_string();
        }
        Action::SearchSettled => {
            next.is_searching = false;
        }
        Action::DetailRequested { imdb_id } => {
            next.detail_target = Some(imdb_id);
            next.detail_ticket += 1;
        }
        Action::DetailLoaded(detail) => {
            next.selected = Some(detail);
        }
        Action::DetailSettled => {
            next.detail_target = None;
        }
        Action::DetailClosed => {
            next.selected = None;
        }
    }
    next
}

/// 状態の読み出しとアクション送信の窓口
pub trait Store {
    fn read<R>(&self, f: impl FnOnce(&SearchState) -> R) -> R;
    fn dispatch(&self, action: Action);

    fn snapshot(&self) -> SearchState {
        self.read(SearchState::clone)
    }
}

/// シングルスレッド用のストア（ネイティブ実行・テスト用）
#[derive(Clone, Default)]
pub struct LocalStore {
    inner: Rc<RefCell<SearchState>>,
}

impl LocalStore {
    pub fn new(state: SearchState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }
}

impl Store for LocalStore {
    fn read<R>(&self, f: impl FnOnce(&SearchState) -> R) -> R {
        f(&self.inner.borrow())
    }

    fn dispatch(&self, action: Action) {
        let next = reduce(&self.inner.borrow(), action);
        *self.inner.borrow_mut() = next;
    }
}
