//! 検索・閲覧コントローラ
//!
//! ユーザー操作（検索、ページ移動、カード選択、オーバーレイを閉じる）を
//! `MovieApi` 呼び出しと `Action` 送信に変換する。
//!
//! 重なったリクエストは待ち合わせも合流もしない。既定では最後に届いた
//! 応答がそのまま反映される。`discard_stale_responses` を有効にすると、
//! 最新の番号より古い応答は状態を一切変えずに捨てる。

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::Result;
use crate::omdb::SearchOutcome;
use crate::state::{Action, SearchFailure, SearchState, Store};
use crate::types::MovieDetail;

/// 外部映画データベースへの窓口
///
/// ブラウザではfetch、ネイティブではreqwestで実装する
#[async_trait(?Send)]
pub trait MovieApi {
    async fn search(&self, query: &str, page: u32) -> Result<SearchOutcome>;

    /// `Response: "False"` は `Error::NotFound`
    async fn detail(&self, imdb_id: &str) -> Result<MovieDetail>;
}

pub struct Controller<A, S> {
    api: Arc<A>,
    store: S,
    config: Arc<AppConfig>,
}

impl<A, S: Clone> Clone for Controller<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: self.store.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<A: MovieApi, S: Store> Controller<A, S> {
    pub fn new(api: A, store: S, config: AppConfig) -> Self {
        Self {
            api: Arc::new(api),
            store,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> SearchState {
        self.store.snapshot()
    }

    /// 起動時の検索（設定のクエリで1ページ目）
    pub async fn start(&self) {
        let query = self.config.default_query.clone();
        self.search(&query, 1).await;
    }

    /// 入力欄の変更
    pub fn edit_query(&self, query: impl Into<String>) {
        self.store.dispatch(Action::QueryEdited(query.into()));
    }

    /// 検索
    ///
    /// 空白のみのクエリは何もしない。完了時は成否に関わらず
    /// 結果を反映してから検索中フラグを下ろす。
    pub async fn search(&self, query: &str, page: u32) {
        if query.trim().is_empty() {
            debug!("empty query ignored");
            return;
        }

        self.store.dispatch(Action::SearchStarted {
            query: query.to_string(),
        });
        let ticket = self.store.read(|s| s.search_ticket);
        debug!(query, page, ticket, "search started");

        let result = self.api.search(query, page).await;

        if self.is_stale(ticket, |s| s.search_ticket) {
            debug!(ticket, "stale search response discarded");
            return;
        }

        let action = match result {
            Ok(SearchOutcome::Found(result)) => {
                info!(
                    query,
                    page,
                    count = result.movies.len(),
                    total = result.total_results,
                    "search completed"
                );
                Action::SearchSucceeded { page, result }
            }
            Ok(SearchOutcome::NotFound(message)) => {
                info!(query, page, %message, "no results");
                Action::SearchFailed(SearchFailure::NoResults)
            }
            Err(e) => {
                warn!(query, page, error = %e, "search failed");
                Action::SearchFailed(SearchFailure::Transport)
            }
        };

        self.store.dispatch(action);
        self.store.dispatch(Action::SearchSettled);
    }

    /// 現在のクエリで指定ページを検索
    ///
    /// 範囲外のページも止めない（判断はAPI側）
    pub async fn change_page(&self, page: u32) {
        let query = self.store.read(|s| s.query.clone());
        self.search(&query, page).await;
    }

    /// 詳細取得
    ///
    /// 失敗はログのみで画面には出さない。完了時は成否に関わらず
    /// 取得中マーカーを外す。
    pub async fn fetch_detail(&self, imdb_id: &str) {
        self.store.dispatch(Action::DetailRequested {
            imdb_id: imdb_id.to_string(),
        });
        let ticket = self.store.read(|s| s.detail_ticket);

        let result = self.api.detail(imdb_id).await;

        if self.is_stale(ticket, |s| s.detail_ticket) {
            debug!(imdb_id, ticket, "stale detail response discarded");
            return;
        }

        match result {
            Ok(detail) => {
                debug!(imdb_id, title = %detail.movie.title, "detail loaded");
                self.store.dispatch(Action::DetailLoaded(detail));
            }
            Err(e) => {
                warn!(imdb_id, error = %e, "failed to fetch movie details");
            }
        }

        self.store.dispatch(Action::DetailSettled);
    }

    /// オーバーレイを閉じる（何度呼んでもよい）
    pub fn close_detail(&self) {
        self.store.dispatch(Action::DetailClosed);
    }

    fn is_stale(&self, ticket: u64, latest: impl FnOnce(&SearchState) -> u64) -> bool {
        self.config.discard_stale_responses && self.store.read(latest) != ticket
    }
}
