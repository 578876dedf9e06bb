//! カード・詳細オーバーレイの表示用データ
//!
//! 描画側（Leptosコンポーネント）はここで作った値をそのまま表示する

use crate::state::SearchState;
use crate::types::{poster_or_placeholder, Movie, MovieDetail};

/// 検索結果カード
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_src: String,
    /// 詳細取得中のオーバーレイ表示
    pub loading: bool,
}

impl CardView {
    pub fn new(movie: &Movie, placeholder: &str, loading: bool) -> Self {
        Self {
            imdb_id: movie.imdb_id.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
            poster_src: movie.poster_src(placeholder).to_string(),
            loading,
        }
    }
}

/// 現在ページのカード一覧
pub fn cards(state: &SearchState, placeholder: &str) -> Vec<CardView> {
    state
        .movies
        .iter()
        .map(|m| CardView::new(m, placeholder, state.is_detail_loading(&m.imdb_id)))
        .collect()
}

/// 詳細オーバーレイ
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub poster_src: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    /// "8.0/10"
    pub rating: String,
    pub year: String,
}

impl DetailView {
    /// 詳細がなければ何も表示しない
    pub fn from_detail(detail: Option<&MovieDetail>, placeholder: &str) -> Option<Self> {
        let detail = detail?;
        Some(Self {
            title: detail.movie.title.clone(),
            poster_src: poster_or_placeholder(&detail.movie.poster, placeholder).to_string(),
            plot: detail.plot.clone(),
            director: detail.director.clone(),
            actors: detail.actors.clone(),
            rating: format!("{}/10", detail.imdb_rating),
            year: detail.movie.year.clone(),
        })
    }
}
