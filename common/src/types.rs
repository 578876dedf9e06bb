//! 映画データの型定義
//!
//! OMDb APIのフィールド名（`Title`, `imdbID` など）でシリアライズされる:
//! - Movie: 検索結果の1件（カード表示用）
//! - MovieDetail: 詳細取得結果（オーバーレイ表示用）

use serde::{Deserialize, Serialize};

/// ポスター未登録を示すOMDbの値
pub const POSTER_NOT_AVAILABLE: &str = "N/A";

/// メディア種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Series,
    Episode,
    Game,
    #[serde(other)]
    Other,
}

/// 検索結果の1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title", default)]
    pub title: String,

    /// 公開年（"2014" や "2014–2016" のような範囲もある）
    #[serde(rename = "Year", default)]
    pub year: String,

    #[serde(rename = "imdbID")]
    pub imdb_id: String,

    #[serde(rename = "Type", default)]
    pub media_type: MediaType,

    /// ポスターURL（未登録時は "N/A"）
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl Movie {
    /// 表示用のポスターURL
    ///
    /// "N/A" または空の場合はプレースホルダを返す
    pub fn poster_src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        poster_or_placeholder(&self.poster, placeholder)
    }
}

/// 映画の詳細（Movie + あらすじ・監督・出演・評価）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,

    #[serde(rename = "Plot", default)]
    pub plot: String,

    #[serde(rename = "Director", default)]
    pub director: String,

    #[serde(rename = "Actors", default)]
    pub actors: String,

    /// 0〜10の数値文字列（"N/A" の場合もある）
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
}

impl MovieDetail {
    pub fn imdb_id(&self) -> &str {
        &self.movie.imdb_id
    }
}

/// ポスター値がプレースホルダ置換の対象か
pub fn poster_or_placeholder<'a>(poster: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = poster.trim();
    if trimmed.is_empty() || trimmed == POSTER_NOT_AVAILABLE {
        placeholder
    } else {
        poster
    }
}
