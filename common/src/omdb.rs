//! OMDb API ワイヤ形式
//!
//! リクエストURLの組み立てとレスポンスJSONのパースを行う。
//! ブラウザ（fetch）とネイティブ（reqwest）の両トランスポートで共有する。

use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::types::{Movie, MovieDetail};

/// OMDbの成功フラグ値
const RESPONSE_TRUE: &str = "True";

/// 検索結果1ページ分
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub movies: Vec<Movie>,
    /// 全ページ合計の件数
    pub total_results: u32,
}

/// 検索レスポンスの解釈結果
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(SearchPage),
    /// `Response: "False"`（OMDbの `Error` メッセージ付き）
    NotFound(String),
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search")]
    search: Option<Vec<Movie>>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Deserialize)]
struct StatusEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

fn join_query(base_url: &str, params: &[(&str, &str)]) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}{}{}", base_url, separator, query)
}

/// 検索リクエストURL
///
/// `GET <base>?apikey=<key>&s=<query>&page=<page>`
pub fn search_url(config: &AppConfig, query: &str, page: u32) -> String {
    let page = page.to_string();
    join_query(
        &config.base_url,
        &[("apikey", &config.api_key), ("s", query.trim()), ("page", &page)],
    )
}

/// 詳細リクエストURL
///
/// `GET <base>?apikey=<key>&i=<imdbID>&plot=full`
pub fn detail_url(config: &AppConfig, imdb_id: &str) -> String {
    join_query(
        &config.base_url,
        &[("apikey", &config.api_key), ("i", imdb_id), ("plot", "full")],
    )
}

/// 検索レスポンスをパース
///
/// * `Response: "True"` → `SearchOutcome::Found`
/// * `Response: "False"` → `SearchOutcome::NotFound`
/// * JSON不正・`totalResults` が数値でない → `Err`
pub fn parse_search_response(body: &str) -> Result<SearchOutcome> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;

    if envelope.response != RESPONSE_TRUE {
        return Ok(SearchOutcome::NotFound(
            envelope.error.unwrap_or_else(|| "Movie not found!".into()),
        ));
    }

    let movies = envelope
        .search
        .ok_or_else(|| Error::Parse("Search field missing".into()))?;
    let total_text = envelope
        .total_results
        .ok_or_else(|| Error::Parse("totalResults field missing".into()))?;
    let total_results = total_text
        .trim()
        .parse::<u32>()
        .map_err(|e| Error::Parse(format!("totalResults {:?}: {}", total_text, e)))?;

    Ok(SearchOutcome::Found(SearchPage {
        movies,
        total_results,
    }))
}

/// 詳細レスポンスをパース
///
/// `Response: "False"` は `Error::NotFound` になる
pub fn parse_detail_response(body: &str) -> Result<MovieDetail> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let status: StatusEnvelope = serde_json::from_value(value.clone())?;

    if status.response != RESPONSE_TRUE {
        return Err(Error::NotFound(
            status.error.unwrap_or_else(|| "Incorrect IMDb ID.".into()),
        ));
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaType;

    fn config() -> AppConfig {
        AppConfig::with_api_key("3d54f056")
    }

    #[test]
    fn test_search_url() {
        let url = search_url(&config(), "guardians", 2);
        assert_eq!(url, "https://www.omdbapi.com/?apikey=3d54f056&s=guardians&page=2");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url(&config(), "  star wars & co ", 1);
        assert!(url.contains("&s=star%20wars%20%26%20co&"));
    }

    #[test]
    fn test_detail_url() {
        let url = detail_url(&config(), "tt2015381");
        assert_eq!(url, "https://www.omdbapi.com/?apikey=3d54f056&i=tt2015381&plot=full");
    }

    #[test]
    fn test_url_with_existing_query() {
        let mut config = config();
        config.base_url = "http://localhost:8080/omdb?v=1".into();
        let url = detail_url(&config, "tt1");
        assert!(url.starts_with("http://localhost:8080/omdb?v=1&apikey="));
    }

    #[test]
    fn test_parse_search_found() {
        let body = r#"{
            "Search": [
                {"Title": "Guardians of the Galaxy", "Year": "2014", "imdbID": "tt2015381", "Type": "movie", "Poster": "N/A"},
                {"Title": "Rise of the Guardians", "Year": "2012", "imdbID": "tt1446192", "Type": "movie", "Poster": "https://example.com/p.jpg"}
            ],
            "totalResults": "200",
            "Response": "True"
        }"#;

        let outcome = parse_search_response(body).expect("パース失敗");
        let SearchOutcome::Found(page) = outcome else {
            panic!("expected Found");
        };
        assert_eq!(page.total_results, 200);
        assert_eq!(page.movies.len(), 2);
        assert_eq!(page.movies[1].imdb_id, "tt1446192");
        assert_eq!(page.movies[0].media_type, MediaType::Movie);
    }

    #[test]
    fn test_parse_search_not_found() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let outcome = parse_search_response(body).expect("パース失敗");
        assert_eq!(outcome, SearchOutcome::NotFound("Movie not found!".into()));
    }

    #[test]
    fn test_parse_search_not_found_without_message() {
        let outcome = parse_search_response(r#"{"Response": "False"}"#).expect("パース失敗");
        assert!(matches!(outcome, SearchOutcome::NotFound(_)));
    }

    #[test]
    fn test_parse_search_bad_total() {
        let body = r#"{"Search": [], "totalResults": "lots", "Response": "True"}"#;
        let err = parse_search_response(body).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_parse_search_missing_list() {
        let body = r#"{"totalResults": "3", "Response": "True"}"#;
        assert!(matches!(parse_search_response(body), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_search_malformed_json() {
        assert!(matches!(parse_search_response("<html>"), Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_detail_found() {
        let body = r#"{
            "Title": "Guardians of the Galaxy",
            "Year": "2014",
            "imdbID": "tt2015381",
            "Type": "movie",
            "Poster": "N/A",
            "Plot": "A group of intergalactic criminals must pull together.",
            "Director": "James Gunn",
            "Actors": "Chris Pratt, Vin Diesel, Bradley Cooper",
            "imdbRating": "8.0",
            "Response": "True"
        }"#;

        let detail = parse_detail_response(body).expect("パース失敗");
        assert_eq!(detail.imdb_id(), "tt2015381");
        assert_eq!(detail.imdb_rating, "8.0");
        assert_eq!(detail.actors, "Chris Pratt, Vin Diesel, Bradley Cooper");
    }

    #[test]
    fn test_parse_detail_unknown_id() {
        let body = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let err = parse_detail_response(body).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref m) if m == "Incorrect IMDb ID."));
    }
}
