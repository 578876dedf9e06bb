//! OMDb クライアント（reqwest）

use async_trait::async_trait;
use movie_mania_common::{
    detail_url, parse_detail_response, parse_search_response, search_url, AppConfig, Error,
    MovieApi, MovieDetail, SearchOutcome,
};
use tracing::debug;

pub struct OmdbClient {
    config: AppConfig,
    client: reqwest::Client,
}

impl OmdbClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_text(&self, url: &str) -> movie_mania_common::Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Error::Http(format!("API error: {}", resp.status())));
        }

        resp.text().await.map_err(|e| Error::Http(e.to_string()))
    }
}

#[async_trait(?Send)]
impl MovieApi for OmdbClient {
    async fn search(&self, query: &str, page: u32) -> movie_mania_common::Result<SearchOutcome> {
        debug!(query, page, "OMDb search request");
        let body = self.get_text(&search_url(&self.config, query, page)).await?;
        parse_search_response(&body)
    }

    async fn detail(&self, imdb_id: &str) -> movie_mania_common::Result<MovieDetail> {
        debug!(imdb_id, "OMDb detail request");
        let body = self.get_text(&detail_url(&self.config, imdb_id)).await?;
        parse_detail_response(&body)
    }
}
