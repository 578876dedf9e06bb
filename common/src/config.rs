//! アプリケーション設定
//!
//! APIキーはビルド時・デプロイ時に注入される設定値として扱う

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_QUERY: &str = "guardians";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_PLACEHOLDER_POSTER: &str = "/api/placeholder/300/450";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    /// 1ページあたりの件数（OMDbは10件固定）
    pub page_size: u32,
    /// 起動時に検索するクエリ
    pub default_query: String,
    pub placeholder_poster: String,
    /// 古いリクエストの応答を破棄する（false: 最後に届いた応答が勝つ）
    pub discard_stale_responses: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            default_query: DEFAULT_QUERY.into(),
            placeholder_poster: DEFAULT_PLACEHOLDER_POSTER.into(),
            discard_stale_responses: false,
        }
    }
}

impl AppConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// JSON文字列から読み込み（欠けたフィールドはデフォルト値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("pageSize must be positive".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("baseUrl is empty".into()));
        }
        Ok(())
    }
}
