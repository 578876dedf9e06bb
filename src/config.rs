//! 設定の読み込み
//!
//! `~/.config/movie-mania/config.json` があれば読み込み、
//! 環境変数 `OMDB_API_KEY` があればAPIキーを上書きする

use crate::error::{MovieManiaError, Result};
use movie_mania_common::AppConfig;
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "OMDB_API_KEY";

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| MovieManiaError::Config("home directory not found".into()))?;
    Ok(home.join(".config").join("movie-mania").join("config.json"))
}

pub fn load() -> Result<AppConfig> {
    let path = config_path()?;
    let config = if path.exists() {
        load_from(&path)?
    } else {
        AppConfig::default()
    };
    Ok(apply_env(config))
}

/// 指定ファイルから読み込み（環境変数は見ない）
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(AppConfig::from_json(&content)?)
}

/// 環境変数を優先
pub fn apply_env(mut config: AppConfig) -> AppConfig {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.api_key = key.trim().to_string();
        }
    }
    config
}

pub fn require_api_key(config: &AppConfig) -> Result<&str> {
    let key = config.api_key.trim();
    if key.is_empty() {
        return Err(MovieManiaError::MissingApiKey);
    }
    Ok(key)
}
