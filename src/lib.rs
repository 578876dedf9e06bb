//! Movie Mania ネイティブ実行用ライブラリ
//!
//! ブラウザ版と同じコントローラを reqwest 経由で動かす

pub mod config;
pub mod error;
pub mod logging;
pub mod omdb_client;

pub use error::{MovieManiaError, Result};
pub use omdb_client::OmdbClient;

use movie_mania_common::{AppConfig, Controller, LocalStore, SearchState};

pub type NativeController = Controller<OmdbClient, LocalStore>;

/// APIキーを確認してコントローラを作る
pub fn native_controller(config: AppConfig) -> Result<NativeController> {
    config::require_api_key(&config)?;
    config.validate()?;
    let store = LocalStore::new(SearchState::new(config.default_query.clone()));
    Ok(Controller::new(OmdbClient::new(config.clone()), store, config))
}
