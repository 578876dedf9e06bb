//! Movie Mania Common Library
//!
//! ブラウザ(WASM)とネイティブで共有される型・状態・コントローラ

pub mod types;
pub mod config;
pub mod error;
pub mod omdb;
pub mod pagination;
pub mod state;
pub mod controller;
pub mod view;

pub use types::{Movie, MovieDetail, MediaType, POSTER_NOT_AVAILABLE};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use omdb::{SearchOutcome, SearchPage, search_url, detail_url, parse_search_response, parse_detail_response};
pub use pagination::{PageWindow, page_window, total_pages};
pub use state::{Action, SearchFailure, SearchState, Store, LocalStore, reduce};
pub use controller::{Controller, MovieApi};
pub use view::{CardView, DetailView};
