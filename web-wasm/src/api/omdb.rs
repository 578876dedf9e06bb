//! OMDb API連携（fetch）
//!
//! URL組み立てとJSONパースは共通ライブラリに任せ、ここでは通信だけ行う

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use movie_mania_common::{
    AppConfig, Error, MovieApi, MovieDetail, Result, SearchOutcome,
    detail_url, parse_detail_response, parse_search_response, search_url,
};

pub struct FetchApi {
    config: AppConfig,
}

impl FetchApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

/// JsValueのエラーを共通エラー型に変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Http(message)
}

/// GETしてレスポンス本文を文字列で返す
async fn fetch_text(url: &str) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

#[async_trait(?Send)]
impl MovieApi for FetchApi {
    async fn search(&self, query: &str, page: u32) -> Result<SearchOutcome> {
        let body = fetch_text(&search_url(&self.config, query, page))
            .await
            .map_err(js_error)?;
        parse_search_response(&body)
    }

    async fn detail(&self, imdb_id: &str) -> Result<MovieDetail> {
        let body = fetch_text(&detail_url(&self.config, imdb_id))
            .await
            .map_err(js_error)?;
        parse_detail_response(&body)
    }
}
