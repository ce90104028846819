//! Browser-side fetch for view queries.
//!
//! Uses the window fetch API via web-sys; response bodies go through
//! `msd_core::response` so the WASM path and the native CLI path agree
//! on error classification.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use msd_core::error::FetchError;
use msd_core::query::ViewQuery;
use msd_core::response;

/// Issue one view query against the current origin and interpret the
/// response body.
pub async fn fetch_json(query: &ViewQuery) -> Result<serde_json::Value, FetchError> {
    let url = query.url();
    log::debug!("GET {url}");
    let window = web_sys::window()
        .ok_or_else(|| FetchError::Transport("no window object".to_string()))?;
    let resp = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|err| FetchError::Transport(js_error_message(&err)))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| FetchError::Transport("fetch returned a non-Response value".to_string()))?;
    let text = resp
        .text()
        .map_err(|err| FetchError::Transport(js_error_message(&err)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|err| FetchError::Transport(js_error_message(&err)))?;
    response::interpret(resp.status(), &body.as_string().unwrap_or_default())
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
