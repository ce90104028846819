//! Native HTTP client for the surveillance backend (feature `api`).
//!
//! Kept behind a feature so reqwest stays out of the WASM build; the
//! dashboard app reaches the backend through the browser fetch API
//! instead.

use std::time::Duration;

use serde_json::Value;

use crate::error::FetchError;
use crate::query::ViewQuery;
use crate::response;

/// Default backend address (the FastAPI dev server's bind).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Thin reqwest wrapper issuing view queries against a base URL.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Issue one view query and interpret the response body.
    pub async fn fetch(&self, query: &ViewQuery) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, query.endpoint);
        let resp = self
            .client
            .get(&url)
            .query(&query.params)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        response::interpret(status, &body)
    }
}
