//! HTTP client wrapper for the analysis service API.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_API_PREFIX, REQUEST_TIMEOUT_SECS};
use crate::error::{ApiError, Result};

/// HTTP client for the analysis service REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    prefix: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given backend origin with the standard
    /// `/api` prefix.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_prefix(base_url, DEFAULT_API_PREFIX)
    }

    /// Create a client with an explicit API path prefix. An empty prefix
    /// targets backends that mount the API at the origin root.
    pub fn with_prefix(base_url: &str, prefix: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            prefix: normalize_prefix(prefix),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one JSON request and decode the response. The payload is
    /// serialized only for non-GET methods; a non-GET call without a
    /// payload sends an empty object. Errors are never retried.
    pub async fn request<T, P>(&self, method: Method, endpoint: &str, payload: Option<&P>) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        debug!(%method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if method != Method::GET {
            request = match payload {
                Some(payload) => request.json(payload),
                None => request.json(&serde_json::json!({})),
            };
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %url, "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET an endpoint and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::GET, endpoint, None::<&()>).await
    }

    /// POST a JSON payload and decode the response.
    pub async fn post<T, P>(&self, endpoint: &str, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(payload)).await
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}{}", self.base_url, self.prefix, endpoint)
        } else {
            format!("{}{}/{}", self.base_url, self.prefix, endpoint)
        }
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
