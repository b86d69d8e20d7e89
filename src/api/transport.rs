//! HTTP transport for the Data API
//!
//! The client talks to the API through [`Transport`] so the scrape pipeline can
//! run against canned responses in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;

use crate::error::{ApiError, Result};

/// Raw API response: HTTP status plus the JSON body
///
/// Bodies that are not JSON are reported as `Value::Null`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for issuing GET requests against an API endpoint
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint name relative to the base URL, e.g. `videos`
    /// * `query` - Query parameters, including the API key
    ///
    /// # Returns
    /// * `Result<ApiResponse>` - Status and body, or a transport failure
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<ApiResponse>;
}

/// [`Transport`] backed by a `reqwest` client
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the given base URL
    ///
    /// # Arguments
    /// * `base_url` - e.g. `https://www.googleapis.com/youtube/v3`
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("trendscrape/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<reqwest::Url> {
        let url = format!("{}/{}", self.base_url, endpoint);
        reqwest::Url::parse(&url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")).into())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<ApiResponse> {
        let url = self.endpoint_url(endpoint)?;
        let resp = self.client.get(url).query(query).send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;

        trace!("GET {} -> {} ({} bytes)", endpoint, status, text.len());

        let body = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) if (200..300).contains(&status) => return Err(e.into()),
            Err(_) => serde_json::Value::Null,
        };

        Ok(ApiResponse::new(status, body))
    }
}
