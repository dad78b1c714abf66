//! HTTP client shared foundation
//!
//! Thin reqwest wrapper with a fixed timeout and User-Agent. Each request is
//! attempted exactly once.

use crate::error::SourceError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("distrover/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| SourceError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and return the body as text
    ///
    /// `distribution` and `source_name` only feed error messages. A 404 is
    /// reported as an unknown distribution.
    pub async fn get_text(
        &self,
        url: &str,
        distribution: &str,
        source_name: &str,
    ) -> Result<String, SourceError> {
        debug!(url, "GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::timeout(distribution, source_name)
            } else {
                SourceError::network(distribution, source_name, e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::distribution_not_found(distribution, source_name));
        }
        if !status.is_success() {
            return Err(SourceError::network(
                distribution,
                source_name,
                format!("HTTP {}", status),
            ));
        }

        response.text().await.map_err(|e| {
            SourceError::network(
                distribution,
                source_name,
                format!("failed to read response body: {}", e),
            )
        })
    }
}
