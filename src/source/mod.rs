//! Distribution history sources
//!
//! This module provides:
//! - Connection settings and the HTTP client shared foundation
//! - DistroWatch comparison table adapter
//! - HTML release table extraction

mod client;
mod distrowatch;
mod extract;

pub use client::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use distrowatch::{DistroWatchSource, DEFAULT_BASE_URL, SOURCE_NAME};
pub use extract::extract_history;

use crate::domain::DistroHistory;
use crate::error::SourceError;
use async_trait::async_trait;
use std::time::Duration;

/// Connection settings for the comparison site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Site root; `table.php` is appended to it
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SourceConfig {
    /// Build the DistroWatch adapter for these settings
    pub fn build(&self) -> Result<DistroWatchSource, SourceError> {
        let client = HttpClient::with_config(self.timeout, &self.user_agent)?;
        Ok(DistroWatchSource::with_base_url(client, &self.base_url))
    }
}

/// Trait for release history sources
#[async_trait]
pub trait DistroSource: Send + Sync {
    /// Get the source name
    fn name(&self) -> &'static str;

    /// Fetch the release history of `package` for one distribution
    async fn fetch_history(
        &self,
        distribution: &str,
        package: &str,
    ) -> Result<DistroHistory, SourceError>;
}
