//! DistroWatch comparison table adapter
//!
//! Page: https://distrowatch.com/table.php?distribution={name}

use super::extract::extract_history;
use crate::domain::DistroHistory;
use crate::error::SourceError;
use crate::source::{DistroSource, HttpClient};
use async_trait::async_trait;
use tracing::info;

/// DistroWatch base URL
pub const DEFAULT_BASE_URL: &str = "https://distrowatch.com";

/// Name used in error messages
pub const SOURCE_NAME: &str = "DistroWatch";

/// DistroWatch adapter
pub struct DistroWatchSource {
    client: HttpClient,
    base_url: String,
}

impl DistroWatchSource {
    /// Create a new adapter against the public site
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Create a new adapter against a custom base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the comparison table URL for a distribution
    fn build_url(&self, distribution: &str) -> String {
        format!("{}/table.php?distribution={}", self.base_url, distribution)
    }
}

#[async_trait]
impl DistroSource for DistroWatchSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_history(
        &self,
        distribution: &str,
        package: &str,
    ) -> Result<DistroHistory, SourceError> {
        let url = self.build_url(distribution);
        let html = self.client.get_text(&url, distribution, self.name()).await?;
        let history = extract_history(&html, distribution, package)?;

        info!(
            distribution,
            package,
            releases = history.len(),
            "extracted release history"
        );

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const PAGE: &str = r##"<html><head><title>DistroWatch.com: Debian GNU/Linux</title></head><body>
<table>
<tr><th>Feature</th><td>12</td><td>11</td><td>10</td><td>7</td></tr>
<tr><th><a href="#">glibc</a> (2.39)</th><td>2.36</td><td>2.31</td><td>2.28</td><td>--</td></tr>
</table></body></html>"##;

    #[test]
    fn test_source_name() {
        let adapter = DistroWatchSource::new(HttpClient::new().unwrap());
        assert_eq!(adapter.name(), "DistroWatch");
    }

    #[test]
    fn test_build_url() {
        let adapter = DistroWatchSource::new(HttpClient::new().unwrap());
        assert_eq!(
            adapter.build_url("ubuntu"),
            "https://distrowatch.com/table.php?distribution=ubuntu"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let adapter =
            DistroWatchSource::with_base_url(HttpClient::new().unwrap(), "http://localhost:1234/");
        assert_eq!(
            adapter.build_url("debian"),
            "http://localhost:1234/table.php?distribution=debian"
        );
    }

    #[tokio::test]
    async fn test_fetch_history() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/table.php")
            .match_query(Matcher::UrlEncoded(
                "distribution".into(),
                "debian".into(),
            ))
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(PAGE)
            .create_async()
            .await;

        let adapter = DistroWatchSource::with_base_url(HttpClient::new().unwrap(), &server.url());
        let history = adapter.fetch_history("debian", "glibc").await.unwrap();

        mock.assert_async().await;
        assert_eq!(history.title, "Debian GNU/Linux");
        assert_eq!(history.len(), 4);
        assert_eq!(history.entries[3].package_version, "--");
        assert_eq!(history.entries[3].distribution_version, "7");
    }

    #[tokio::test]
    async fn test_fetch_history_unknown_package() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/table.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(PAGE)
            .create_async()
            .await;

        let adapter = DistroWatchSource::with_base_url(HttpClient::new().unwrap(), &server.url());
        let err = adapter.fetch_history("debian", "musl").await.unwrap_err();

        assert!(matches!(err, SourceError::PackageNotFound { .. }));
    }
}
