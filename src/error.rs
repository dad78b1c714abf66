//! Application error types using thiserror
//!
//! Error hierarchy:
//! - SourceError: Issues fetching or reading a distribution comparison page
//! - ConfigError: Issues with CLI configuration
//!
//! Malformed `--package_version` values are rejected by clap before either
//! of these can occur.

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Comparison page related errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to fetching and reading comparison pages
#[derive(Error, Debug)]
pub enum SourceError {
    /// The page has no release table for this distribution
    #[error("couldn't find distribution '{distribution}' on {source_name}")]
    DistributionNotFound {
        distribution: String,
        source_name: String,
    },

    /// The release table has no row for this package
    #[error("couldn't find package '{package}' in the '{distribution}' table")]
    PackageNotFound {
        package: String,
        distribution: String,
    },

    /// Network request failed
    #[error("failed to fetch '{distribution}' from {source_name}: {message}")]
    Network {
        distribution: String,
        source_name: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{distribution}' from {source_name}")]
    Timeout {
        distribution: String,
        source_name: String,
    },

    /// HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No distribution left after splitting the list
    #[error("no distributions given: '{value}'")]
    EmptyDistributionList { value: String },
}

impl SourceError {
    /// Creates a new DistributionNotFound error
    pub fn distribution_not_found(
        distribution: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        SourceError::DistributionNotFound {
            distribution: distribution.into(),
            source_name: source_name.into(),
        }
    }

    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, distribution: impl Into<String>) -> Self {
        SourceError::PackageNotFound {
            package: package.into(),
            distribution: distribution.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(
        distribution: impl Into<String>,
        source_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SourceError::Network {
            distribution: distribution.into(),
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(distribution: impl Into<String>, source_name: impl Into<String>) -> Self {
        SourceError::Timeout {
            distribution: distribution.into(),
            source_name: source_name.into(),
        }
    }

    /// Returns true for "name not on the page" failures
    ///
    /// These abort a single distribution; everything else aborts the run.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            SourceError::DistributionNotFound { .. } | SourceError::PackageNotFound { .. }
        )
    }
}
