//! Boundary and per-distribution report types

use super::DistroHistory;
use serde::{Serialize, Serializer};
use std::fmt;

/// Display marker for "no release was scanned before the failing one"
pub const NO_EARLIER_RELEASE: &str = "--";

/// The release scanned just before the first failing one
///
/// `NoneScanned` is a real outcome (the newest release already fails),
/// distinct from an absent boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviousRelease {
    /// No release was scanned yet
    NoneScanned,
    /// A newer release that satisfied the requirement
    Release(String),
}

impl PreviousRelease {
    /// Returns the release identifier, if any
    pub fn as_release(&self) -> Option<&str> {
        match self {
            PreviousRelease::NoneScanned => None,
            PreviousRelease::Release(version) => Some(version),
        }
    }
}

impl fmt::Display for PreviousRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviousRelease::NoneScanned => write!(f, "{}", NO_EARLIER_RELEASE),
            PreviousRelease::Release(version) => write!(f, "{}", version),
        }
    }
}

impl Serialize for PreviousRelease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of scanning a release history against a required version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Boundary {
    /// Requirement the scan used (explicit, or the newest package version)
    pub required_package_version: Option<String>,
    /// Package version shipped by the newest release
    pub highest_package_version: Option<String>,
    /// Newest release
    pub highest_version: Option<String>,
    /// Oldest release that still satisfies the requirement
    pub working_version: Option<PreviousRelease>,
    /// Newest release that falls short
    pub not_working_version: Option<String>,
}

impl Boundary {
    /// Returns true if the transition point was located
    pub fn is_found(&self) -> bool {
        self.not_working_version.is_some()
    }
}

/// Final result for one distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistroReport {
    /// Distribution identifier as requested (e.g., `ubuntu`)
    pub name: String,
    /// Display name from the comparison page (e.g., `Ubuntu`)
    pub pretty_name: String,
    /// Package being tracked
    pub package_name: String,
    /// Number of releases found in the history
    pub releases: usize,
    #[serde(flatten)]
    pub boundary: Boundary,
}

impl DistroReport {
    /// Builds a report from extracted history and its resolved boundary
    pub fn new(
        name: impl Into<String>,
        package_name: impl Into<String>,
        history: &DistroHistory,
        boundary: Boundary,
    ) -> Self {
        Self {
            name: name.into(),
            pretty_name: history.title.clone(),
            package_name: package_name.into(),
            releases: history.len(),
            boundary,
        }
    }
}
