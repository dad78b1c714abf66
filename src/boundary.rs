//! Boundary detection over a release history
//!
//! Walks the history newest-first and stops at the first release whose
//! package version is below the requirement. That release is the
//! "not working" one; the release scanned just before it is the "working"
//! one.

use crate::domain::{
    looks_numeric, parse_version, Boundary, DistroHistory, HistoryEntry, PreviousRelease,
};
use tracing::{debug, warn};

/// Resolves boundaries for a fixed (or per-distribution default) requirement
#[derive(Debug, Clone, Default)]
pub struct BoundaryResolver {
    /// Explicit minimum package version; `None` means "the newest one seen"
    required: Option<String>,
}

impl BoundaryResolver {
    /// Create a resolver with an optional explicit requirement
    pub fn new(required: Option<String>) -> Self {
        Self { required }
    }

    /// The explicit requirement, if any
    pub fn required(&self) -> Option<&str> {
        self.required.as_deref()
    }

    /// Resolve the boundary for one distribution's history
    pub fn resolve(&self, history: &DistroHistory) -> Boundary {
        resolve(&history.entries, self.required())
    }
}

/// Locate the transition between satisfying and non-satisfying releases
///
/// Never fails: malformed data ends the scan and leaves the boundary absent.
pub fn resolve(entries: &[HistoryEntry], required: Option<&str>) -> Boundary {
    let mut boundary = Boundary::default();

    if let Some(newest) = entries.first() {
        boundary.highest_package_version = Some(newest.package_version.clone());
        boundary.highest_version = Some(newest.distribution_version.clone());
    }

    boundary.required_package_version = required
        .map(str::to_string)
        .or_else(|| boundary.highest_package_version.clone());

    let Some(required_str) = boundary.required_package_version.as_deref() else {
        return boundary;
    };

    let required_version = match parse_version(required_str) {
        Ok(v) => v,
        Err(e) => {
            warn!("cannot compare against required version: {}", e);
            return boundary;
        }
    };

    let mut previous = PreviousRelease::NoneScanned;

    for entry in entries {
        if !looks_numeric(&entry.package_version) {
            debug!(
                package_version = %entry.package_version,
                release = %entry.distribution_version,
                "non-numeric package version, stopping scan"
            );
            break;
        }

        let package_version = match parse_version(&entry.package_version) {
            Ok(v) => v,
            Err(e) => {
                warn!(
                    release = %entry.distribution_version,
                    "stopping scan: {}", e
                );
                break;
            }
        };

        if package_version < required_version {
            boundary.not_working_version = Some(entry.distribution_version.clone());
            boundary.working_version = Some(previous);
            break;
        }

        previous = PreviousRelease::Release(entry.distribution_version.clone());
    }

    boundary
}
