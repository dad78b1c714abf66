//! Orchestrator for coordinating the lookup workflow
//!
//! This module provides:
//! - Workflow coordination: fetch → extract → resolve → report
//! - Strictly sequential processing, in the order distributions were given
//! - Per-distribution continuation on lookup failures
//! - Fatal propagation of network failures

use crate::boundary::BoundaryResolver;
use crate::cli::CliArgs;
use crate::domain::DistroReport;
use crate::error::{AppError, ConfigError, SourceError};
use crate::progress::Progress;
use crate::source::DistroSource;
use tracing::{info, warn};

/// Orchestrator for coordinating the lookup workflow
pub struct Orchestrator {
    /// Package to look up
    package: String,
    /// Distribution identifiers, in processing order
    distributions: Vec<String>,
    /// Boundary resolver carrying the explicit requirement, if any
    resolver: BoundaryResolver,
    /// Where release histories come from
    source: Box<dyn DistroSource>,
    /// Whether to show a spinner while fetching
    show_progress: bool,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct OrchestratorResult {
    /// Package that was looked up
    pub package: String,
    /// One report per distribution that could be resolved
    pub reports: Vec<DistroReport>,
    /// Distributions that were skipped because a lookup failed
    pub errors: Vec<OrchestratorError>,
}

impl OrchestratorResult {
    /// Returns true if every requested distribution produced a report
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A per-distribution failure that did not stop the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorError {
    /// Distribution whose lookup failed
    pub distribution: String,
    /// What went wrong
    pub message: String,
}

impl std::fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.distribution, self.message)
    }
}

impl std::error::Error for OrchestratorError {}

impl Orchestrator {
    /// Create a new orchestrator reading from DistroWatch as configured by the CLI
    pub fn new(args: &CliArgs) -> Result<Self, AppError> {
        let source = args.source_config().build()?;
        Ok(Self::with_source(args, Box::new(source))?)
    }

    /// Create an orchestrator with a custom source (for testing)
    pub fn with_source(args: &CliArgs, source: Box<dyn DistroSource>) -> Result<Self, ConfigError> {
        let distributions = args.distribution_list();
        if distributions.is_empty() {
            return Err(ConfigError::EmptyDistributionList {
                value: args.distributions.clone(),
            });
        }

        Ok(Self {
            package: args.package_name.clone(),
            distributions,
            resolver: BoundaryResolver::new(args.package_version.clone()),
            source,
            show_progress: !args.quiet && !args.json,
        })
    }

    /// Distribution identifiers in processing order
    pub fn distributions(&self) -> &[String] {
        &self.distributions
    }

    /// Run the lookup workflow
    ///
    /// Lookup failures are collected and the next distribution is tried;
    /// any other source error ends the run.
    pub async fn run(&self) -> Result<OrchestratorResult, SourceError> {
        let mut progress = Progress::new(self.show_progress);
        let mut reports = Vec::with_capacity(self.distributions.len());
        let mut errors = Vec::new();

        for distribution in &self.distributions {
            progress.spinner(&format!(
                "Fetching {} from {}...",
                distribution,
                self.source.name()
            ));
            let fetched = self.source.fetch_history(distribution, &self.package).await;
            progress.finish_and_clear();

            let history = match fetched {
                Ok(history) => history,
                Err(e) if e.is_lookup() => {
                    warn!("skipping {}: {}", distribution, e);
                    errors.push(OrchestratorError {
                        distribution: distribution.clone(),
                        message: e.to_string(),
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let boundary = self.resolver.resolve(&history);
            info!(
                distribution = %distribution,
                found = boundary.is_found(),
                "resolved boundary"
            );

            reports.push(DistroReport::new(
                distribution.as_str(),
                self.package.as_str(),
                &history,
                boundary,
            ));
        }

        Ok(OrchestratorResult {
            package: self.package.clone(),
            reports,
            errors,
        })
    }
}
