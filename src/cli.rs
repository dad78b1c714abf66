//! CLI argument parsing module for distrover

use crate::domain::parse_version;
use crate::source::{SourceConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use clap::Parser;
use std::time::Duration;

/// Distributions checked when `--distributions` is not given
pub const DEFAULT_DISTRIBUTIONS: &str = "centos,rocky,ubuntu,debian,opensuse";

/// Accept only dot-numeric versions, keeping the text as typed
fn parse_required_version(s: &str) -> Result<String, String> {
    parse_version(s).map_err(|e| e.to_string())?;
    Ok(s.trim().to_string())
}

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Get the first working version and the last not working version of a
/// Linux distribution, fulfilling a package version requirement (e.g. glibc 2.14)
#[derive(Parser, Debug, Clone)]
#[command(name = "distrover", version, about, long_about = None)]
pub struct CliArgs {
    /// Package to look up (e.g. glibc)
    pub package_name: String,

    /// Comma-separated list of distributions to check
    #[arg(long, default_value = DEFAULT_DISTRIBUTIONS)]
    pub distributions: String,

    /// Minimum package version (default: newest version shipped by each distribution)
    #[arg(
        long = "package_version",
        visible_alias = "package-version",
        value_parser = parse_required_version
    )]
    pub package_version: Option<String>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    // Source options
    /// Base URL of the distribution comparison site
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "30")]
    pub timeout: Duration,
}

impl CliArgs {
    /// Distribution identifiers in the order given, blanks dropped
    pub fn distribution_list(&self) -> Vec<String> {
        self.distributions
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Connection settings for the comparison site
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
