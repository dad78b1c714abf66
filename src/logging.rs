//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with report output. `RUST_LOG`
//! overrides the level picked from the CLI flags.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity setting
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "distrover=info"
    } else {
        "distrover=warn"
    }
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
