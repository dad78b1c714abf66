//! distrover - Linux distribution release finder CLI tool
//!
//! Prints, for each distribution, the first release whose package version
//! meets a requirement and the last release that does not.

use clap::Parser;
use distrover::cli::CliArgs;
use distrover::logging;
use distrover::orchestrator::Orchestrator;
use distrover::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("distrover v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Package: {}", args.package_name);
        if let Some(required) = &args.package_version {
            eprintln!("Required version: {}", required);
        }
    }

    let orchestrator = Orchestrator::new(&args)?;
    let result = orchestrator.run().await?;

    let output_config = OutputConfig::from_cli(
        args.json,
        args.verbose,
        args.quiet,
        io::stdout().is_terminal(),
    );
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if result.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Partial success - some distributions could not be looked up
        Ok(ExitCode::from(2))
    }
}
