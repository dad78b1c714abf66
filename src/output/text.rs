//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One block per distribution with the newest release and the boundary
//! - A one-line-per-distribution quiet mode
//! - Skipped distributions with the lookup that failed

use crate::domain::DistroReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Placeholder for a boundary field that was not located
const UNKNOWN: &str = "(unknown)";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn working(report: &DistroReport) -> String {
        report
            .boundary
            .working_version
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn not_working(report: &DistroReport) -> String {
        report
            .boundary
            .not_working_version
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn newest(report: &DistroReport) -> String {
        match (
            &report.boundary.highest_version,
            &report.boundary.highest_package_version,
        ) {
            (Some(release), Some(package)) => format!("{} ships {}", release, package),
            _ => "(no releases listed)".to_string(),
        }
    }

    fn format_quiet_line(&self, report: &DistroReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let working = Self::working(report);
        let not_working = Self::not_working(report);

        if self.color {
            writeln!(
                writer,
                "{}: working {}, not working {}",
                report.name.bold(),
                working.green(),
                not_working.red()
            )
        } else {
            writeln!(
                writer,
                "{}: working {}, not working {}",
                report.name, working, not_working
            )
        }
    }

    fn format_block(&self, report: &DistroReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let required = report
            .boundary
            .required_package_version
            .as_deref()
            .unwrap_or("?");

        if self.color {
            writeln!(
                writer,
                "{} {} — {} >= {}",
                report.pretty_name.bold(),
                format!("({})", report.name).dimmed(),
                report.package_name,
                required.bright_white().bold()
            )?;
            writeln!(writer, "  {:<12} {}", "newest:", Self::newest(report).dimmed())?;
            writeln!(writer, "  {:<12} {}", "working:", Self::working(report).green())?;
            writeln!(
                writer,
                "  {:<12} {}",
                "not working:",
                Self::not_working(report).red()
            )?;
        } else {
            writeln!(
                writer,
                "{} ({}) — {} >= {}",
                report.pretty_name, report.name, report.package_name, required
            )?;
            writeln!(writer, "  {:<12} {}", "newest:", Self::newest(report))?;
            writeln!(writer, "  {:<12} {}", "working:", Self::working(report))?;
            writeln!(writer, "  {:<12} {}", "not working:", Self::not_working(report))?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(writer, "  {:<12} {}", "releases:", report.releases)?;
        }

        writeln!(writer)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in &result.reports {
            self.format_report(report, writer)?;
        }

        if result.errors.is_empty() {
            return Ok(());
        }

        if self.color {
            writeln!(writer, "{}:", "Skipped".red().bold())?;
        } else {
            writeln!(writer, "Skipped:")?;
        }
        for error in &result.errors {
            if self.color {
                writeln!(writer, "  {} {}", "✗".red(), error)?;
            } else {
                writeln!(writer, "  - {}", error)?;
            }
        }

        Ok(())
    }

    fn format_report(&self, report: &DistroReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            self.format_quiet_line(report, writer)
        } else {
            self.format_block(report, writer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::resolve;
    use crate::domain::{DistroHistory, HistoryEntry};
    use crate::orchestrator::OrchestratorError;

    fn sample_report(required: &str) -> DistroReport {
        let history = DistroHistory::new(
            "Ubuntu",
            vec![
                HistoryEntry::new("2.39", "24.04"),
                HistoryEntry::new("2.35", "22.04"),
                HistoryEntry::new("2.31", "20.04"),
            ],
        );
        let boundary = resolve(&history.entries, Some(required));
        DistroReport::new("ubuntu", "glibc", &history, boundary)
    }

    fn render(formatter: &TextFormatter, result: &OrchestratorResult) -> String {
        let mut output = Vec::new();
        formatter.format(result, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn result_with(reports: Vec<DistroReport>, errors: Vec<OrchestratorError>) -> OrchestratorResult {
        OrchestratorResult {
            package: "glibc".to_string(),
            reports,
            errors,
        }
    }

    #[test]
    fn test_format_block() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let output = render(&formatter, &result_with(vec![sample_report("2.35")], Vec::new()));

        assert!(output.contains("Ubuntu (ubuntu) — glibc >= 2.35"));
        assert!(output.contains("newest:      24.04 ships 2.39"));
        assert!(output.contains("working:     22.04"));
        assert!(output.contains("not working: 20.04"));
        assert!(!output.contains("releases:"));
        assert!(!output.contains("Skipped"));
    }

    #[test]
    fn test_format_sentinel_and_unknown() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);

        let top = render(&formatter, &result_with(vec![sample_report("2.40")], Vec::new()));
        assert!(top.contains("working:     --"));
        assert!(top.contains("not working: 24.04"));

        let none = render(&formatter, &result_with(vec![sample_report("2.0")], Vec::new()));
        assert!(none.contains("working:     (unknown)"));
        assert!(none.contains("not working: (unknown)"));
    }

    #[test]
    fn test_format_verbose_shows_release_count() {
        let formatter = TextFormatter::with_color(Verbosity::Verbose, false);
        let output = render(&formatter, &result_with(vec![sample_report("2.35")], Vec::new()));
        assert!(output.contains("releases:    3"));
    }

    #[test]
    fn test_format_quiet() {
        let formatter = TextFormatter::with_color(Verbosity::Quiet, false);
        let output = render(&formatter, &result_with(vec![sample_report("2.35")], Vec::new()));
        assert_eq!(output, "ubuntu: working 22.04, not working 20.04\n");
    }

    #[test]
    fn test_format_empty_history() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let history = DistroHistory::new("Empty", Vec::new());
        let report = DistroReport::new("empty", "glibc", &history, resolve(&[], None));
        let output = render(&formatter, &result_with(vec![report], Vec::new()));
        assert!(output.contains("glibc >= ?"));
        assert!(output.contains("(no releases listed)"));
    }

    #[test]
    fn test_format_errors() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let errors = vec![OrchestratorError {
            distribution: "ubuntuu".to_string(),
            message: "couldn't find distribution 'ubuntuu' on DistroWatch".to_string(),
        }];
        let output = render(&formatter, &result_with(Vec::new(), errors));
        assert!(output.contains("Skipped:"));
        assert!(output.contains("  - ubuntuu: couldn't find distribution"));
    }

    #[test]
    fn test_format_with_color_keeps_values() {
        let formatter = TextFormatter::new(Verbosity::Normal);
        let output = render(&formatter, &result_with(vec![sample_report("2.35")], Vec::new()));
        assert!(output.contains("22.04"));
        assert!(output.contains("20.04"));
    }
}
