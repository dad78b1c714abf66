//! JSON output formatter for machine processing
//!
//! Absent boundary fields are written as `null`; a working version with no
//! newer release is written as `"--"`.

use crate::domain::DistroReport;
use crate::orchestrator::{OrchestratorError, OrchestratorResult};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Package that was looked up
    package: &'a str,
    /// Per-distribution reports
    reports: Vec<serde_json::Value>,
    /// Distributions skipped because a lookup failed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<JsonError<'a>>,
}

/// JSON representation of a skipped distribution
#[derive(Serialize)]
struct JsonError<'a> {
    distribution: &'a str,
    message: &'a str,
}

impl<'a> From<&'a OrchestratorError> for JsonError<'a> {
    fn from(error: &'a OrchestratorError) -> Self {
        Self {
            distribution: &error.distribution,
            message: &error.message,
        }
    }
}

impl JsonFormatter {
    /// Serialize a report, dropping the release count unless verbose
    fn report_to_json(&self, report: &DistroReport) -> serde_json::Result<serde_json::Value> {
        let mut value = serde_json::to_value(report)?;
        if self.verbosity != Verbosity::Verbose {
            if let Some(object) = value.as_object_mut() {
                object.remove("releases");
            }
        }
        Ok(value)
    }

    fn write_value<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let reports = result
            .reports
            .iter()
            .map(|report| self.report_to_json(report))
            .collect::<serde_json::Result<Vec<_>>>()
            .map_err(std::io::Error::other)?;

        let output = JsonOutput {
            package: &result.package,
            reports,
            errors: result.errors.iter().map(JsonError::from).collect(),
        };

        Self::write_value(&output, writer)
    }

    fn format_report(&self, report: &DistroReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let value = self
            .report_to_json(report)
            .map_err(std::io::Error::other)?;
        Self::write_value(&value, writer)
    }
}
