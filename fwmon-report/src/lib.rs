#![warn(missing_docs)]
//! fwmon Report - Report Model and Output
//!
//! Carries everything a renderer needs:
//! - Run metadata (tool version, UTC timestamp, opaque build identifier)
//! - Per-log analysis entries, including logs rejected as malformed
//! - Per-scenario evaluation records
//! - Summary counts driving the exit status
//!
//! JSON output lives here; human-readable text is rendered by the CLI.

mod json;
mod report;

pub use json::{generate_json_report, parse_json_report};
pub use report::{
    FailureInfo, LogReportEntry, LogStatus, REPORT_SCHEMA_VERSION, Report, ReportMeta,
    ReportSummary,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" | "txt" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format seconds for display, e.g. `4.90 s`
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.2} s", seconds)
}
