//! Report Data Structures

use chrono::{DateTime, Utc};
use fwmon_core::LogAnalysis;
use fwmon_logic::{EvaluationSummary, ScenarioRecord};
use serde::{Deserialize, Serialize};

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub logs: Vec<LogReportEntry>,
    pub scenarios: Vec<ScenarioRecord>,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Build identifier supplied by the caller; never interpreted
    pub build: Option<String>,
}

/// Analysis of one event log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogReportEntry {
    pub name: String,
    pub status: LogStatus,
    pub analysis: Option<LogAnalysis>,
    pub failure: Option<FailureInfo>,
}

impl LogReportEntry {
    /// Entry for a log that was analysed
    pub fn analyzed(name: impl Into<String>, analysis: LogAnalysis) -> Self {
        Self {
            name: name.into(),
            status: LogStatus::Analyzed,
            analysis: Some(analysis),
            failure: None,
        }
    }

    /// Entry for a log that was rejected
    pub fn failed(name: impl Into<String>, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: LogStatus::Failed,
            analysis: None,
            failure: Some(FailureInfo {
                kind: kind.into(),
                message: message.into(),
            }),
        }
    }
}

/// Log analysis status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Analyzed,
    Failed,
}

/// Failure information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureInfo {
    pub kind: String,
    pub message: String,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_logs: usize,
    pub analyzed_logs: usize,
    pub failed_logs: usize,
    pub evaluation: EvaluationSummary,
    pub total_duration_ms: f64,
}

impl ReportSummary {
    /// Should the run exit with a failure status?
    pub fn should_fail(&self) -> bool {
        self.failed_logs > 0 || self.evaluation.has_failures()
    }
}
