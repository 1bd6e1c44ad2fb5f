//! Report Building
//!
//! Assembles the [`Report`] from analyzed logs and evaluated scenarios.

use fwmon_logic::{ScenarioRecord, summarize_evaluation};
use fwmon_report::{LogReportEntry, LogStatus, Report, ReportMeta, ReportSummary};

/// Build a complete report with summary counts
pub fn build_report(
    meta: ReportMeta,
    logs: Vec<LogReportEntry>,
    scenarios: Vec<ScenarioRecord>,
    total_duration_ms: f64,
) -> Report {
    let failed_logs = logs
        .iter()
        .filter(|entry| entry.status == LogStatus::Failed)
        .count();

    let summary = ReportSummary {
        total_logs: logs.len(),
        analyzed_logs: logs.len() - failed_logs,
        failed_logs,
        evaluation: summarize_evaluation(&scenarios),
        total_duration_ms,
    };

    Report {
        meta,
        logs,
        scenarios,
        summary,
    }
}
