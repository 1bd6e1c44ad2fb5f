#![warn(missing_docs)]
//! # fwmon
//!
//! Firmware telemetry analysis for embedded validation runs.
//!
//! fwmon turns the event log of a firmware run into operational metrics:
//! - **Boot time**: seconds between the first `INIT` and the first `READY` marker
//! - **Series statistics**: average, peak and minimum for CPU, memory, power and
//!   temperature, plus a nearest-rank p95 for task latency
//! - **Security findings**: failed authentication attempts and breach detections
//! - **Boost accounting**: total time spent in boost mode, including a run that
//!   ends while still boosted
//! - **Threshold verdicts**: PASS/FAIL/SKIP per metric and an aggregated
//!   PASS/FAIL/SKIP/MIXED verdict per scenario
//!
//! Absent data is always reported as absent, never as zero.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fwmon::{ScenarioMetrics, ThresholdTable, analyze_value, evaluate_scenario};
//!
//! let analysis = analyze_value(&log_json)?;
//! println!("boot time: {:?}", analysis.boot_time_s);
//!
//! let thresholds = ThresholdTable::new().with("CPU (%)", 80.0);
//! let record = evaluate_scenario(&ScenarioMetrics::from_analysis("run", &analysis), &thresholds);
//! println!("{}", record.scenario_verdict);
//! ```

// Re-export core types
pub use fwmon_core::{
    AnalysisError, BootMarkers, BoostInterval, BoostSummary, BoostTracker, Event, LogAnalysis,
    MetricKind, Mode, Reading, SecurityFinding, SecurityFindings, analyze_log, analyze_metrics,
    analyze_security, analyze_value, boost_duration_seconds, boot_time_seconds, extract_numeric,
    find_boot_markers, parse_log, parse_log_str, summarize_metric, track_boost,
};

// Re-export logic types
pub use fwmon_logic::{
    BOOT_TIMESTAMPS_METRIC, EvaluationSummary, MetricAggregate, MetricVerdict, ScenarioMetrics,
    ScenarioRecord, ScenarioVerdict, ThresholdTable, VerdictTally, aggregate_verdicts,
    evaluate_metric, evaluate_scenario, evaluate_scenarios, summarize_evaluation,
};

// Re-export stats
pub use fwmon_stats::{P95, StatisticsSummary, compute_latency_summary, compute_summary, nearest_rank};

// Re-export report model
pub use fwmon_report::{
    LogReportEntry, LogStatus, OutputFormat, Report, ReportMeta, ReportSummary,
    generate_json_report,
};

pub use fwmon_cli::{FwmonConfig, default_thresholds};

/// Run the fwmon CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     fwmon::run()
/// }
/// ```
pub use fwmon_cli::run;
