#![warn(missing_docs)]
//! fwmon Logic - Threshold Evaluation Engine
//!
//! Judges scenario aggregates against a threshold table:
//! - PASS/FAIL/SKIP per metric (average vs. inclusive ceiling)
//! - PASS/FAIL/SKIP/MIXED per scenario under one precedence table
//! - Run-level counts for reporting and exit status

mod bridge;
mod evaluation;
mod thresholds;
mod verdict;

pub use bridge::BOOT_TIMESTAMPS_METRIC;
pub use evaluation::{
    EvaluationSummary, MetricAggregate, ScenarioMetrics, ScenarioRecord, evaluate_metric,
    evaluate_scenario, evaluate_scenarios, summarize_evaluation,
};
pub use thresholds::ThresholdTable;
pub use verdict::{MetricVerdict, ScenarioVerdict, VerdictTally, aggregate_verdicts};
