//! Scenario Evaluation
//!
//! Scenarios come either from a JSON file of aggregate records or from
//! analyzed logs. Evaluation fans out over the rayon pool.

use anyhow::Context;
use fwmon_logic::{ScenarioMetrics, ScenarioRecord, ThresholdTable, evaluate_scenarios};
use fwmon_report::{LogReportEntry, LogStatus};
use fxhash::FxHashSet;
use regex::Regex;
use std::path::Path;

/// Load a JSON array of scenario aggregate records
pub fn load_scenarios(path: &Path) -> anyhow::Result<Vec<ScenarioMetrics>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenarios {}", path.display()))?;
    let scenarios: Vec<ScenarioMetrics> = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse scenarios {}", path.display()))?;
    Ok(scenarios)
}

/// One scenario per successfully analyzed log, named after the log
pub fn scenarios_from_logs(entries: &[LogReportEntry]) -> Vec<ScenarioMetrics> {
    entries
        .iter()
        .filter(|entry| entry.status == LogStatus::Analyzed)
        .filter_map(|entry| {
            entry
                .analysis
                .as_ref()
                .map(|analysis| ScenarioMetrics::from_analysis(&entry.name, analysis))
        })
        .collect()
}

/// Filter scenarios by name and evaluate them against `thresholds`.
///
/// Duplicate scenario names are evaluated independently but reported once
/// as a warning.
pub fn evaluate_all(
    scenarios: &[ScenarioMetrics],
    thresholds: &ThresholdTable,
    filter: Option<&Regex>,
) -> Vec<ScenarioRecord> {
    let selected: Vec<ScenarioMetrics> = scenarios
        .iter()
        .filter(|s| filter.is_none_or(|re| re.is_match(&s.name)))
        .cloned()
        .collect();

    let mut seen = FxHashSet::default();
    for scenario in &selected {
        if !seen.insert(scenario.name.as_str()) {
            tracing::warn!(scenario = %scenario.name, "duplicate scenario name");
        }
    }

    if thresholds.is_empty() {
        tracing::warn!("no thresholds configured; every metric will be skipped");
    }

    evaluate_scenarios(&selected, thresholds)
}
