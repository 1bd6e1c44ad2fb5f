//! Scenario Evaluation
//!
//! Compares per-metric averages against a [`ThresholdTable`] and rolls the
//! metric verdicts into a scenario verdict.
//!
//! The metric universe of a scenario is every metric in the threshold table
//! plus every metric the scenario recorded. A configured metric the scenario
//! never recorded is a SKIP, so a scenario missing one of its metrics can be
//! MIXED at best.

use crate::thresholds::ThresholdTable;
use crate::verdict::{MetricVerdict, ScenarioVerdict, VerdictTally};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Aggregate statistics for one metric of a scenario
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAggregate {
    /// Smallest reading
    pub min: Option<f64>,
    /// Largest reading
    pub max: Option<f64>,
    /// Average reading; the only value compared against a ceiling
    pub avg: Option<f64>,
}

impl MetricAggregate {
    /// Aggregate with all three values present
    pub fn new(min: f64, max: f64, avg: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            avg: Some(avg),
        }
    }

    /// Aggregate that only carries an average
    pub fn average(avg: f64) -> Self {
        Self {
            avg: Some(avg),
            ..Self::default()
        }
    }

    /// True when no value at all is present
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.avg.is_none()
    }

    fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_f64);
        Self {
            min: field("min"),
            max: field("max"),
            avg: field("avg"),
        }
    }
}

/// A named scenario with its per-metric aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    /// Scenario name
    #[serde(rename = "scenario", alias = "name")]
    pub name: String,
    /// Aggregates keyed by metric name. Malformed entries load as empty.
    #[serde(default, deserialize_with = "lenient_aggregates")]
    pub metrics: BTreeMap<String, MetricAggregate>,
}

impl ScenarioMetrics {
    /// Create a scenario without metrics
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metrics: BTreeMap::new(),
        }
    }

    /// Attach a metric aggregate
    pub fn with(mut self, metric: impl Into<String>, aggregate: MetricAggregate) -> Self {
        self.metrics.insert(metric.into(), aggregate);
        self
    }
}

fn lenient_aggregates<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, MetricAggregate>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => map
            .iter()
            .map(|(name, entry)| (name.clone(), MetricAggregate::from_value(entry)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

/// Evaluated scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Scenario name
    pub name: String,
    /// Aggregates as supplied
    pub metrics: BTreeMap<String, MetricAggregate>,
    /// Verdict for every metric in the universe
    pub verdicts: BTreeMap<String, MetricVerdict>,
    /// Rolled-up verdict
    pub scenario_verdict: ScenarioVerdict,
}

impl ScenarioRecord {
    /// Counts of the metric verdicts
    pub fn tally(&self) -> VerdictTally {
        self.verdicts.values().copied().collect()
    }
}

/// Verdict for a single metric.
///
/// No ceiling, no aggregate, or no average ⇒ SKIP. Otherwise PASS when
/// `avg <= ceiling` (inclusive), FAIL above it.
pub fn evaluate_metric(
    metric: &str,
    aggregate: Option<&MetricAggregate>,
    thresholds: &ThresholdTable,
) -> MetricVerdict {
    let Some(ceiling) = thresholds.ceiling(metric) else {
        return MetricVerdict::Skip;
    };

    match aggregate.and_then(|a| a.avg).filter(|avg| !avg.is_nan()) {
        None => MetricVerdict::Skip,
        Some(avg) if avg <= ceiling => MetricVerdict::Pass,
        Some(_) => MetricVerdict::Fail,
    }
}

/// Evaluate one scenario over its full metric universe
pub fn evaluate_scenario(scenario: &ScenarioMetrics, thresholds: &ThresholdTable) -> ScenarioRecord {
    let universe = thresholds.metric_names().chain(
        scenario
            .metrics
            .keys()
            .map(String::as_str)
            .filter(|name| thresholds.ceiling(name).is_none()),
    );

    let verdicts: BTreeMap<String, MetricVerdict> = universe
        .map(|name| {
            let verdict = evaluate_metric(name, scenario.metrics.get(name), thresholds);
            (name.to_string(), verdict)
        })
        .collect();

    let scenario_verdict = verdicts.values().copied().collect::<VerdictTally>().verdict();
    tracing::debug!(scenario = %scenario.name, verdict = %scenario_verdict, "scenario evaluated");

    ScenarioRecord {
        name: scenario.name.clone(),
        metrics: scenario.metrics.clone(),
        verdicts,
        scenario_verdict,
    }
}

/// Evaluate a batch of independent scenarios (parallelized with Rayon).
///
/// Results keep the input order.
pub fn evaluate_scenarios(
    scenarios: &[ScenarioMetrics],
    thresholds: &ThresholdTable,
) -> Vec<ScenarioRecord> {
    scenarios
        .par_iter()
        .map(|scenario| evaluate_scenario(scenario, thresholds))
        .collect()
}

/// Counts across an evaluation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Scenarios evaluated
    pub total_scenarios: usize,
    /// Scenarios that passed
    pub passed: usize,
    /// Scenarios that failed
    pub failed: usize,
    /// Scenarios that were skipped
    pub skipped: usize,
    /// Scenarios with a mix of passes and skips
    pub mixed: usize,
    /// Metric verdict counts across all scenarios
    pub metrics: VerdictTally,
}

impl EvaluationSummary {
    /// Should the run be reported as failing?
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Aggregate scenario records for reporting
pub fn summarize_evaluation(records: &[ScenarioRecord]) -> EvaluationSummary {
    let mut summary = EvaluationSummary {
        total_scenarios: records.len(),
        ..Default::default()
    };

    for record in records {
        match record.scenario_verdict {
            ScenarioVerdict::Pass => summary.passed += 1,
            ScenarioVerdict::Fail => summary.failed += 1,
            ScenarioVerdict::Skip => summary.skipped += 1,
            ScenarioVerdict::Mixed => summary.mixed += 1,
        }
        summary.metrics.merge(&record.tally());
    }

    summary
}
