//! Threshold Table
//!
//! Metric name → ceiling. Passed into the evaluator at call time; there is no
//! built-in table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper bounds on metric averages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdTable {
    ceilings: BTreeMap<String, f64>,
}

impl ThresholdTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a ceiling
    pub fn set(&mut self, metric: impl Into<String>, ceiling: f64) {
        self.ceilings.insert(metric.into(), ceiling);
    }

    /// Builder form of [`ThresholdTable::set`]
    pub fn with(mut self, metric: impl Into<String>, ceiling: f64) -> Self {
        self.set(metric, ceiling);
        self
    }

    /// Ceiling configured for a metric
    pub fn ceiling(&self, metric: &str) -> Option<f64> {
        self.ceilings.get(metric).copied()
    }

    /// Configured metric names, sorted
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.ceilings.keys().map(String::as_str)
    }

    /// Iterate over `(metric, ceiling)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ceilings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of configured ceilings
    pub fn len(&self) -> usize {
        self.ceilings.len()
    }

    /// True when no ceiling is configured
    pub fn is_empty(&self) -> bool {
        self.ceilings.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ThresholdTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            ceilings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
