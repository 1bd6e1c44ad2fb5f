//! Summary Statistics
//!
//! Average, minimum and peak over every reading. There is no outlier removal:
//! a single thermal spike is exactly what a firmware report has to show.

use crate::percentiles::{P95, nearest_rank_sorted};
use serde::{Deserialize, Serialize};

/// Distribution summary for one metric series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Arithmetic mean (`sum / count`)
    pub average: f64,
    /// Largest reading
    pub peak: f64,
    /// Smallest reading
    pub min: f64,
    /// Nearest-rank 95th percentile (latency series only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p95: Option<f64>,
    /// Number of readings summarized
    pub sample_count: usize,
}

/// Compute average, min and peak.
///
/// Returns `None` when there are no readings; an empty series has no summary.
pub fn compute_summary(samples: &[f64]) -> Option<StatisticsSummary> {
    if samples.is_empty() {
        return None;
    }

    let sum: f64 = samples.iter().sum();
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let peak = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(StatisticsSummary {
        average: sum / samples.len() as f64,
        peak,
        min,
        p95: None,
        sample_count: samples.len(),
    })
}

/// Compute a summary with the additional p95 figure used for task latency.
pub fn compute_latency_summary(samples: &[f64]) -> Option<StatisticsSummary> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let p95 = nearest_rank_sorted(&sorted, P95)?;
    let summary = compute_summary(&sorted)?;

    Some(StatisticsSummary {
        p95: Some(p95),
        ..summary
    })
}
