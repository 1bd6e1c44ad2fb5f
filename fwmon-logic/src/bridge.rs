//! Analysis → Scenario
//!
//! Turns a [`LogAnalysis`] into the aggregate shape the evaluator consumes,
//! so raw logs can be judged against the same threshold table as
//! pre-aggregated scenarios.

use crate::evaluation::{MetricAggregate, ScenarioMetrics};
use fwmon_core::{LogAnalysis, MetricKind};

/// Threshold name for the boot marker aggregate
pub const BOOT_TIMESTAMPS_METRIC: &str = "Boot Timestamps";

impl ScenarioMetrics {
    /// Build a scenario from a log analysis.
    ///
    /// Each analysed series becomes `{min, max = peak, avg = average}` under
    /// its threshold name. When the boot time is known, the INIT and READY
    /// timestamps form a "Boot Timestamps" aggregate (min = INIT,
    /// max = READY, avg = their mean).
    pub fn from_analysis(name: impl Into<String>, analysis: &LogAnalysis) -> Self {
        let mut scenario = ScenarioMetrics::new(name);

        let markers = analysis.boot_markers;
        if let (Some(init), Some(ready), Some(_)) =
            (markers.init_ms, markers.ready_ms, markers.duration_s())
        {
            scenario.metrics.insert(
                BOOT_TIMESTAMPS_METRIC.to_string(),
                MetricAggregate::new(init, ready, (init + ready) / 2.0),
            );
        }

        for kind in MetricKind::ALL {
            if let Some(summary) = analysis.metric(kind) {
                scenario.metrics.insert(
                    kind.threshold_name().to_string(),
                    MetricAggregate::new(summary.min, summary.peak, summary.average),
                );
            }
        }

        scenario
    }
}
