//! Log Analysis
//!
//! Entry points that run every analyzer over one event log.
//!
//! ```text
//! serde_json::Value ──parse_log──▶ Vec<Event>
//!                                      │
//!        ┌──────────────┬──────────────┼──────────────┐
//!        ▼              ▼              ▼              ▼
//!   boot markers   security tally  boost fold   metric extractor
//!        │              │              │              │
//!        │              │              │        fwmon_stats summary
//!        └──────────────┴──────┬───────┴──────────────┘
//!                              ▼
//!                         LogAnalysis
//! ```

use crate::boost::boost_duration_seconds;
use crate::boot::{BootMarkers, boot_time_from_markers, find_boot_markers};
use crate::error::AnalysisError;
use crate::event::Event;
use crate::extract::extract_numeric;
use crate::metrics::MetricKind;
use crate::security::{SecurityFindings, analyze_security};
use fwmon_stats::{StatisticsSummary, compute_latency_summary, compute_summary};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Everything derived from one event log.
///
/// `None` and missing map entries mean "no usable data", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogAnalysis {
    /// INIT and READY marker timestamps
    pub boot_markers: BootMarkers,
    /// Seconds from the first INIT to the first READY marker
    pub boot_time_s: Option<f64>,
    /// Non-zero security findings
    pub security: Option<SecurityFindings>,
    /// Total seconds spent in boost mode
    pub boost_duration_s: Option<f64>,
    /// Summary per series; series without numeric readings are omitted
    pub metrics: BTreeMap<MetricKind, StatisticsSummary>,
}

impl LogAnalysis {
    /// Summary for one series
    pub fn metric(&self, kind: MetricKind) -> Option<&StatisticsSummary> {
        self.metrics.get(&kind)
    }

    /// True when nothing at all could be derived
    pub fn is_empty(&self) -> bool {
        self.boot_time_s.is_none()
            && self.security.is_none()
            && self.boost_duration_s.is_none()
            && self.metrics.is_empty()
    }
}

/// Summarize one series
pub fn summarize_metric(events: &[Event], kind: MetricKind) -> Option<StatisticsSummary> {
    let readings = extract_numeric(events, kind.reading_key());
    if kind.has_tail() {
        compute_latency_summary(&readings)
    } else {
        compute_summary(&readings)
    }
}

/// Summarize every series that has at least one numeric reading
pub fn analyze_metrics(events: &[Event]) -> BTreeMap<MetricKind, StatisticsSummary> {
    MetricKind::ALL
        .into_iter()
        .filter_map(|kind| summarize_metric(events, kind).map(|summary| (kind, summary)))
        .collect()
}

/// Run every analyzer over an event log
pub fn analyze_log(events: &[Event]) -> LogAnalysis {
    let boot_markers = find_boot_markers(events);
    let boot_time_s = boot_time_from_markers(&boot_markers);

    LogAnalysis {
        boot_markers,
        boot_time_s,
        security: analyze_security(events),
        boost_duration_s: boost_duration_seconds(events),
        metrics: analyze_metrics(events),
    }
}

/// Load an event log from a JSON value.
///
/// The value must be an array of objects. Anything else is rejected with
/// [`AnalysisError::InvalidShape`] or [`AnalysisError::InvalidEntry`].
pub fn parse_log(value: &Value) -> Result<Vec<Event>, AnalysisError> {
    let entries = value.as_array().ok_or(AnalysisError::InvalidShape {
        found: json_type(value),
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(AnalysisError::InvalidEntry {
                    index,
                    found: json_type(entry),
                });
            }
            Event::deserialize(entry).map_err(|e| AnalysisError::Json(e.to_string()))
        })
        .collect()
}

/// Load an event log from JSON text
pub fn parse_log_str(json: &str) -> Result<Vec<Event>, AnalysisError> {
    let value: Value = serde_json::from_str(json).map_err(|e| AnalysisError::Json(e.to_string()))?;
    parse_log(&value)
}

/// Validate and analyze a JSON event log in one step
pub fn analyze_value(value: &Value) -> Result<LogAnalysis, AnalysisError> {
    let events = parse_log(value)?;
    Ok(analyze_log(&events))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
