#![warn(missing_docs)]
//! fwmon Core - Telemetry Analyzers
//!
//! This crate turns a firmware event log into operational metrics:
//! - `Event` model matching the collector's JSON shape
//! - Numeric reading extraction per metric series
//! - Boot time from INIT/READY markers
//! - Security finding tallies
//! - Boost-mode interval reconstruction
//!
//! All analyzers borrow the log read-only and report missing data as `None`.

mod analysis;
mod boost;
mod boot;
mod error;
mod event;
mod extract;
mod metrics;
mod security;

pub use analysis::{
    LogAnalysis, analyze_log, analyze_metrics, analyze_value, parse_log, parse_log_str,
    summarize_metric,
};
pub use boost::{
    BoostInterval, BoostSummary, BoostTracker, Mode, boost_duration_seconds, track_boost,
};
pub use boot::{BootMarkers, boot_time_from_markers, boot_time_seconds, find_boot_markers};
pub use error::AnalysisError;
pub use event::{
    AUTH_FAILED_EVENT, BOOT_INIT, BOOT_READY, BOOT_STATUS_KEY, BREACH_DETECTED, EXIT_BOOST_EVENT,
    Event, MODE_BOOST, MODE_KEY, Reading, SECURITY_STATE_KEY,
};
pub use extract::extract_numeric;
pub use metrics::MetricKind;
pub use security::{SecurityFinding, SecurityFindings, analyze_security};
