//! Pipeline Executor
//!
//! Turns log files and scenario files into a [`fwmon_report::Report`].
//!
//! ## Pipeline Overview
//!
//! ```text
//! log files (JSON arrays of events)      scenario file (JSON array)
//!       │                                        │
//!       ▼                                        │
//! ┌─────────────┐                                │
//! │  analysis   │  Parse + analyze (parallel)    │
//! └──────┬──────┘                                │
//!        │ --evaluate                            │
//!        ▼                                       ▼
//! ┌─────────────┐
//! │ evaluation  │  Threshold verdicts per scenario (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Report + summary counts
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - Log loading and per-log analysis
//! - [`evaluation`] - Scenario loading and threshold evaluation
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - Run metadata collection

mod analysis;
mod evaluation;
mod formatting;
mod metadata;
mod report;

pub use analysis::{LogSource, analyze_logs, load_logs};
pub use evaluation::{evaluate_all, load_scenarios, scenarios_from_logs};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;
pub use report::build_report;
