#![warn(missing_docs)]
//! fwmon Statistics Engine
//!
//! Reduces firmware readings to distribution summaries:
//! - Average, minimum and peak over every reading
//! - Nearest-rank percentiles for tail latency (no interpolation)
//!
//! Empty input never produces a zeroed summary. Every entry point returns
//! `None` so callers can omit the metric instead of reporting a fake value.

mod percentiles;
mod summary;

pub use percentiles::{P95, nearest_rank, nearest_rank_sorted};
pub use summary::{StatisticsSummary, compute_latency_summary, compute_summary};
