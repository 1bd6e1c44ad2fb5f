//! Boost-Interval State Machine
//!
//! Reconstructs the intervals spent in `BOOST` mode from a flat event stream.
//! The scan is a left-to-right fold carrying the last observed mode, the open
//! interval start and the closed intervals, so it works over any ordered
//! iterator of events.
//!
//! ```text
//!             mode == BOOST, last mode != BOOST
//!   NORMAL  ───────────────────────────────────▶  BOOST (open at t)
//!     ▲                                              │
//!     └──────────────────────────────────────────────┘
//!             mode != BOOST (close at t)
//! ```
//!
//! Events without a mode observation are inert. Events without a usable
//! timestamp update the last observed mode but never open or close an
//! interval. An interval still open at the end of the log is closed at the
//! timestamp of the last event, if that is later than the interval start.

use crate::event::{EXIT_BOOST_EVENT, Event, MODE_BOOST, MODE_KEY};
use serde::{Deserialize, Serialize};

/// Operating mode as observed in a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Any mode other than boost
    Normal,
    /// Elevated-performance mode
    Boost,
}

impl Mode {
    /// Mode observed in an event, if any.
    ///
    /// A textual `mode` reading decides it: `"BOOST"` is boost, any other
    /// text is normal. A `null` or non-text mode counts as unspecified, like
    /// a missing one. An "Exit Boost" event without a textual mode is an
    /// explicit exit.
    pub fn observed(event: &Event) -> Option<Mode> {
        match event.text(MODE_KEY) {
            Some(MODE_BOOST) => Some(Mode::Boost),
            Some(_) => Some(Mode::Normal),
            None if event.name == EXIT_BOOST_EVENT => Some(Mode::Normal),
            None => None,
        }
    }
}

/// A closed boost interval (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostInterval {
    /// Timestamp the interval opened at
    pub start_ms: f64,
    /// Timestamp the interval closed at (never before `start_ms`)
    pub end_ms: f64,
}

impl BoostInterval {
    /// Interval length in milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }
}

/// Fold state for boost interval reconstruction
#[derive(Debug, Clone, Default)]
pub struct BoostTracker {
    last_mode: Option<Mode>,
    open_since: Option<f64>,
    last_timestamp: Option<f64>,
    intervals: Vec<BoostInterval>,
}

impl BoostTracker {
    /// Fresh tracker: no mode observed, nothing open
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next event
    pub fn observe(&mut self, event: &Event) {
        let timestamp = event.timestamp();
        self.last_timestamp = timestamp;

        let Some(mode) = Mode::observed(event) else {
            return;
        };

        if let Some(ts) = timestamp {
            match (mode, self.open_since) {
                (Mode::Boost, None) if self.last_mode != Some(Mode::Boost) => {
                    self.open_since = Some(ts);
                }
                (Mode::Normal, Some(start)) => {
                    self.close(start, ts);
                    self.open_since = None;
                }
                _ => {}
            }
        }

        self.last_mode = Some(mode);
    }

    /// Whether a boost interval is currently open
    pub fn is_open(&self) -> bool {
        self.open_since.is_some()
    }

    /// Close any open interval at the last event's timestamp and summarize
    pub fn finish(mut self) -> BoostSummary {
        if let (Some(start), Some(end)) = (self.open_since, self.last_timestamp) {
            if end > start {
                self.close(start, end);
            }
        }

        BoostSummary {
            intervals: self.intervals,
        }
    }

    fn close(&mut self, start_ms: f64, end_ms: f64) {
        // Out-of-order timestamps cannot form an interval.
        if end_ms < start_ms {
            tracing::debug!(start_ms, end_ms, "dropping boost interval closed before it opened");
            return;
        }
        self.intervals.push(BoostInterval { start_ms, end_ms });
    }
}

/// Boost intervals reconstructed from one log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoostSummary {
    /// Closed intervals in the order they ended
    pub intervals: Vec<BoostInterval>,
}

impl BoostSummary {
    /// Total time in boost, milliseconds
    pub fn total_ms(&self) -> f64 {
        self.intervals.iter().map(BoostInterval::duration_ms).sum()
    }

    /// Total time in boost in seconds, or `None` when no time was spent there
    pub fn duration_s(&self) -> Option<f64> {
        let total = self.total_ms();
        (total > 0.0).then(|| total / 1000.0)
    }
}

/// Reconstruct boost intervals from an ordered event stream
pub fn track_boost<'a, I>(events: I) -> BoostSummary
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .fold(BoostTracker::new(), |mut tracker, event| {
            tracker.observe(event);
            tracker
        })
        .finish()
}

/// Total boost duration in seconds, or `None` if boost was never observed
pub fn boost_duration_seconds<'a, I>(events: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Event>,
{
    track_boost(events).duration_s()
}
