//! Boot-Time Analyzer
//!
//! Boot time is the gap between the first `INIT` marker and the first `READY`
//! marker. The scan ends at the first `READY`, so a `READY` logged before any
//! `INIT` leaves the boot time undetermined.

use crate::event::{BOOT_INIT, BOOT_READY, BOOT_STATUS_KEY, Event};
use serde::{Deserialize, Serialize};

/// Boot markers found in a log (timestamps in milliseconds)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BootMarkers {
    /// First `INIT` marker
    pub init_ms: Option<f64>,
    /// First `READY` marker
    pub ready_ms: Option<f64>,
}

impl BootMarkers {
    /// Boot duration in seconds, if both markers exist and are ordered
    pub fn duration_s(&self) -> Option<f64> {
        match (self.init_ms, self.ready_ms) {
            (Some(init), Some(ready)) if ready > init => Some((ready - init) / 1000.0),
            _ => None,
        }
    }
}

/// Locate the boot markers. Events without a usable timestamp are ignored.
pub fn find_boot_markers<'a, I>(events: I) -> BootMarkers
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut markers = BootMarkers::default();

    for event in events {
        let Some(timestamp) = event.timestamp() else {
            continue;
        };

        if event.reads(BOOT_STATUS_KEY, BOOT_INIT) {
            markers.init_ms.get_or_insert(timestamp);
        } else if event.reads(BOOT_STATUS_KEY, BOOT_READY) {
            markers.ready_ms = Some(timestamp);
            break;
        }
    }

    markers
}

/// Boot time in seconds, or `None` when it cannot be determined
pub fn boot_time_seconds<'a, I>(events: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Event>,
{
    boot_time_from_markers(&find_boot_markers(events))
}

/// Boot time from already located markers; logs when undetermined
pub fn boot_time_from_markers(markers: &BootMarkers) -> Option<f64> {
    let duration = markers.duration_s();
    if duration.is_none() {
        tracing::debug!(?markers, "boot time not determinable");
    }
    duration
}
