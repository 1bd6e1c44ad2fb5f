//! Metric series analysed from telemetry readings

use serde::{Deserialize, Serialize};

/// A numeric reading series with its own summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// CPU load, percent
    Cpu,
    /// Memory footprint, kilobytes
    Memory,
    /// Power draw, milliwatts
    Power,
    /// Die temperature, degrees Celsius
    Temperature,
    /// Task latency, microseconds
    Latency,
}

impl MetricKind {
    /// Every series, in report order
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Cpu,
        MetricKind::Memory,
        MetricKind::Power,
        MetricKind::Temperature,
        MetricKind::Latency,
    ];

    /// Reading key the collector records this series under
    pub fn reading_key(self) -> &'static str {
        match self {
            MetricKind::Cpu => "cpu_percent",
            MetricKind::Memory => "mem_kbytes",
            MetricKind::Power => "power_mw",
            MetricKind::Temperature => "temperature_c",
            MetricKind::Latency => "latency_us",
        }
    }

    /// Human-readable label used in analysis reports
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Cpu => "CPU Usage (%)",
            MetricKind::Memory => "Memory Footprint (KB)",
            MetricKind::Power => "Power Consumption (mW)",
            MetricKind::Temperature => "Temperature (C)",
            MetricKind::Latency => "Task Latency (us)",
        }
    }

    /// Name of the series in a threshold table
    pub fn threshold_name(self) -> &'static str {
        match self {
            MetricKind::Cpu => "CPU (%)",
            MetricKind::Memory => "Memory (KB)",
            MetricKind::Power => "Power (mW)",
            MetricKind::Temperature => "Temperature (°C)",
            MetricKind::Latency => "Latency (us)",
        }
    }

    /// Whether the summary carries a p95 tail figure
    pub fn has_tail(self) -> bool {
        matches!(self, MetricKind::Latency)
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
