//! Event Model
//!
//! One entry of a firmware telemetry log. The wire form is the collector's
//! JSON shape:
//!
//! ```json
//! {"event": "CPU Usage", "timestamp_ms": 1500, "metric": {"cpu_percent": 5.2, "mode": "NORMAL"}}
//! ```
//!
//! Every member is optional, and malformed members are dropped on load
//! instead of rejecting the entry: a non-numeric `timestamp_ms` becomes
//! "no timestamp", a non-object `metric` becomes "no readings".

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Reading key carrying the boot phase marker
pub const BOOT_STATUS_KEY: &str = "boot_status";
/// Reading key carrying the operating mode
pub const MODE_KEY: &str = "mode";
/// Reading key carrying the security state flag
pub const SECURITY_STATE_KEY: &str = "security_state";

/// `boot_status` value emitted when the system starts initializing
pub const BOOT_INIT: &str = "INIT";
/// `boot_status` value emitted when the system is ready
pub const BOOT_READY: &str = "READY";
/// `mode` value for the elevated-performance state
pub const MODE_BOOST: &str = "BOOST";
/// `security_state` value flagging a breach
pub const BREACH_DETECTED: &str = "BREACH_DETECTED";

/// Event name for a failed authentication attempt
pub const AUTH_FAILED_EVENT: &str = "Authentication Failed";
/// Event name the collector emits when leaving boost mode
pub const EXIT_BOOST_EVENT: &str = "Exit Boost";

/// A single reading value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    /// Numeric reading (integers are widened to f64)
    Number(f64),
    /// Categorical reading such as a mode or status marker
    Text(String),
    /// Anything else the collector sent; never numeric
    Other(Value),
}

impl Reading {
    /// Numeric value, if this reading is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Reading::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text value, if this reading is a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reading::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for Reading {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => Reading::Number(f),
                None => Reading::Other(Value::Number(n)),
            },
            Value::String(s) => Reading::Text(s),
            other => Reading::Other(other),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Reading::Number(value as f64)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Reading::Text(value.to_string())
    }
}

/// A telemetry event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name (e.g. "CPU Usage", "Authentication Failed")
    #[serde(rename = "event", default, deserialize_with = "lenient_name")]
    pub name: String,
    /// Milliseconds since the start of the run
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp_ms: Option<f64>,
    /// Named readings attached to the event
    #[serde(
        rename = "metric",
        default,
        deserialize_with = "lenient_readings",
        skip_serializing_if = "Option::is_none"
    )]
    pub readings: Option<BTreeMap<String, Reading>>,
}

impl Event {
    /// Create an event with a name and nothing else
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp_ms: None,
            readings: None,
        }
    }

    /// Set the timestamp in milliseconds
    pub fn at(mut self, timestamp_ms: f64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Attach a reading
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Reading>) -> Self {
        self.readings
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Usable timestamp: present and finite
    pub fn timestamp(&self) -> Option<f64> {
        self.timestamp_ms.filter(|t| t.is_finite())
    }

    /// Look up a reading by key
    pub fn reading(&self, key: &str) -> Option<&Reading> {
        self.readings.as_ref()?.get(key)
    }

    /// Numeric reading under `key`
    pub fn number(&self, key: &str) -> Option<f64> {
        self.reading(key)?.as_number()
    }

    /// Text reading under `key`
    pub fn text(&self, key: &str) -> Option<&str> {
        self.reading(key)?.as_text()
    }

    /// Whether the text reading under `key` equals `expected`
    pub fn reads(&self, key: &str, expected: &str) -> bool {
        self.text(key) == Some(expected)
    }
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|t| t.is_finite()))
}

fn lenient_readings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, Reading>>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => Some(map.into_iter().map(|(k, v)| (k, Reading::from(v))).collect()),
        _ => None,
    })
}
