//! Configuration loading from fwmon.toml
//!
//! fwmon configuration can be specified in a `fwmon.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use anyhow::Context;
use fwmon_logic::ThresholdTable;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up by [`FwmonConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "fwmon.toml";

/// fwmon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FwmonConfig {
    /// Ceiling per metric name; a `[thresholds]` table replaces the defaults entirely
    #[serde(default = "default_thresholds")]
    pub thresholds: ThresholdTable,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Run configuration
    #[serde(default)]
    pub run: RunConfig,
}

impl Default for FwmonConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
            output: OutputConfig::default(),
            run: RunConfig::default(),
        }
    }
}

/// Ceilings used by the firmware validation team
pub fn default_thresholds() -> ThresholdTable {
    ThresholdTable::new()
        .with("CPU (%)", 80.0)
        .with("Memory (KB)", 900.0)
        .with("Boot Timestamps", 5000.0)
        .with("Power (mW)", 100.0)
        .with("Temperature (°C)", 85.0)
        .with("Latency (us)", 5000.0)
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

/// Run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Build identifier attached to reports when `--build` is not given
    #[serde(default)]
    pub build: Option<String>,
}

impl FwmonConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `fwmon.toml`
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "loaded configuration");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!("ignoring {}: {:#}", config_path.display(), e);
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# fwmon Configuration
# https://github.com/ml-rust/fwmon

[thresholds]
# Ceiling per metric; a scenario average above its ceiling fails.
# Metrics missing here are skipped.
"CPU (%)" = 80.0
"Memory (KB)" = 900.0
"Boot Timestamps" = 5000.0
"Power (mW)" = 100.0
"Temperature (°C)" = 85.0
"Latency (us)" = 5000.0

[output]
# Default output format: human, json
format = "human"

[run]
# Build identifier attached to reports (uncomment to enable)
# build = "NA"
"#
        .to_string()
    }
}
