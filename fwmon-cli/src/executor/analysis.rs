//! Log Analysis
//!
//! Loads event logs from disk and analyzes them in parallel. A log that is
//! not shaped like a sequence of events becomes a failed report entry and
//! the remaining logs are still analyzed.

use anyhow::Context;
use fwmon_core::{analyze_log, parse_log_str};
use fwmon_report::LogReportEntry;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Raw contents of one log, named for reporting
#[derive(Debug, Clone)]
pub struct LogSource {
    /// Display name (the path the log was read from)
    pub name: String,
    /// Raw JSON text
    pub json: String,
}

impl LogSource {
    /// Build a source from in-memory JSON
    pub fn new(name: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json: json.into(),
        }
    }

    /// Read a log file
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read log {}", path.display()))?;
        Ok(Self::new(path.display().to_string(), json))
    }
}

/// Read every log file; unreadable files abort the run
pub fn load_logs(paths: &[PathBuf]) -> anyhow::Result<Vec<LogSource>> {
    paths.iter().map(|path| LogSource::read(path)).collect()
}

/// Analyze logs in parallel, keeping input order
pub fn analyze_logs(sources: &[LogSource]) -> Vec<LogReportEntry> {
    sources
        .par_iter()
        .map(|source| match parse_log_str(&source.json) {
            Ok(events) => {
                let analysis = analyze_log(&events);
                tracing::debug!(
                    log = %source.name,
                    events = events.len(),
                    series = analysis.metrics.len(),
                    "log analyzed"
                );
                LogReportEntry::analyzed(&source.name, analysis)
            }
            Err(e) => {
                tracing::warn!(log = %source.name, "rejected log: {}", e);
                LogReportEntry::failed(&source.name, e.kind(), e.to_string())
            }
        })
        .collect()
}
