//! Analysis errors
//!
//! Only a log that is not shaped like a sequence of events is an error.
//! Missing fields and empty series are absorbed by the analyzers.

use thiserror::Error;

/// Errors raised when loading an event log
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The log itself is not a sequence
    #[error("log data must be a sequence of events, got {found}")]
    InvalidShape {
        /// JSON type found instead of an array
        found: &'static str,
    },

    /// An entry of the sequence is not an event object
    #[error("log entry {index} must be an event object, got {found}")]
    InvalidEntry {
        /// Position of the entry in the sequence
        index: usize,
        /// JSON type found instead of an object
        found: &'static str,
    },

    /// The log text is not valid JSON
    #[error("log is not valid JSON: {0}")]
    Json(String),
}

impl AnalysisError {
    /// Short machine-readable label for reports
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidShape { .. } => "invalid_shape",
            AnalysisError::InvalidEntry { .. } => "invalid_entry",
            AnalysisError::Json(_) => "invalid_json",
        }
    }
}
