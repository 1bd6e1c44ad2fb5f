//! Run Metadata

use chrono::Utc;
use fwmon_report::{REPORT_SCHEMA_VERSION, ReportMeta};

/// Build report metadata for the current run
///
/// The build identifier is carried through verbatim.
pub fn build_report_meta(build: Option<String>) -> ReportMeta {
    ReportMeta {
        schema_version: REPORT_SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        build,
    }
}
