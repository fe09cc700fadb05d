//! Report persistence errors.

use thiserror::Error;

/// Errors that can occur when persisting or restoring a batch report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to encode report: {0}")]
    Encode(String),

    #[error("Failed to decode report: {0}")]
    Decode(String),

    #[error("Unsupported report version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A row's trace was not produced from the report's start state
    #[error("Row {row} ('{title}') does not start at state '{start_state}'")]
    ForeignTrace {
        row: usize,
        title: String,
        start_state: String,
    },
}
