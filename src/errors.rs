use std::io;

use thiserror::Error;

/// Error type for capability initialization, IO, and persistence failures.
#[derive(Debug, Error)]
pub enum OverlapError {
    /// The remote stopword resource could not be fetched or decoded.
    ///
    /// Fatal at provider construction time; the word set cannot be assembled
    /// without it, so it is never retried per record.
    #[error("stopword source unavailable: {0}")]
    StopwordSource(String),
    /// A reference table contained rows that could not be parsed.
    #[error("reference table '{path}' is malformed: {reason}")]
    ReferenceTable {
        /// Path of the offending file.
        path: String,
        /// Parse-level detail.
        reason: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
