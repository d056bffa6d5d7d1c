use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the activity report pipeline.
///
/// Nothing is caught or recovered internally; every failure propagates to
/// the top level and aborts the run.
#[derive(Error, Debug)]
pub enum ActivityError {
    /// The input CSV path does not exist or is not a readable file.
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// A data row did not have the expected number of columns.
    #[error("Row {row}: expected {expected} columns, found {found}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A timestamp field was not an integer epoch-millisecond value.
    #[error("Row {row}: invalid timestamp \"{value}\"")]
    TimestampParse { row: usize, value: String },

    /// An error surfaced by the CSV reader or writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The chart backend failed to draw or write an image.
    #[error("Failed to render chart {path}: {message}")]
    Render { path: PathBuf, message: String },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the activity crates.
pub type Result<T> = std::result::Result<T, ActivityError>;
