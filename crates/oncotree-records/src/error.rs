//! Record store error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing record files.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Input file has no header line after the metadata block.
    #[error("no header line found in {path}")]
    MissingHeader { path: PathBuf },

    /// The header does not name the column holding codes.
    #[error("header in {path} has no '{column}' column")]
    MissingCodeColumn { path: PathBuf, column: String },

    /// Delimited text error.
    #[error("delimited file error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure while writing rows to an output file.
    #[error("error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for record store operations.
pub type Result<T> = std::result::Result<T, RecordError>;
