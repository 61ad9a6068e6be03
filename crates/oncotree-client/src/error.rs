//! Provider error types.

use std::path::PathBuf;

use oncotree_core::CoreError;

/// Errors that can occur while fetching taxonomy data.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The provider answered with a non-success status.
    #[error("HttpStatusCode {status}: unable to retrieve {resource}")]
    SnapshotFetchFailed { resource: String, status: u16 },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A local provider file does not exist.
    #[error("missing taxonomy file: {path}")]
    MissingFile { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Received data violates a taxonomy invariant.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ClientError>;
