//! Core error types.

/// Errors raised while building or querying taxonomy data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A version identifier is not present in the catalog.
    #[error("'{version}' is not a known oncotree version")]
    UnknownVersion { version: String },

    /// Two nodes in one snapshot share a code.
    #[error("duplicate code '{code}' in oncotree version '{version}'")]
    DuplicateCode { version: String, code: String },

    /// A catalog entry carries a release date that cannot be parsed.
    #[error("invalid release date '{value}' for oncotree version '{version}'")]
    InvalidReleaseDate { version: String, value: String },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
