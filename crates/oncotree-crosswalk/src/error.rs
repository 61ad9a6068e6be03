//! Crosswalk error types.

use oncotree_core::CoreError;

/// Errors raised while resolving codes across versions.
#[derive(Debug, thiserror::Error)]
pub enum CrosswalkError {
    /// The code is not a node of the source version.
    #[error("oncotree code ({code}) can not be found in source version '{version}'")]
    SourceCodeNotFound { code: String, version: String },

    /// More than one target node claims the code as a renamed predecessor.
    #[error(
        "target version '{version}' has multiple codes with {code} in history: {}",
        .claimants.join(", ")
    )]
    ConflictingHistory {
        code: String,
        version: String,
        claimants: Vec<String>,
    },

    /// Underlying taxonomy data error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for crosswalk operations.
pub type Result<T> = std::result::Result<T, CrosswalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_history_lists_claimants() {
        let err = CrosswalkError::ConflictingHistory {
            code: "PTCLNOS".into(),
            version: "oncotree_2019_12_01".into(),
            claimants: vec!["PTCL".into(), "PTCLX".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("PTCLNOS"));
        assert!(msg.contains("PTCL, PTCLX"));
    }
}
