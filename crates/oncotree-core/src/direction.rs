//! Translation direction, chosen once per run from release dates.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::version::VersionCatalog;

/// Whether codes move from an older version to a newer one or back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationDirection {
    /// Older source, newer (or same-date) target.
    Forward,
    /// Newer source, older target.
    Backward,
}

impl std::fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationDirection::Forward => f.write_str("forward"),
            TranslationDirection::Backward => f.write_str("backward"),
        }
    }
}

/// Decide the direction for translating `source` codes into `target`.
///
/// Backward only when the target was released strictly before the source;
/// equal dates count as forward. Either identifier missing from the catalog
/// is an `UnknownVersion` error.
pub fn select_direction(
    source: &str,
    target: &str,
    catalog: &VersionCatalog,
) -> Result<TranslationDirection> {
    let source_date = catalog.release_date(source)?;
    let target_date = catalog.release_date(target)?;

    let direction = if target_date < source_date {
        TranslationDirection::Backward
    } else {
        TranslationDirection::Forward
    };

    tracing::info!(
        source,
        target,
        %direction,
        "based on provided versions, translation will run in {direction} direction"
    );
    Ok(direction)
}
