//! Core data model for cross-version OncoTree translation.
//!
//! A [`TaxonomySnapshot`] holds every node of one taxonomy version, keyed by
//! code. Relations between versions (`history`, `precursors`, `revocations`)
//! are stored as plain code strings and are only ever looked up against
//! whichever snapshot is in scope, never resolved into references.
//!
//! The [`VersionCatalog`] carries release dates for the known versions and
//! drives [`select_direction`], which decides once per run whether codes are
//! mapped forward (older to newer) or backward (newer to older).

pub mod direction;
pub mod error;
pub mod node;
pub mod snapshot;
pub mod version;

pub use direction::{select_direction, TranslationDirection};
pub use error::{CoreError, Result};
pub use node::{Relation, TaxonomyNode};
pub use snapshot::TaxonomySnapshot;
pub use version::{VersionCatalog, VersionInfo};
