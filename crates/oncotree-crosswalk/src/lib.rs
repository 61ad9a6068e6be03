//! Cross-version code resolution.
//!
//! Given a source and a target [`TaxonomySnapshot`](oncotree_core::TaxonomySnapshot)
//! and a direction chosen from their release dates, this crate computes the
//! candidate codes a source code maps to ([`resolve_candidates`]), collapses
//! the candidates to a single output value ([`resolve`]), and applies both to
//! every record of an input file ([`translate`]).
//!
//! Resolution follows a strict priority chain per direction:
//!
//! - **Backward** (newer → older): history renames attested in the target,
//!   else the code itself if it exists there; plus any precursors attested in
//!   the target. Revocations are ignored.
//! - **Forward** (older → newer): the single target node claiming the code in
//!   its history, else all nodes listing it as a precursor, else all nodes
//!   revoking it, else the code itself, else nothing.

pub mod ambiguity;
pub mod candidates;
pub mod error;
pub mod translate;

pub use ambiguity::{resolve, AutoResolver, CommonAncestorPolicy, Resolution, ResolutionMode};
pub use candidates::{resolve_candidates, CandidateSet, Crosswalk};
pub use error::{CrosswalkError, Result};
pub use translate::{
    is_not_applicable, translate, Outcome, TranslationOptions, TranslationSummary,
    DEFAULT_CODE_COLUMN, NOT_APPLICABLE_CODES,
};
