//! Candidate computation: which target codes a source code may map to.

use std::collections::BTreeSet;

use oncotree_core::{
    select_direction, Relation, TaxonomyNode, TaxonomySnapshot, TranslationDirection,
    VersionCatalog,
};

use crate::error::{CrosswalkError, Result};

/// Unresolved set of plausible target codes, kept sorted.
pub type CandidateSet = BTreeSet<String>;

/// A source/target snapshot pair with the direction fixed for the run.
#[derive(Debug, Clone, Copy)]
pub struct Crosswalk<'a> {
    source: &'a TaxonomySnapshot,
    target: &'a TaxonomySnapshot,
    direction: TranslationDirection,
}

impl<'a> Crosswalk<'a> {
    /// Pair two snapshots with an explicit direction.
    pub fn new(
        source: &'a TaxonomySnapshot,
        target: &'a TaxonomySnapshot,
        direction: TranslationDirection,
    ) -> Self {
        Self {
            source,
            target,
            direction,
        }
    }

    /// Pair two snapshots, choosing the direction from the catalog's release dates.
    pub fn from_catalog(
        source: &'a TaxonomySnapshot,
        target: &'a TaxonomySnapshot,
        catalog: &VersionCatalog,
    ) -> Result<Self> {
        let direction = select_direction(source.version(), target.version(), catalog)?;
        Ok(Self::new(source, target, direction))
    }

    /// Snapshot codes are translated from.
    pub fn source(&self) -> &'a TaxonomySnapshot {
        self.source
    }

    /// Snapshot codes are translated into.
    pub fn target(&self) -> &'a TaxonomySnapshot {
        self.target
    }

    /// Direction applied to every code.
    pub fn direction(&self) -> TranslationDirection {
        self.direction
    }

    /// Candidate target codes for `code`.
    pub fn candidates(&self, code: &str) -> Result<CandidateSet> {
        resolve_candidates(code, self.source, self.target, self.direction)
    }
}

/// Compute the candidate set for one source code.
///
/// Fails with `SourceCodeNotFound` if `code` is not in `source`, and with
/// `ConflictingHistory` if, going forward, several target nodes claim `code`
/// as a former name.
pub fn resolve_candidates(
    code: &str,
    source: &TaxonomySnapshot,
    target: &TaxonomySnapshot,
    direction: TranslationDirection,
) -> Result<CandidateSet> {
    let node = source
        .get(code)
        .ok_or_else(|| CrosswalkError::SourceCodeNotFound {
            code: code.to_string(),
            version: source.version().to_string(),
        })?;

    let candidates = match direction {
        TranslationDirection::Backward => backward_candidates(node, target),
        TranslationDirection::Forward => forward_candidates(code, target)?,
    };
    tracing::debug!(code, %direction, ?candidates, "computed candidates");
    Ok(candidates)
}

/// Codes from `codes` that exist in `target`.
fn attested<'c>(
    codes: &'c [String],
    target: &'c TaxonomySnapshot,
) -> impl Iterator<Item = String> + 'c {
    codes
        .iter()
        .filter(move |c| target.contains(c))
        .cloned()
}

fn backward_candidates(node: &TaxonomyNode, target: &TaxonomySnapshot) -> CandidateSet {
    let mut candidates: CandidateSet = attested(&node.history, target).collect();

    // A past name overrides the current code (e.g. PTCLNOS).
    if candidates.is_empty() && target.contains(&node.code) {
        candidates.insert(node.code.clone());
    }

    // A merged node may trace back to several older codes at once.
    candidates.extend(attested(&node.precursors, target));
    candidates
}

fn forward_candidates(code: &str, target: &TaxonomySnapshot) -> Result<CandidateSet> {
    let renamed = target.codes_claiming(Relation::History, code);
    match renamed.len() {
        0 => {}
        1 => return Ok(renamed.into_iter().collect()),
        _ => {
            return Err(CrosswalkError::ConflictingHistory {
                code: code.to_string(),
                version: target.version().to_string(),
                claimants: renamed,
            })
        }
    }

    for relation in [Relation::Precursors, Relation::Revocations] {
        let claimed = target.codes_claiming(relation, code);
        if !claimed.is_empty() {
            return Ok(claimed.into_iter().collect());
        }
    }

    let mut candidates = CandidateSet::new();
    if target.contains(code) {
        candidates.insert(code.to_string());
    }
    Ok(candidates)
}
