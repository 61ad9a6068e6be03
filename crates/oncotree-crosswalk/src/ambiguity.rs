//! Collapsing a candidate set into one output value.
//!
//! One candidate is the answer. Zero or several candidates become a visible
//! placeholder for a human to fix in the output file, unless an automatic
//! policy is enabled and able to choose.

use oncotree_core::TaxonomySnapshot;

use crate::candidates::CandidateSet;

/// Outcome of resolving one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one candidate.
    Mapped(String),
    /// Chosen by the automatic policy among several candidates.
    AutoResolved {
        code: String,
        candidates: CandidateSet,
    },
    /// No candidate; a human must supply the mapping.
    ManualMappingRequired { code: String },
    /// Several candidates; a human must pick one.
    Ambiguous { candidates: CandidateSet },
}

impl Resolution {
    /// Value written into the code column.
    pub fn output(&self) -> String {
        self.to_string()
    }

    /// Whether the output is a placeholder needing human review.
    pub fn needs_review(&self) -> bool {
        matches!(
            self,
            Resolution::ManualMappingRequired { .. } | Resolution::Ambiguous { .. }
        )
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Mapped(code) | Resolution::AutoResolved { code, .. } => f.write_str(code),
            Resolution::ManualMappingRequired { code } => {
                write!(f, "Oncotree Code ({code}) needs to be manually mapped")
            }
            Resolution::Ambiguous { candidates } => {
                let joined: Vec<&str> = candidates.iter().map(String::as_str).collect();
                write!(f, "Choose from: {}", joined.join(", "))
            }
        }
    }
}

/// A deterministic policy for choosing among several candidates.
pub trait AutoResolver {
    /// Pick one of `candidates` for `code`, or `None` to defer to a human.
    ///
    /// Only called with two or more candidates.
    fn choose(&self, code: &str, candidates: &CandidateSet) -> Option<String>;
}

/// Chooses the lowest common ancestor of all candidates in the target tree.
///
/// When a code split into several children, their nearest shared parent is
/// the most specific code that is still correct for every branch. A
/// parentless root (`TISSUE`) is never chosen: candidates that only meet
/// there are left for a human.
#[derive(Debug, Clone, Copy)]
pub struct CommonAncestorPolicy<'a> {
    target: &'a TaxonomySnapshot,
}

impl<'a> CommonAncestorPolicy<'a> {
    /// Create a policy over the target snapshot.
    pub fn new(target: &'a TaxonomySnapshot) -> Self {
        Self { target }
    }
}

impl AutoResolver for CommonAncestorPolicy<'_> {
    fn choose(&self, code: &str, candidates: &CandidateSet) -> Option<String> {
        let chosen = self
            .target
            .lowest_common_ancestor(candidates)
            .filter(|ancestor| {
                self.target
                    .get(ancestor)
                    .is_some_and(|node| node.parent.is_some())
            });
        match &chosen {
            Some(ancestor) => tracing::info!(code, ?candidates, %ancestor, "auto-resolved to common ancestor"),
            None => tracing::warn!(code, ?candidates, "candidates share no common ancestor below the root"),
        }
        chosen
    }
}

/// How zero- and many-candidate sets are handled.
#[derive(Clone, Copy)]
pub enum ResolutionMode<'a> {
    /// Always emit placeholders.
    Manual,
    /// Let a policy choose among several candidates.
    Auto(&'a dyn AutoResolver),
}

impl std::fmt::Debug for ResolutionMode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionMode::Manual => f.write_str("Manual"),
            ResolutionMode::Auto(_) => f.write_str("Auto"),
        }
    }
}

/// Resolve a candidate set for `code` to one output.
pub fn resolve(code: &str, mut candidates: CandidateSet, mode: ResolutionMode<'_>) -> Resolution {
    if candidates.len() == 1 {
        if let Some(only) = candidates.pop_first() {
            return Resolution::Mapped(only);
        }
    }

    if candidates.is_empty() {
        if let ResolutionMode::Auto(_) = mode {
            tracing::warn!(code, "no candidates; automatic resolution cannot invent a mapping");
        }
        return Resolution::ManualMappingRequired {
            code: code.to_string(),
        };
    }

    if let ResolutionMode::Auto(policy) = mode {
        if let Some(chosen) = policy.choose(code, &candidates) {
            return Resolution::AutoResolved {
                code: chosen,
                candidates,
            };
        }
    }
    Resolution::Ambiguous { candidates }
}
