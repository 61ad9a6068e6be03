//! Immutable, code-keyed node set for one taxonomy version.

use std::collections::{BTreeMap, HashSet};

use crate::error::{CoreError, Result};
use crate::node::{Relation, TaxonomyNode};

/// Every node of one taxonomy version, addressed by code.
///
/// Built once per version per run and never mutated afterwards. Iteration
/// order is ascending by code so scans are deterministic.
#[derive(Debug, Clone)]
pub struct TaxonomySnapshot {
    version: String,
    nodes: BTreeMap<String, TaxonomyNode>,
}

impl TaxonomySnapshot {
    /// Build a snapshot from a node list, rejecting duplicate codes.
    pub fn from_nodes<I>(version: impl Into<String>, nodes: I) -> Result<Self>
    where
        I: IntoIterator<Item = TaxonomyNode>,
    {
        let version = version.into();
        let mut map = BTreeMap::new();
        for node in nodes {
            if map.contains_key(&node.code) {
                return Err(CoreError::DuplicateCode {
                    version,
                    code: node.code,
                });
            }
            map.insert(node.code.clone(), node);
        }
        tracing::debug!(version = %version, nodes = map.len(), "built taxonomy snapshot");
        Ok(Self {
            version,
            nodes: map,
        })
    }

    /// Version identifier this snapshot belongs to.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up a node by code.
    pub fn get(&self, code: &str) -> Option<&TaxonomyNode> {
        self.nodes.get(code)
    }

    /// Whether the snapshot contains `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.nodes.contains_key(code)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the snapshot has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Codes of all nodes that list `code` under `relation`, in code order.
    pub fn codes_claiming(&self, relation: Relation, code: &str) -> Vec<String> {
        self.nodes
            .values()
            .filter(|node| node.relates_to(relation, code))
            .map(|node| node.code.clone())
            .collect()
    }

    /// The chain from `code` up to the root, starting with `code` itself.
    ///
    /// Stops at the first parent that is missing from the snapshot or that
    /// was already visited, so malformed parent cycles cannot loop forever.
    pub fn lineage(&self, code: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.nodes.get(code);
        while let Some(node) = current {
            if !seen.insert(node.code.as_str()) {
                break;
            }
            chain.push(node.code.clone());
            current = node.parent.as_deref().and_then(|p| self.nodes.get(p));
        }
        chain
    }

    /// Deepest node that is an ancestor-or-self of every code in `codes`.
    ///
    /// Returns `None` when `codes` is empty, when any code is absent, or
    /// when the lineages never meet.
    pub fn lowest_common_ancestor<'a, I>(&self, codes: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut codes = codes.into_iter();
        let first = codes.next()?;
        let mut shared = self.lineage(first);
        if shared.is_empty() {
            return None;
        }
        for code in codes {
            let lineage: HashSet<String> = self.lineage(code).into_iter().collect();
            if lineage.is_empty() {
                return None;
            }
            shared.retain(|c| lineage.contains(c));
        }
        // `shared` keeps the first lineage's order, deepest first.
        shared.into_iter().next()
    }
}
