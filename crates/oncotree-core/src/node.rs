//! A single taxonomy node and its cross-version relations.

use serde::{Deserialize, Serialize};

/// The kind of cross-version relation a node records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Same entity, renamed code. At most 1:1 between two versions.
    History,
    /// Codes this node evolved from (splits and merges allowed).
    Precursors,
    /// Codes this node formally supersedes.
    Revocations,
}

impl Relation {
    /// Field name as it appears in the OncoTree API.
    pub fn field_name(&self) -> &'static str {
        match self {
            Relation::History => "history",
            Relation::Precursors => "precursors",
            Relation::Revocations => "revocations",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One code within one taxonomy version.
///
/// Relation lists hold codes from *other* versions. They are identifiers
/// only and may not exist in the snapshot that owns this node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    /// Unique code within the owning snapshot.
    pub code: String,
    /// Parent code in the same snapshot, `None` for the root.
    #[serde(default)]
    pub parent: Option<String>,
    /// Previous names of this same entity.
    #[serde(default)]
    pub history: Vec<String>,
    /// Codes this node evolved from.
    #[serde(default)]
    pub precursors: Vec<String>,
    /// Codes this node invalidated.
    #[serde(default)]
    pub revocations: Vec<String>,
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// Main cancer type grouping.
    #[serde(default)]
    pub main_type: Option<String>,
    /// Tissue the node belongs to.
    #[serde(default)]
    pub tissue: Option<String>,
    /// Depth in the tree as reported by the provider.
    #[serde(default)]
    pub level: Option<u32>,
}

impl TaxonomyNode {
    /// Create a node with no parent, relations, or metadata.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            parent: None,
            history: Vec::new(),
            precursors: Vec::new(),
            revocations: Vec::new(),
            name: None,
            main_type: None,
            tissue: None,
            level: None,
        }
    }

    /// Builder: set parent. An empty string means no parent.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        let parent = parent.into();
        self.parent = if parent.is_empty() { None } else { Some(parent) };
        self
    }

    /// Builder: set history codes.
    pub fn with_history<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.history = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set precursor codes.
    pub fn with_precursors<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precursors = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set revocation codes.
    pub fn with_revocations<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.revocations = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Codes recorded under the given relation.
    pub fn related(&self, relation: Relation) -> &[String] {
        match relation {
            Relation::History => &self.history,
            Relation::Precursors => &self.precursors,
            Relation::Revocations => &self.revocations,
        }
    }

    /// Whether `code` appears under the given relation.
    pub fn relates_to(&self, relation: Relation, code: &str) -> bool {
        self.related(relation).iter().any(|c| c == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_relations() {
        let node = TaxonomyNode::new("SLLCLL")
            .with_parent("LNM")
            .with_precursors(["SLL", "CLL"]);
        assert_eq!(node.parent.as_deref(), Some("LNM"));
        assert_eq!(node.related(Relation::Precursors), ["SLL", "CLL"]);
        assert!(node.related(Relation::History).is_empty());
        assert!(node.relates_to(Relation::Precursors, "CLL"));
        assert!(!node.relates_to(Relation::Revocations, "CLL"));
    }

    #[test]
    fn empty_parent_is_root() {
        let node = TaxonomyNode::new("TISSUE").with_parent("");
        assert!(node.parent.is_none());
    }

    #[test]
    fn relation_field_names() {
        assert_eq!(Relation::History.to_string(), "history");
        assert_eq!(Relation::Precursors.field_name(), "precursors");
        assert_eq!(Relation::Revocations.field_name(), "revocations");
    }
}
