//! JSON documents served by the OncoTree API.
//!
//! `GET versions` returns an array of [`WireVersion`]; `GET tumorTypes`
//! returns an array of [`WireNode`]. Only the fields the crosswalk needs are
//! modelled; anything else in the payload is ignored.

use serde::{Deserialize, Serialize};

use oncotree_core::{Result as CoreResult, TaxonomyNode, TaxonomySnapshot, VersionCatalog, VersionInfo};

/// One entry of the versions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireVersion {
    pub api_identifier: String,
    pub release_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// One tumor type from the tumorTypes endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireNode {
    pub code: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<String>>,
    #[serde(default)]
    pub precursors: Option<Vec<String>>,
    #[serde(default)]
    pub revocations: Option<Vec<String>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main_type: Option<String>,
    #[serde(default)]
    pub tissue: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
}

impl From<WireNode> for TaxonomyNode {
    fn from(wire: WireNode) -> Self {
        TaxonomyNode {
            code: wire.code,
            parent: wire.parent.filter(|p| !p.is_empty()),
            history: wire.history.unwrap_or_default(),
            precursors: wire.precursors.unwrap_or_default(),
            revocations: wire.revocations.unwrap_or_default(),
            name: wire.name,
            main_type: wire.main_type,
            tissue: wire.tissue,
            level: wire.level,
        }
    }
}

impl WireVersion {
    /// Convert to a catalog entry, parsing the release date.
    pub fn into_version_info(self) -> CoreResult<VersionInfo> {
        let mut info = VersionInfo::parse(self.api_identifier, &self.release_date)?;
        info.description = self.description;
        info.visible = self.visible.unwrap_or(true);
        Ok(info)
    }
}

/// Parse a versions payload into a catalog.
pub fn parse_versions(json: &str) -> crate::Result<VersionCatalog> {
    let wire: Vec<WireVersion> = serde_json::from_str(json)?;
    let entries = wire
        .into_iter()
        .map(WireVersion::into_version_info)
        .collect::<CoreResult<Vec<_>>>()?;
    Ok(VersionCatalog::new(entries))
}

/// Parse a tumorTypes payload into a snapshot of `version`.
pub fn parse_snapshot(version: &str, json: &str) -> crate::Result<TaxonomySnapshot> {
    let wire: Vec<WireNode> = serde_json::from_str(json)?;
    let snapshot = TaxonomySnapshot::from_nodes(version, wire.into_iter().map(TaxonomyNode::from))?;
    Ok(snapshot)
}
