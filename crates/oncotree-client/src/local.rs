//! Local directory provider for offline runs and testing.
//!
//! Layout:
//! ```text
//! <root>/
//!   versions.json            versions endpoint payload
//!   tumor_types/
//!     <version>.json         tumorTypes payload for one version
//! ```

use std::path::{Path, PathBuf};

use oncotree_core::{TaxonomySnapshot, VersionCatalog};

use crate::error::{ClientError, Result};
use crate::provider::TaxonomyProvider;
use crate::wire::{self, WireNode, WireVersion};

/// Reads API payloads saved on disk.
#[derive(Debug, Clone)]
pub struct LocalProvider {
    root: PathBuf,
}

impl LocalProvider {
    /// Create a provider rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        LocalProvider { root }
    }

    fn versions_path(&self) -> PathBuf {
        self.root.join("versions.json")
    }

    fn snapshot_path(&self, version: &str) -> PathBuf {
        self.root.join("tumor_types").join(format!("{version}.json"))
    }

    fn read(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(ClientError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Ok(std::fs::read_to_string(path)?)
    }

    /// Write the versions payload.
    pub fn store_versions(&self, versions: &[WireVersion]) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.versions_path(), serde_json::to_string_pretty(versions)?)?;
        Ok(())
    }

    /// Write the tumorTypes payload for `version`.
    pub fn store_snapshot(&self, version: &str, nodes: &[WireNode]) -> Result<()> {
        let path = self.snapshot_path(version);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(nodes)?)?;
        Ok(())
    }
}

impl TaxonomyProvider for LocalProvider {
    fn versions(&self) -> Result<VersionCatalog> {
        let json = self.read(&self.versions_path())?;
        wire::parse_versions(&json)
    }

    fn snapshot(&self, version: &str) -> Result<TaxonomySnapshot> {
        let json = self.read(&self.snapshot_path(version))?;
        wire::parse_snapshot(version, &json)
    }
}
