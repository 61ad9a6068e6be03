//! Provider trait and run-level loading.

use oncotree_core::{TaxonomySnapshot, VersionCatalog};

use crate::error::Result;

/// Source of version catalogs and taxonomy snapshots.
///
/// Implementations fetch from different backends (HTTP API, local files).
pub trait TaxonomyProvider {
    /// Fetch every known version with its release date.
    fn versions(&self) -> Result<VersionCatalog>;

    /// Fetch the full node set of one version.
    fn snapshot(&self, version: &str) -> Result<TaxonomySnapshot>;
}

/// Everything a translation run needs from the provider.
#[derive(Debug, Clone)]
pub struct RunData {
    /// Catalog used to choose the direction.
    pub catalog: VersionCatalog,
    /// Snapshot the input codes belong to.
    pub source: TaxonomySnapshot,
    /// Snapshot the codes are translated into.
    pub target: TaxonomySnapshot,
}

/// Fetch the catalog, validate both versions, then fetch both snapshots.
///
/// Version identifiers are checked before any snapshot is requested, so an
/// unknown version fails fast with `UnknownVersion`.
pub fn load_run_data(
    provider: &dyn TaxonomyProvider,
    source_version: &str,
    target_version: &str,
) -> Result<RunData> {
    let catalog = provider.versions()?;
    catalog.require(source_version)?;
    catalog.require(target_version)?;

    let source = provider.snapshot(source_version)?;
    let target = provider.snapshot(target_version)?;
    tracing::info!(
        source = source_version,
        source_nodes = source.len(),
        target = target_version,
        target_nodes = target.len(),
        "loaded oncotree versions"
    );

    Ok(RunData {
        catalog,
        source,
        target,
    })
}
