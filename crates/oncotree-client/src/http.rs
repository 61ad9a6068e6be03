//! OncoTree REST API provider.

use std::time::Duration;

use reqwest::blocking::Client;

use oncotree_core::{TaxonomySnapshot, VersionCatalog};

use crate::error::{ClientError, Result};
use crate::provider::TaxonomyProvider;
use crate::wire;

/// Public OncoTree API.
pub const DEFAULT_BASE_URL: &str = "https://oncotree.info/api/";

const VERSIONS_ENDPOINT: &str = "versions";
const TUMOR_TYPES_ENDPOINT: &str = "tumorTypes";

/// Blocking client for the versions and tumorTypes endpoints.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    http: Client,
    base_url: String,
}

impl HttpProvider {
    /// Create a provider for `base_url` with a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, endpoint: &str, query: &[(&str, &str)], resource: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, ?query, "requesting {resource}");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%url, status = status.as_u16(), "unable to retrieve {resource}");
            return Err(ClientError::SnapshotFetchFailed {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

impl TaxonomyProvider for HttpProvider {
    fn versions(&self) -> Result<VersionCatalog> {
        let body = self.get(VERSIONS_ENDPOINT, &[], "oncotree versions")?;
        wire::parse_versions(&body)
    }

    fn snapshot(&self, version: &str) -> Result<TaxonomySnapshot> {
        let resource = format!("oncotree version {version}");
        let body = self.get(TUMOR_TYPES_ENDPOINT, &[("version", version)], &resource)?;
        wire::parse_snapshot(version, &body)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
