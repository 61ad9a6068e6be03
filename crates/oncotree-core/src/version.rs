//! Known taxonomy versions and their release dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Release date format used by the OncoTree versions endpoint.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One entry of the version catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// API identifier, e.g. `oncotree_2019_12_01`.
    pub identifier: String,
    /// Date the version was released.
    pub release_date: NaiveDate,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the provider lists the version publicly.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl VersionInfo {
    /// Create a visible entry with no description.
    pub fn new(identifier: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            identifier: identifier.into(),
            release_date,
            description: None,
            visible: true,
        }
    }

    /// Create an entry from a `YYYY-MM-DD` release date string.
    pub fn parse(identifier: impl Into<String>, release_date: &str) -> Result<Self> {
        let identifier = identifier.into();
        let date = NaiveDate::parse_from_str(release_date, RELEASE_DATE_FORMAT).map_err(|_| {
            CoreError::InvalidReleaseDate {
                version: identifier.clone(),
                value: release_date.to_string(),
            }
        })?;
        Ok(Self::new(identifier, date))
    }
}

/// Catalog of versions, scoped to a single run.
#[derive(Debug, Clone, Default)]
pub struct VersionCatalog {
    entries: Vec<VersionInfo>,
}

impl VersionCatalog {
    /// Create a catalog from entries as returned by the provider.
    pub fn new(entries: Vec<VersionInfo>) -> Self {
        Self { entries }
    }

    /// Look up a version by identifier.
    pub fn get(&self, identifier: &str) -> Option<&VersionInfo> {
        self.entries.iter().find(|v| v.identifier == identifier)
    }

    /// Whether the catalog knows `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    /// Release date of `identifier`, or `UnknownVersion`.
    pub fn release_date(&self, identifier: &str) -> Result<NaiveDate> {
        self.get(identifier)
            .map(|v| v.release_date)
            .ok_or_else(|| CoreError::UnknownVersion {
                version: identifier.to_string(),
            })
    }

    /// Fail with `UnknownVersion` unless `identifier` is present.
    pub fn require(&self, identifier: &str) -> Result<&VersionInfo> {
        self.get(identifier).ok_or_else(|| CoreError::UnknownVersion {
            version: identifier.to_string(),
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> VersionCatalog {
        VersionCatalog::new(vec![
            VersionInfo::parse("oncotree_2018_01_01", "2018-01-01").unwrap(),
            VersionInfo::parse("oncotree_2017_06_21", "2017-06-21").unwrap(),
            VersionInfo::parse("oncotree_2019_12_01", "2019-12-01").unwrap(),
        ])
    }

    #[test]
    fn release_date_lookup() {
        let cat = catalog();
        assert_eq!(
            cat.release_date("oncotree_2017_06_21").unwrap(),
            NaiveDate::from_ymd_opt(2017, 6, 21).unwrap()
        );
        assert!(cat.contains("oncotree_2018_01_01"));
        assert_eq!(cat.len(), 3);
    }

    #[test]
    fn unknown_version() {
        let cat = catalog();
        let err = cat.release_date("oncotree_latest_stable").unwrap_err();
        assert!(matches!(err, CoreError::UnknownVersion { version } if version == "oncotree_latest_stable"));
        assert!(cat.require("nope").is_err());
    }

    #[test]
    fn invalid_release_date() {
        let err = VersionInfo::parse("v", "21/06/2017").unwrap_err();
        assert!(matches!(err, CoreError::InvalidReleaseDate { .. }));
    }
}
