//! `oncotree-translate.toml` configuration.
//!
//! Every setting is optional. Command-line flags (and `ONCOTREE_API_URL`)
//! take precedence over the file; the file takes precedence over defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use oncotree_client::DEFAULT_BASE_URL;

/// Config file name searched for from the working directory upward.
pub const CONFIG_FILE_NAME: &str = "oncotree-translate.toml";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// OncoTree API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Input/output file settings.
    #[serde(default)]
    pub records: RecordsConfig,
    /// Ambiguity handling.
    #[serde(default)]
    pub resolution: ResolutionConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the OncoTree API.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// `[records]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Column holding the codes.
    #[serde(default)]
    pub code_column: Option<String>,
    /// Prefix of metadata lines.
    #[serde(default)]
    pub comment_prefix: Option<String>,
}

/// `[resolution]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Enable automatic resolution of ambiguous mappings.
    #[serde(default)]
    pub auto: Option<bool>,
}

impl TranslatorConfig {
    /// Load an explicit config file, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("config file {} can not be found", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Search upward from `start_dir` for a config file, parse and return it
    /// along with its path.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a config from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing oncotree-translate.toml")
    }

    /// API base URL, falling back to the public API.
    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
