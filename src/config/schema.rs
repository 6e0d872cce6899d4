//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::remote::{GitHubSource, DEFAULT_API_URL, DEFAULT_RAW_URL};
use crate::store::{default_store_dir, Store, DEFAULT_SUFFIX};

/// Tool configuration, read from `config.yml`.
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Store directory (default `~/.gitignore-cli`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,

    /// Template file suffix.
    pub suffix: String,

    /// Contents API base used for listings.
    pub api_url: String,

    /// Raw content base used for single-file fetches.
    pub raw_url: String,

    /// Pause after each download during a mirror, in milliseconds.
    pub download_delay_ms: u64,

    /// HTTP timeout in seconds.
    pub timeout_secs: u64,

    /// Mirror every tier when a session starts with an empty store (default on).
    pub mirror_when_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            raw_url: DEFAULT_RAW_URL.to_string(),
            download_delay_ms: 100,
            timeout_secs: 30,
            mirror_when_empty: true,
        }
    }
}

impl Config {
    /// Download delay as a [`Duration`].
    pub fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_delay_ms)
    }

    /// HTTP timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Store root: `store_dir` if set, otherwise `~/.gitignore-cli`.
    pub fn store_root(&self) -> Result<PathBuf> {
        match &self.store_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_store_dir(),
        }
    }

    /// Store handle for the configured root and suffix. Does not touch disk.
    pub fn store(&self) -> Result<Store> {
        Ok(Store::new(self.store_root()?, self.suffix.as_str()))
    }

    /// HTTP source for the configured endpoints.
    pub fn remote(&self) -> Result<GitHubSource> {
        GitHubSource::with_timeout(self.api_url.as_str(), self.raw_url.as_str(), self.timeout())
    }
}
