//! Configuration loading
//!
//! A config file is a TOML document with an optional `[api]` section and
//! any part of the workflow. Whatever it leaves out keeps the built-in
//! traffic-light default.
//!
//! ```toml
//! attachments = ["https://example.com/intersection.png"]
//!
//! [api]
//! timeout_secs = 30
//!
//! [project]
//! name = "traffic_lights"
//!
//! [batch]
//! name = "traffic_lights_batch_2"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::adapters::DEFAULT_BASE_URL;
use crate::core::models::Workflow;
use crate::paths;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "SCALE_API_KEY";

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "SCALE_API_BASE_URL";

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for a config
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// The config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// No API key anywhere
    #[error("no API key: pass --api-key, set SCALE_API_KEY, or add `key` under [api]")]
    MissingApiKey,
}

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root
    pub base_url: String,
    /// Per-request timeout in seconds; `0` waits forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// API key (prefer the environment variable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ApiConfig {
    /// Timeout to hand to the HTTP client, `None` when disabled
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|&secs| secs > 0).map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Some(60),
            key: None,
        }
    }
}

/// Full configuration: connection settings plus the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Workflow to run
    #[serde(flatten)]
    pub workflow: Workflow,
    /// Connection settings
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find and load the config for this invocation
    ///
    /// An explicit path must exist. Otherwise the implicit locations are
    /// tried in order, falling back to the built-in default. Returns the
    /// file that was used, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for candidate in paths::config_candidates() {
            if candidate.is_file() {
                debug!("Using config {}", candidate.display());
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        debug!("No config file found, using built-in workflow");
        Ok((Self::default(), None))
    }

    /// Write the config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// API key: flag, then `SCALE_API_KEY`, then `[api].key`
    ///
    /// Empty values count as unset.
    pub fn resolve_api_key(&self, flag: Option<&str>) -> Result<String, ConfigError> {
        first_non_empty([
            flag.map(String::from),
            std::env::var(API_KEY_ENV).ok(),
            self.api.key.clone(),
        ])
        .ok_or(ConfigError::MissingApiKey)
    }

    /// API root: flag, then `SCALE_API_BASE_URL`, then `[api].base_url`
    #[must_use]
    pub fn resolve_base_url(&self, flag: Option<&str>) -> String {
        first_non_empty([flag.map(String::from), std::env::var(BASE_URL_ENV).ok()])
            .unwrap_or_else(|| self.api.base_url.clone())
    }
}

fn first_non_empty<const N: usize>(values: [Option<String>; N]) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
