// File: src/config.rs
// Purpose: Router configuration parsing from desk-router.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::matcher::DEFAULT_MAX_REDIRECTS;

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouterConfig {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Matching configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Redirect hops followed before failing with a redirect loop (default: 10)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Whether literal segments ignore ASCII case (default: false)
    #[serde(default)]
    pub case_insensitive: bool,

    /// Prefix under which the application is mounted (e.g., "/helpdesk")
    #[serde(default)]
    pub base_path: Option<String>,
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_redirects: default_max_redirects(),
            case_insensitive: false,
            base_path: None,
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./desk-router.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("desk-router.toml")
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }
}
