//! Application configuration module for kbsearch
//!
//! Provides TOML-based configuration with environment variable override support.
//! Priority: CLI args > Environment variables > Config file > Defaults

use super::DEFAULT_MAX_RESULTS;
use crate::session::Hotkey;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the catalog data files (default: content)
    #[serde(default = "default_catalog_dir")]
    catalog_dir: String,

    /// Maximum number of ranked results
    #[serde(default = "default_max_results")]
    max_results: usize,

    /// Shortcut that opens the search session, e.g. "mod+k"
    #[serde(default = "default_open_hotkey")]
    open_hotkey: String,
}

fn default_catalog_dir() -> String {
    "content".to_string()
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_open_hotkey() -> String {
    "mod+k".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_dir: default_catalog_dir(),
            max_results: default_max_results(),
            open_hotkey: default_open_hotkey(),
        }
    }
}

impl AppConfig {
    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("KBSEARCH_CATALOG_DIR") {
            config.catalog_dir = dir;
        }

        if let Ok(max) = std::env::var("KBSEARCH_MAX_RESULTS") {
            match max.parse() {
                Ok(n) => config.max_results = n,
                Err(_) => tracing::warn!("Ignoring invalid KBSEARCH_MAX_RESULTS '{}'", max),
            }
        }

        if let Ok(hotkey) = std::env::var("KBSEARCH_OPEN_HOTKEY") {
            config.open_hotkey = hotkey;
        }

        config
    }

    /// Merge with another config (other takes priority for non-default values)
    pub fn merge_with(&self, other: &Self) -> Self {
        Self {
            catalog_dir: if other.catalog_dir != default_catalog_dir() {
                other.catalog_dir.clone()
            } else {
                self.catalog_dir.clone()
            },
            max_results: if other.max_results != default_max_results() {
                other.max_results
            } else {
                self.max_results
            },
            open_hotkey: if other.open_hotkey != default_open_hotkey() {
                other.open_hotkey.clone()
            } else {
                self.open_hotkey.clone()
            },
        }
    }

    /// Override catalog_dir
    pub fn with_catalog_dir(mut self, dir: &str) -> Self {
        self.catalog_dir = dir.to_string();
        self
    }

    /// Override max_results
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Override open_hotkey
    pub fn with_open_hotkey(mut self, hotkey: &str) -> Self {
        self.open_hotkey = hotkey.to_string();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 || self.max_results > DEFAULT_MAX_RESULTS {
            return Err(anyhow!(
                "max_results must be between 1 and {}, got {}",
                DEFAULT_MAX_RESULTS,
                self.max_results
            ));
        }

        self.hotkey()?;
        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    /// Parsed open shortcut
    pub fn hotkey(&self) -> Result<Hotkey> {
        self.open_hotkey
            .parse()
            .map_err(|e| anyhow!("Invalid open_hotkey: {}", e))
    }

    // Getters
    pub fn catalog_dir(&self) -> &str {
        &self.catalog_dir
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn open_hotkey(&self) -> &str {
        &self.open_hotkey
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_dir(), "content");
        assert_eq!(config.max_results(), 20);
        assert_eq!(config.open_hotkey(), "mod+k");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_max_results() {
        let config = AppConfig::default().with_max_results(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_max_results_above_cap() {
        assert!(AppConfig::default().with_max_results(20).validate().is_ok());

        let err = AppConfig::default()
            .with_max_results(25)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("between 1 and 20"));
    }

    #[test]
    fn test_validate_invalid_hotkey() {
        let config = AppConfig::default().with_open_hotkey("hyper+k");
        assert!(config.validate().is_err());
    }
}
