//! # Configuration Persistence
//!
//! User preferences stored in `~/.config/meal-explorer/config.json`.
//!
//! ## Fields
//!
//! | Field                  | Default                                    |
//! |------------------------|--------------------------------------------|
//! | `theme`                | `"Catppuccin Mocha"`                       |
//! | `api_base_url`         | `https://www.themealdb.com/api/json/v1/1`  |
//! | `request_timeout_secs` | `30`                                       |
//!
//! Only preferences live here; search results and selection are never
//! written to disk. The `directories` crate resolves the platform config
//! directory.

use crate::search::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Base URL of the recipe service, without the trailing `/search.php`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Overall HTTP timeout for one search.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config file: {:#}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Persist a theme choice to the user's config file.
    pub fn save_theme(theme: &str) -> Result<()> {
        let path = Self::config_path()?;
        Self::save_theme_to(&path, theme)
    }

    /// Re-read `path` and write it back with only `theme` changed. A file that
    /// cannot be read or parsed is left untouched and reported as an error.
    pub fn save_theme_to(path: &Path, theme: &str) -> Result<()> {
        let mut config = Self::load_from(path).context("Refusing to overwrite config file")?;
        config.theme = theme.to_string();
        config.save_to(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "meal-explorer")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
