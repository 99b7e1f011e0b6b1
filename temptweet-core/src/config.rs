use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::message::DEFAULT_LINK;

pub const DEFAULT_STATION: &str = "Sydney - Observatory Hill";
pub const DEFAULT_PAGE_URL: &str = "http://www.bom.gov.au/products/IDN60900.shtml";
pub const DEFAULT_STATUS_URL: &str = "http://twitter.com/statuses/update.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings stored on disk. Every field is optional; getters fall back to defaults.
///
/// Example TOML:
/// ```toml
/// station = "Canterbury"
/// username = "sydneytemps"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub station: Option<String>,
    /// Passwords are never stored.
    pub username: Option<String>,
    pub page_url: Option<String>,
    pub status_url: Option<String>,
    pub link: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn station(&self) -> &str {
        self.station.as_deref().unwrap_or(DEFAULT_STATION)
    }

    pub fn page_url(&self) -> &str {
        self.page_url.as_deref().unwrap_or(DEFAULT_PAGE_URL)
    }

    pub fn status_url(&self) -> &str {
        self.status_url.as_deref().unwrap_or(DEFAULT_STATUS_URL)
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or(DEFAULT_LINK)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_toml_file(&path)
    }

    fn from_toml_file(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "temptweet", "temptweet")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
