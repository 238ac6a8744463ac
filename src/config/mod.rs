//! Configuration module for robosearch
//!
//! Manages the backend address and the filters a session starts with.
//! Configuration is stored in the user's config directory
//! (`~/.config/robosearch/config.toml` on Linux).

mod setup;

pub use setup::first_time_setup;

use crate::backend::DEFAULT_BACKEND_URL;
use crate::project::{SortOption, SourceFilter};
use crate::query::QueryState;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RoboSearchConfig {
    /// Base address of the search backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Source filter selected when a session starts
    #[serde(default)]
    pub default_source: SourceFilter,

    /// Sort option selected when a session starts
    #[serde(default)]
    pub default_sort: SortOption,

    /// Per-request timeout in seconds; requests never time out when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for RoboSearchConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            default_source: SourceFilter::default(),
            default_sort: SortOption::default(),
            request_timeout_secs: None,
            quiet: false,
        }
    }
}

impl RoboSearchConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("robosearch").join("config.toml"))
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the backend address after checking it is an http(s) URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the address does not parse or uses another scheme.
    pub fn set_backend_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.backend_url = validate_backend_url(url)?;
        Ok(())
    }

    /// Request timeout, if configured
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Query state a new session starts from
    #[must_use]
    pub fn initial_state(&self) -> QueryState {
        QueryState::with_filters(self.default_source, self.default_sort)
    }
}

/// Check a backend address and return it without trailing slashes
///
/// # Errors
///
/// Returns `ConfigError` if the address does not parse or uses another scheme.
pub fn validate_backend_url(url: &str) -> Result<String, ConfigError> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| ConfigError::Message(format!("Invalid backend URL '{url}': {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Message(format!(
            "Backend URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }

    Ok(url.trim_end_matches('/').to_string())
}
