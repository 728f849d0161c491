//! Configuration management for Bookworm.
//!
//! Loads and validates configuration from the platform-specific config
//! directory. A missing file means defaults; nothing is ever written.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Application name used for config directory.
const APP_NAME: &str = "Bookworm";

/// Default config filename.
const CONFIG_FILENAME: &str = "config.toml";

/// Public Gutendex endpoint.
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com/books/";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog API settings.
    pub api: ApiConfig,

    /// Terminal output settings.
    pub output: OutputConfig,
}

/// Catalog API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every query is built from.
    pub base_url: String,

    /// User-Agent header sent with each request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("bookworm/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print fetch debug lines to stderr.
    pub debug: bool,

    /// Allow ANSI colors when stdout is a terminal.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            debug: false,
            color: true,
        }
    }
}

impl Config {
    /// Returns the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Loads configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from a specific path.
    ///
    /// A path that does not exist yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Parses and returns the configured base URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| ConfigError::InvalidValue {
            key: "api.base_url".to_string(),
            message: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;

        if self.api.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api.user_agent".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
