//! Configuration module for autotags
//!
//! Manages the tag service endpoint, fetch timeout, namespace and cache
//! location. Configuration is stored in the user's config directory; a
//! missing file means defaults.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://runbot.odoo.com/runbot/auto-tags".to_string()
}

const fn default_timeout_ms() -> u64 {
    1_000
}

fn default_namespace() -> String {
    "odoo.addons".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AutotagsConfig {
    /// Endpoint serving the comma-separated tag list
    #[serde(default = "default_url")]
    pub url: String,

    /// Fetch timeout in milliseconds; on expiry the session falls back to
    /// the cache instead of blocking further
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Dotted prefix under which package-style module segments resolve
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Override for the cache directory (defaults to the local data dir)
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for AutotagsConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: default_timeout_ms(),
            namespace: default_namespace(),
            cache_dir: None,
            quiet: false,
        }
    }
}

impl AutotagsConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        let autotags_config_dir = config_dir.join("autotags");
        Ok(autotags_config_dir.join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Fetch timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AutotagsConfig::default();
        assert_eq!(config.url, "https://runbot.odoo.com/runbot/auto-tags");
        assert_eq!(config.timeout(), Duration::from_millis(1_000));
        assert_eq!(config.namespace, "odoo.addons");
        assert!(config.cache_dir.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AutotagsConfig = toml::from_str("timeout_ms = 250").unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.namespace, "odoo.addons");
        assert_eq!(config.url, "https://runbot.odoo.com/runbot/auto-tags");
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = AutotagsConfig::default();
        config.namespace = "acme.modules".to_string();
        config.cache_dir = Some(PathBuf::from("/tmp/autotags-cache"));

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let loaded: AutotagsConfig = toml::from_str(&toml_string).unwrap();

        assert_eq!(loaded.namespace, "acme.modules");
        assert_eq!(loaded.cache_dir, Some(PathBuf::from("/tmp/autotags-cache")));
    }
}
