//! User configuration loaded from `config.toml`.
//!
//! The file lives in the platform config directory
//! (e.g. `~/.config/vision-label/config.toml`). A missing file means defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::Deserialize;
use tracing::Level;
use url::Url;

use crate::constants;

/// Settings for the vision client and logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `images:annotate` endpoint.
    pub endpoint: Url,
    /// API key; the `VISION_API_KEY` environment variable takes precedence.
    pub api_key: Option<String>,
    /// OAuth bearer token; `GOOGLE_OAUTH_ACCESS_TOKEN` takes precedence.
    pub access_token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Upper bound on returned labels. `None` leaves it to the service.
    pub max_labels: Option<u32>,
    /// Maximum log level written to stderr.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            access_token: None,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            max_labels: None,
            log_level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn default_endpoint() -> Url {
    Url::parse(constants::DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

impl Config {
    /// Path of the config file, if the platform has a config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::APP_NAME)
                .join(constants::CONFIG_FILE_NAME)
        })
    }

    /// Loads the config from the default location, falling back to defaults
    /// when there is no file.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load() -> Result<(Self, ConfigSource)> {
        match Self::default_path() {
            Some(path) if path.is_file() => {
                let config = Self::from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, invalid TOML, unknown keys, or a bad log level.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        raw.parse::<Self>()
            .wrap_err_with(|| format!("Invalid config file {}", path.display()))
    }

    /// Parsed `log_level`.
    ///
    /// # Errors
    ///
    /// Fails if the level is not one of `error`, `warn`, `info`, `debug`, `trace`.
    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| eyre!("Unknown log_level '{}'", self.log_level))
    }
}

impl FromStr for Config {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.level()?;
        if config.timeout_secs == 0 {
            return Err(eyre!("timeout_secs must be greater than zero"));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint.as_str(), constants::DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_overrides() {
        let config: Config = r#"
            endpoint = "http://localhost:8080/v1/images:annotate"
            api_key = "abc"
            timeout_secs = 5
            max_labels = 3
            log_level = "debug"
        "#
        .parse()
        .unwrap();
        assert_eq!(config.endpoint.host_str(), Some("localhost"));
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_labels, Some(3));
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!("retries = 3".parse::<Config>().is_err());
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        assert!("endpoint = \"not a url\"".parse::<Config>().is_err());
    }

    #[test]
    fn test_rejects_bad_log_level() {
        assert!("log_level = \"chatty\"".parse::<Config>().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!("timeout_secs = 0".parse::<Config>().is_err());
    }

    #[test]
    fn test_from_missing_file_fails() {
        let path = std::env::temp_dir().join("vision-label-missing-config.toml");
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::Defaults.to_string(), "defaults");
    }
}
