//! Configuration loading utilities

use crate::Config;
use atrium_common::AtriumError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "ATRIUM_CONFIG_PATH";

/// Files probed in the working directory when no explicit path is given.
const DEFAULT_CONFIG_FILES: &[&str] = &["atrium.yaml", "atrium.yml", "atrium.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Configuration validation error
    #[error("Configuration validation failed: {}", .0.join("; "))]
    ValidationError(Vec<String>),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for AtriumError {
    fn from(err: ConfigError) -> Self {
        AtriumError::config_with_source("failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let mut config = Self::parse_file(path.as_ref())?;
        Self::apply_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default sources.
    ///
    /// Resolution order: `ATRIUM_CONFIG_PATH`, then `atrium.yaml`, `atrium.yml`
    /// and `atrium.toml` in the working directory, then built-in defaults.
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Config, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_config(path);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
        {
            return Self::load_config(path);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file without applying overrides or validation.
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply overrides taken from `lookup`, usually the process environment.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("ATRIUM_DEFAULT_LOCALE") {
            config.i18n.default_locale = locale.trim().to_string();
        }

        if let Some(locales) = lookup("ATRIUM_SUPPORTED_LOCALES") {
            config.i18n.supported_locales = locales
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Some(dir) = lookup("ATRIUM_TRANSLATIONS_DIR") {
            config.i18n.translations_dir = dir.into();
        }

        if let Some(bind) = lookup("ATRIUM_BIND_ADDRESS") {
            config.server.bind_address = bind;
        }

        if let Some(delay) = lookup("ATRIUM_SCROLL_DELAY_MS") {
            config.navigation.scroll_delay_ms =
                delay.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "ATRIUM_SCROLL_DELAY_MS".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            config.logging.format = format.parse().map_err(|e: AtriumError| {
                ConfigError::EnvParseError {
                    var: "LOG_FORMAT".to_string(),
                    source: Box::new(e),
                }
            })?;
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.logging.file_path = Some(file);
        }

        Ok(())
    }
}
