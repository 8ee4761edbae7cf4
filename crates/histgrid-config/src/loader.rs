//! Configuration loading utilities

use crate::Config;
use histgrid_common::{HistGridError, Result as HistGridResult};
use std::env;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "HISTGRID_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["histgrid.yaml", "histgrid.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading or writing a configuration file
    #[error("Failed to access configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

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

impl From<ConfigError> for HistGridError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        Self::config_with_source(message, err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading configuration file");

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Parse YAML without applying overrides or validation.
    /// An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from the environment and the usual file locations
    pub fn load() -> HistGridResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Ok(Self::load_config(&config_path)?);
        }

        if let Some(found) = DEFAULT_CONFIG_FILES.iter().find(|f| Path::new(f).exists()) {
            return Ok(Self::load_config(found)?);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HistGridResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Serialize a configuration to YAML.
    pub fn to_yaml(config: &Config) -> HistGridResult<String> {
        Ok(serde_yaml::to_string(config)?)
    }

    /// Write a configuration atomically: a sibling temp file is written and
    /// then renamed over the target.
    pub fn save<P: AsRef<Path>>(config: &Config, path: P) -> HistGridResult<()> {
        let path = path.as_ref();
        config.validate().map_err(ConfigError::ValidationError)?;
        let yaml = Self::to_yaml(config)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(yaml.as_bytes())?;
        tmp.persist(path).map_err(|e| HistGridError::Io(e.error))?;

        info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup, keyed by `HISTGRID_*` names.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("HISTGRID_OUTPUT_PATH") {
            config.figure.output_path = path;
        }

        if let Some(tag) = lookup("HISTGRID_FIGURE_TAG") {
            config.histogram.figure_tag = tag;
        }

        if let Some(bins) = lookup("HISTGRID_BINS") {
            config.histogram.bins = bins.parse().map_err(|e| ConfigError::EnvParseError {
                var: "HISTGRID_BINS".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(alpha) = lookup("HISTGRID_ALPHA") {
            config.histogram.alpha = alpha.parse().map_err(|e| ConfigError::EnvParseError {
                var: "HISTGRID_ALPHA".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(level) = lookup("HISTGRID_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistType;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), Config::default());
        assert_eq!(ConfigLoader::parse("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_document() {
        let config = ConfigLoader::parse("histogram:\n  bins: 12\n  style:\n    hist_type: step\n")
            .unwrap();
        assert_eq!(config.histogram.bins, 12);
        assert_eq!(config.histogram.style.hist_type, HistType::Step);
        assert_eq!(config.figure.width, 2200);
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("HISTGRID_OUTPUT_PATH", "plots/out.png"),
            ("HISTGRID_BINS", "9"),
            ("HISTGRID_ALPHA", "0.25"),
            ("HISTGRID_FIGURE_TAG", "3"),
            ("HISTGRID_LOG_LEVEL", "trace"),
        ]);
        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();

        assert_eq!(config.figure.output_path, "plots/out.png");
        assert_eq!(config.histogram.bins, 9);
        assert!((config.histogram.alpha - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.histogram.figure_tag, "3");
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_bad_override_reports_variable() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(&mut config, lookup_from(&[("HISTGRID_BINS", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("HISTGRID_BINS"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histgrid.yaml");

        let mut config = Config::default();
        config.histogram.bins = 7;
        config.figure.output_path = "out.png".to_string();
        ConfigLoader::save(&config, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let reloaded = ConfigLoader::parse(&content).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histgrid.yaml");

        let mut config = Config::default();
        config.histogram.bins = 0;
        assert!(ConfigLoader::save(&config, &path).is_err());
        assert!(!path.exists());
    }
}
