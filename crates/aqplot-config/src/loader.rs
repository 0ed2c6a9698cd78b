//! Configuration loading utilities

use crate::schema::Config;
use crate::validator::ConfigValidator;
use aqplot_common::{AqPlotError, LogFormat, Result as AqPlotResult};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "AQPLOT_CONFIG_PATH";
/// Environment override for `chart.aqi_version`.
pub const AQI_VERSION_ENV: &str = "AQPLOT_AQI_VERSION";
/// Environment override for `logging.level`.
pub const LOG_LEVEL_ENV: &str = "AQPLOT_LOG_LEVEL";
/// Environment override for `logging.format`.
pub const LOG_FORMAT_ENV: &str = "AQPLOT_LOG_FORMAT";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["aqplot.yaml", "aqplot.yml", "aqplot.toml"];

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

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParseError {
        /// Variable name.
        var: String,
        /// Why the value was rejected.
        message: String,
    },

    /// File extension that maps to no known format
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

impl From<ConfigError> for AqPlotError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("failed to load configuration", err)
    }
}

/// On-disk configuration syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses configuration text without touching the environment.
    pub fn parse_str(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
        let config = match format {
            // An empty YAML document deserializes as unit, not as a map.
            ConfigFormat::Yaml if content.trim().is_empty() => Config::default(),
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> AqPlotResult<Config> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        let mut config = Self::parse_str(&content, format)?;
        debug!(path = %path.display(), "parsed configuration file");

        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from the environment, a default file, or built-in defaults
    pub fn load() -> AqPlotResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            info!(path = %config_path, "loading configuration from {}", CONFIG_PATH_ENV);
            return Self::load_config(&config_path);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES.iter().find(|p| Path::new(p).exists()) {
            info!(path = %path, "loading configuration from working directory");
            return Self::load_config(path);
        }

        debug!("no configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from an explicit path when given, otherwise as [`Self::load`]
    pub fn load_from(path: Option<&Path>) -> AqPlotResult<Config> {
        match path {
            Some(path) => Self::load_config(path),
            None => Self::load(),
        }
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, which maps a variable name to its value.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(version) = lookup(AQI_VERSION_ENV) {
            config.chart.aqi_version =
                version
                    .trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::EnvParseError {
                        var: AQI_VERSION_ENV.to_string(),
                        message: e.to_string(),
                    })?;
        }

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.logging.level = level;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.logging.format =
                format
                    .parse::<LogFormat>()
                    .map_err(|e| ConfigError::EnvParseError {
                        var: LOG_FORMAT_ENV.to_string(),
                        message: e.to_string(),
                    })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|v| (*v).to_string())
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/aqplot.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("aqplot.YML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("aqplot.toml")).unwrap(), ConfigFormat::Toml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("aqplot.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ConfigLoader::parse_str("chart:\n  range_color: \"#999\"\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(config.chart.range_color, "#999");
        assert_eq!(config.chart.marker_radius, 3.0);
        assert_eq!(config.logging, crate::LoggingSettings::default());
    }

    #[test]
    fn test_empty_documents() {
        assert_eq!(ConfigLoader::parse_str("", ConfigFormat::Yaml).unwrap(), Config::default());
        assert_eq!(ConfigLoader::parse_str("", ConfigFormat::Toml).unwrap(), Config::default());
    }

    #[test]
    fn test_toml_sections() {
        let toml = "[chart]\naqi_version = 1\nsmall_marker_radius = 1.5\n\n[logging]\nlevel = \"debug\"\nformat = \"json\"\n";
        let config = ConfigLoader::parse_str(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.chart.aqi_version, 1);
        assert_eq!(config.chart.small_marker_radius, 1.5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let vars = HashMap::from([
            (AQI_VERSION_ENV, " 1 "),
            (LOG_LEVEL_ENV, "aqplot_charts=trace"),
            (LOG_FORMAT_ENV, "compact"),
        ]);
        let mut config = Config::default();
        ConfigLoader::apply_overrides_from(&mut config, lookup_in(&vars)).unwrap();

        assert_eq!(config.chart.aqi_version, 1);
        assert_eq!(config.logging.level, "aqplot_charts=trace");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_bad_env_override() {
        let vars = HashMap::from([(AQI_VERSION_ENV, "two")]);
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides_from(&mut config, lookup_in(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::EnvParseError { ref var, .. } if var == AQI_VERSION_ENV));
    }
}
