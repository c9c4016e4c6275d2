//! Configuration loading utilities

use crate::schema::Config;
use crate::validator::ConfigValidator;
use bikeshare_common::BikeshareError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File names searched for in the working directory, in order.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["bikeshare.yaml", "bikeshare.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    IoError {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for BikeshareError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `data.data_dir`
    pub data_dir: Option<PathBuf>,
    /// Replaces `display.page_size`
    pub page_size: Option<usize>,
    /// Replaces `logging.level`
    pub log_level: Option<String>,
    /// Replaces `display.show_timing`
    pub show_timing: Option<bool>,
}

impl ConfigOverrides {
    /// Writes every set override into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(data_dir) = &self.data_dir {
            config.data.data_dir.clone_from(data_dir);
        }
        if let Some(page_size) = self.page_size {
            config.display.page_size = page_size;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(show_timing) = self.show_timing {
            config.display.show_timing = show_timing;
        }
    }
}

/// Configuration loader for the application
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_dir: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader that searches the working directory.
    pub fn new() -> Self {
        Self::in_dir(".")
    }

    /// Loader that searches `dir` instead of the working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: dir.into(),
        }
    }

    /// First default configuration file present in the search directory.
    pub fn discover(&self) -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| self.search_dir.join(name))
            .find(|path| path.is_file())
    }

    /// Resolves, reads, overrides and validates the configuration.
    ///
    /// An `explicit` path must exist. Otherwise the first default file in the
    /// search directory is used, and built-in defaults when there is none.
    pub fn load(
        &self,
        explicit: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Config, ConfigError> {
        let mut config = match explicit.map(Path::to_path_buf).or_else(|| self.discover()) {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration file");
                Self::read_config(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        overrides.apply(&mut config);
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load and validate configuration from a YAML file
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let config = Self::read_config(path.as_ref())?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Parse configuration from YAML text without validating it.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn read_config(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_common::{City, LogFormat};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Create a temporary YAML config file for testing
    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    #[test]
    fn test_load_valid_yaml_config() {
        let yaml_content = "data:\n  data_dir: /srv/bikeshare\n  datasets:\n    chicago: chi.csv\n    new_york_city: nyc.csv\n    washington: dc.csv\ndisplay:\n  page_size: 10\n  show_timing: false\nlogging:\n  level: debug\n  format: json\n";

        let temp_file = create_test_config_file(yaml_content);
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

        assert_eq!(config.display.page_size, 10);
        assert!(!config.display.show_timing);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.dataset_path(City::NewYorkCity),
            Some(PathBuf::from("/srv/bikeshare/nyc.csv"))
        );
    }

    #[test]
    fn test_load_minimal_config() {
        let temp_file = create_test_config_file("display:\n  page_size: 3\n");
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

        // Should use defaults for unspecified values
        assert_eq!(config.display.page_size, 3);
        assert!(config.display.show_timing);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.data.datasets.len(), 3);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp_file = create_test_config_file("");
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_file = create_test_config_file("display:\n  page_size: [unclosed array");
        let result = ConfigLoader::load_config(temp_file.path());

        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_city_key_is_a_parse_error() {
        let result = ConfigLoader::parse("data:\n  datasets:\n    boston: boston.csv\n");
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error() {
        let temp_file = create_test_config_file("display:\n  page_size: 0\n");
        let result = ConfigLoader::load_config(temp_file.path());

        assert!(matches!(result.unwrap_err(), ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let loader = ConfigLoader::new();
        let result = loader.load(
            Some(Path::new("/definitely/not/here/bikeshare.yaml")),
            &ConfigOverrides::default(),
        );
        match result.unwrap_err() {
            ConfigError::IoError { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/bikeshare.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overrides_apply_last() {
        let temp_file = create_test_config_file("display:\n  page_size: 3\n  show_timing: true\n");
        let overrides = ConfigOverrides {
            data_dir: Some(PathBuf::from("/tmp/trips")),
            page_size: Some(7),
            log_level: Some("info".to_string()),
            show_timing: Some(false),
        };

        let config = ConfigLoader::new()
            .load(Some(temp_file.path()), &overrides)
            .expect("Failed to load config");

        assert_eq!(config.display.page_size, 7);
        assert!(!config.display.show_timing);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.data.data_dir, PathBuf::from("/tmp/trips"));
    }

    #[test]
    fn test_override_is_validated() {
        let overrides = ConfigOverrides {
            page_size: Some(500),
            ..ConfigOverrides::default()
        };
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = ConfigLoader::in_dir(dir.path()).load(None, &overrides);
        assert!(matches!(result.unwrap_err(), ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_config_error_converts_to_bikeshare_error() {
        let err: BikeshareError = ConfigError::ValidationError("display.page_size".to_string()).into();
        assert!(matches!(err, BikeshareError::Config { .. }));
        assert!(err.to_string().contains("display.page_size"));
    }
}
