//! Configuration schema definitions using serde.
//!
//! Every section is `#[serde(default)]`, so any subset of the YAML document
//! may be given and the rest falls back to the values in [`crate::defaults`].

use bikeshare_common::{BikeshareError, City, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main configuration structure for the bikeshare explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset locations.
    pub data: DataConfig,
    /// Console output settings.
    pub display: DisplayConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Dataset locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory that relative dataset paths are resolved against.
    pub data_dir: PathBuf,
    /// CSV file for each city.
    pub datasets: BTreeMap<City, PathBuf>,
}

/// Console output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown per raw-data page.
    pub page_size: usize,
    /// Whether each statistic group reports how long it took.
    pub show_timing: bool,
}

impl Config {
    /// Location of the dataset for `city`, joined onto `data_dir` unless absolute.
    pub fn dataset_path(&self, city: City) -> Option<PathBuf> {
        self.data.datasets.get(&city).map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                self.data.data_dir.join(path)
            }
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), BikeshareError> {
        crate::validator::ConfigValidator::validate(self).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_dataset_path_joins_data_dir() {
        let mut config = Config::default();
        config.data.data_dir = PathBuf::from("/srv/bikeshare");
        assert_eq!(
            config.dataset_path(City::Chicago),
            Some(PathBuf::from("/srv/bikeshare/chicago.csv"))
        );
    }

    #[test]
    fn test_absolute_dataset_path_is_kept() {
        let mut config = Config::default();
        config
            .data
            .datasets
            .insert(City::Washington, PathBuf::from("/data/dc.csv"));
        assert_eq!(
            config.dataset_path(City::Washington).as_deref(),
            Some(Path::new("/data/dc.csv"))
        );
    }

    #[test]
    fn test_unmapped_city_has_no_path() {
        let mut config = Config::default();
        config.data.datasets.remove(&City::NewYorkCity);
        assert!(config.dataset_path(City::NewYorkCity).is_none());
        assert!(config.validate().is_err());
    }
}
