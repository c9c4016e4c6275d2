//! Built-in default values.

use crate::schema::{Config, DataConfig, DisplayConfig};
use bikeshare_common::{City, LoggingConfig};
use std::path::PathBuf;

/// Rows per raw-data page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Largest accepted raw-data page.
pub const MAX_PAGE_SIZE: usize = 100;

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            datasets: City::ALL
                .into_iter()
                .map(|city| (city, PathBuf::from(city.default_file_name())))
                .collect(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            show_timing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_city() {
        let config = Config::default();
        assert_eq!(config.data.datasets.len(), City::ALL.len());
        assert_eq!(
            config.data.datasets[&City::NewYorkCity],
            PathBuf::from("new_york_city.csv")
        );
        assert_eq!(config.display.page_size, 5);
        assert!(config.display.show_timing);
        assert!(config.validate().is_ok());
    }
}
