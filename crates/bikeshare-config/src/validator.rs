//! Runtime validation of a fully merged configuration.

use crate::defaults::MAX_PAGE_SIZE;
use crate::loader::ConfigError;
use crate::schema::Config;
use bikeshare_common::City;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting every problem at once.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let issues = Self::issues(config);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(issues.join("; ")))
        }
    }

    /// Lists every validation problem found in `config`.
    pub fn issues(config: &Config) -> Vec<String> {
        let mut issues = Vec::new();

        for city in City::ALL {
            match config.data.datasets.get(&city) {
                None => issues.push(format!("data.datasets.{}: no dataset configured", Self::key(city))),
                Some(path) if path.as_os_str().is_empty() => {
                    issues.push(format!("data.datasets.{}: path is empty", Self::key(city)));
                }
                Some(_) => {}
            }
        }

        if !(1..=MAX_PAGE_SIZE).contains(&config.display.page_size) {
            issues.push(format!(
                "display.page_size: {} is outside 1-{MAX_PAGE_SIZE}",
                config.display.page_size
            ));
        }

        if let Err(e) = config.logging.validate() {
            issues.push(format!("logging.level: {e}"));
        }

        issues
    }

    fn key(city: City) -> String {
        city.key().replace(' ', "_")
    }
}
