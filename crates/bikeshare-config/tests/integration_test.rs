//! Integration tests for bikeshare-config crate.
//!
//! These tests exercise file discovery in a scratch directory and the
//! interaction between the file, command-line overrides and validation.

use bikeshare_common::test_utils::{create_temp_dir, init_test_logging};
use bikeshare_common::City;
use bikeshare_config::{Config, ConfigError, ConfigLoader, ConfigOverrides, MAX_PAGE_SIZE};
use proptest::prelude::*;
use std::path::PathBuf;

#[test]
fn test_defaults_when_no_file_is_present() {
    init_test_logging();
    let dir = create_temp_dir();
    let loader = ConfigLoader::in_dir(dir.path());

    assert!(loader.discover().is_none());
    let config = loader
        .load(None, &ConfigOverrides::default())
        .expect("defaults are valid");
    assert_eq!(config, Config::default());
}

#[test]
fn test_yaml_takes_precedence_over_yml() {
    init_test_logging();
    let dir = create_temp_dir();
    std::fs::write(dir.path().join("bikeshare.yml"), "display:\n  page_size: 9\n").unwrap();
    let loader = ConfigLoader::in_dir(dir.path());
    assert_eq!(loader.discover(), Some(dir.path().join("bikeshare.yml")));

    std::fs::write(dir.path().join("bikeshare.yaml"), "display:\n  page_size: 4\n").unwrap();
    assert_eq!(loader.discover(), Some(dir.path().join("bikeshare.yaml")));

    let config = loader.load(None, &ConfigOverrides::default()).unwrap();
    assert_eq!(config.display.page_size, 4);
}

#[test]
fn test_explicit_path_beats_discovery() {
    let dir = create_temp_dir();
    std::fs::write(dir.path().join("bikeshare.yaml"), "display:\n  page_size: 4\n").unwrap();
    let explicit = dir.path().join("other.yaml");
    std::fs::write(&explicit, "display:\n  page_size: 12\n").unwrap();

    let config = ConfigLoader::in_dir(dir.path())
        .load(Some(&explicit), &ConfigOverrides::default())
        .unwrap();
    assert_eq!(config.display.page_size, 12);
}

#[test]
fn test_data_dir_override_moves_every_dataset() {
    let overrides = ConfigOverrides {
        data_dir: Some(PathBuf::from("/mnt/trips")),
        ..ConfigOverrides::default()
    };
    let dir = create_temp_dir();
    let config = ConfigLoader::in_dir(dir.path()).load(None, &overrides).unwrap();

    for city in City::ALL {
        let path = config.dataset_path(city).unwrap();
        assert!(path.starts_with("/mnt/trips"), "{city}: {}", path.display());
    }
}

#[test]
fn test_partial_dataset_map_fails_validation() {
    let dir = create_temp_dir();
    std::fs::write(
        dir.path().join("bikeshare.yaml"),
        "data:\n  datasets:\n    chicago: chicago.csv\n",
    )
    .unwrap();

    let err = ConfigLoader::in_dir(dir.path())
        .load(None, &ConfigOverrides::default())
        .unwrap_err();
    match err {
        ConfigError::ValidationError(message) => {
            assert!(message.contains("new_york_city"));
            assert!(message.contains("washington"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

proptest! {
    #[test]
    fn test_property_page_size_validation(page_size in 0usize..1_000) {
        let mut config = Config::default();
        config.display.page_size = page_size;
        let valid = (1..=MAX_PAGE_SIZE).contains(&page_size);
        prop_assert_eq!(config.validate().is_ok(), valid);
    }
}
