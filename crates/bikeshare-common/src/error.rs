//! Error types and utilities for the bikeshare explorer

use crate::types::City;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bikeshare operations
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Main error type for bikeshare operations
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A city dataset could not be loaded in full
    #[error("Failed to load {city} dataset{}: {message}", describe_location(.path, .line))]
    DatasetLoad {
        city: City,
        path: Option<PathBuf>,
        /// 1-based line in the source file of the offending row, if a row is at fault
        line: Option<u64>,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The input stream ended while an answer was still expected
    #[error("Input closed before an answer was given")]
    InputClosed,

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn describe_location(path: &Option<PathBuf>, line: &Option<u64>) -> String {
    match (path, line) {
        (Some(path), Some(line)) => format!(" ({}, line {line})", path.display()),
        (Some(path), None) => format!(" ({})", path.display()),
        (None, Some(line)) => format!(" (line {line})"),
        (None, None) => String::new(),
    }
}

impl BikeshareError {
    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new dataset load error
    pub fn dataset_load(city: City, msg: impl Into<String>) -> Self {
        Self::DatasetLoad {
            city,
            path: None,
            line: None,
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new dataset load error with source
    pub fn dataset_load_with_source(
        city: City,
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DatasetLoad {
            city,
            path: None,
            line: None,
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Attach the dataset path to a dataset load error. Other variants pass through.
    #[must_use]
    pub fn at_path(mut self, new_path: impl Into<PathBuf>) -> Self {
        if let Self::DatasetLoad { path, .. } = &mut self {
            *path = Some(new_path.into());
        }
        self
    }

    /// Attach the offending source line to a dataset load error. Other variants pass through.
    #[must_use]
    pub fn at_line(mut self, new_line: u64) -> Self {
        if let Self::DatasetLoad { line, .. } = &mut self {
            *line = Some(new_line);
        }
        self
    }

    /// Whether this error aborted loading a dataset
    pub const fn is_dataset_load(&self) -> bool {
        matches!(self, Self::DatasetLoad { .. })
    }
}
