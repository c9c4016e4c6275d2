//! Application-wide error types using thiserror.

use bikeshare_common::BikeshareError;
use bikeshare_config::ConfigError;
use std::io::Write;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The configuration file could not be read, parsed or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A setting was rejected after loading, e.g. by the log subscriber.
    #[error(transparent)]
    Settings(BikeshareError),

    /// A city dataset failed to load.
    #[error(transparent)]
    Dataset(BikeshareError),

    /// Any other failure during the session, usually terminal I/O.
    #[error(transparent)]
    Session(BikeshareError),
}

impl From<BikeshareError> for AppError {
    fn from(err: BikeshareError) -> Self {
        match err {
            BikeshareError::Config { .. } => Self::Settings(err),
            _ if err.is_dataset_load() => Self::Dataset(err),
            _ => Self::Session(err),
        }
    }
}

impl AppError {
    /// Process exit status for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Settings(_) => 2,
            Self::Dataset(_) => 3,
            Self::Session(_) => 1,
        }
    }
}

/// Exit status for an error chain; 1 unless an [`AppError`] says otherwise.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<AppError>())
        .map_or(1, AppError::exit_code)
}

/// Writes `error` with its causes as a single line and returns its exit status.
///
/// Logging may not be initialized yet, so this writes directly instead of
/// going through `tracing`.
pub fn report_failure(error: &anyhow::Error, out: &mut impl Write) -> u8 {
    // Nothing useful can be done if stderr itself is gone
    let _ = writeln!(out, "Error: {error:#}");
    exit_code_for(error)
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
