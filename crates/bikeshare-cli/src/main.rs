//! Main entry point for the bikeshare explorer.

use anyhow::{Context, Result};
use bikeshare_analysis::CsvTripSource;
use bikeshare_cli::{report_failure, App, AppError, SessionEnd};
use bikeshare_common::init_logging;
use bikeshare_config::{ConfigLoader, ConfigOverrides};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing the city CSV files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Rows per raw-data page
    #[arg(short, long)]
    page_size: Option<usize>,

    /// Log level
    #[arg(short, long)]
    log_level: Option<String>,

    /// Do not report how long each statistic group took
    #[arg(long)]
    no_timing: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            page_size: self.page_size,
            log_level: self.log_level.clone(),
            show_timing: self.no_timing.then_some(false),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(report_failure(&e, &mut std::io::stderr().lock())),
    }
}

fn run(args: &Args) -> Result<()> {
    let config = ConfigLoader::new()
        .load(args.config.as_deref(), &args.overrides())
        .map_err(AppError::from)
        .context("loading configuration")?;

    init_logging(&config.logging)
        .map_err(AppError::from)
        .context("initializing logging")?;
    info!(
        data_dir = %config.data.data_dir.display(),
        page_size = config.display.page_size,
        "Starting bikeshare explorer"
    );

    let app = App::new(CsvTripSource::from_config(&config), &config.display);
    let end = app
        .run(std::io::stdin().lock(), std::io::stdout().lock())
        .context("running session")?;
    if end == SessionEnd::InputClosed {
        info!("Exiting at end of input");
    }
    Ok(())
}
