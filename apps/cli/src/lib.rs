pub mod cli;
pub mod config;
pub mod error;
pub mod mirror;
pub mod output;

use std::path::Path;

use quiz_core::{ConversionReport, ConvertError, SkipReason};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::mirror::Mirror;
use crate::output::DirectoryOutput;

pub use crate::error::AppError;

/// Install the global tracing subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Convert, then mirror until interrupted when the run mode asks for it.
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env()?;
    config.apply_cli(&cli);
    tracing::debug!(?config, "configuration loaded");

    convert_to_dirs(&cli.csv_file, &config)?;
    println!("Conversion complete!");

    if !config.mirrored() {
        return Ok(());
    }

    watch_until_interrupt(&config).await
}

/// Convert `csv_file` into the configured output folders.
pub fn convert_to_dirs(csv_file: &Path, config: &Config) -> Result<ConversionReport> {
    if !csv_file.exists() {
        return Err(ConvertError::InputNotFound {
            path: csv_file.to_path_buf(),
        }
        .into());
    }

    let schema = config.row_schema();
    let output = DirectoryOutput::create(config.output_dirs())?;

    tracing::info!(
        file = %csv_file.display(),
        schema = %config.schema,
        mirrored = config.mirrored(),
        "converting"
    );
    let report = quiz_core::convert_file(csv_file, &schema, output)?;

    for skipped in &report.skipped {
        match &skipped.reason {
            SkipReason::Unreadable(error) => {
                tracing::warn!(row = skipped.row, %error, "unreadable row skipped")
            }
            reason => tracing::debug!(row = skipped.row, ?reason, "row skipped"),
        }
    }
    for failed in &report.failed {
        tracing::error!(filename = %failed.filename, error = %failed.error, "failed to write question");
    }
    tracing::info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "conversion finished"
    );

    Ok(report)
}

async fn watch_until_interrupt(config: &Config) -> Result<()> {
    let mirror = Mirror::start(&config.app_dir, &config.home_dir, config.settle_delay)?;
    println!(
        "Synchronizing files between {} and {}",
        config.app_dir.display(),
        config.home_dir.display()
    );

    tokio::signal::ctrl_c().await?;

    tokio::task::spawn_blocking(move || mirror.stop())
        .await
        .map_err(|e| AppError::Watch(e.into()))?;
    println!("Sync stopped");
    Ok(())
}
