//! Telemetry comparison command-line tool
//!
//! Reads a shadow export and a device readout, then writes the
//! per-parameter comparison report.

mod cli;
mod commands;
mod inputs;

use anyhow::{Context, Result};
use clap::Parser;
use tc_config::CompareConfig;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries reports
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CompareConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => CompareConfig::default(),
    };
    debug!("Using configuration {:?}", config);

    match cli.command {
        Command::Compare(args) => commands::compare(&config, args).await,
        Command::Sniff { files } => commands::sniff(&files).await,
    }
}
