//! Subcommand handlers

use anyhow::{Context, Result};
use std::path::PathBuf;
use tc_compare::{render, render_json, write_report, Comparer, InputSlots};
use tc_config::CompareConfig;
use tc_core::{InputFormat, Source};
use tc_parse::classify;
use tracing::{info, warn};

use crate::cli::CompareArgs;
use crate::inputs::{read_all, read_optional};

pub async fn compare(config: &CompareConfig, args: CompareArgs) -> Result<()> {
    let (shadow, device, routed) = tokio::try_join!(
        read_optional(args.shadow.as_deref()),
        read_optional(args.device.as_deref()),
        read_all(&args.inputs),
    )?;

    let mut slots = InputSlots::new();
    for input in routed {
        if slots.route(input.text) == InputFormat::Unknown {
            warn!("Skipping {:?}: not a shadow export or device readout", input.path);
        }
    }
    if let Some(input) = shadow {
        slots.set(Source::Shadow, input.text);
    }
    if let Some(input) = device {
        slots.set(Source::Device, input.text);
    }

    let report = Comparer::from_config(config).compare_slots(&slots)?;

    if args.json {
        println!("{}", render_json(&report).context("failed to serialize report")?);
        return Ok(());
    }
    if args.stdout {
        println!("{}", render(&report));
        return Ok(());
    }

    let name = args
        .output_name
        .unwrap_or_else(|| config.output.file_name.clone());
    let dir = args
        .output_dir
        .unwrap_or_else(|| config.output.directory.clone());

    let path = write_report(&dir, &name, &report)?;
    let summary = report.summary();
    info!(
        "{} parameters: {} match, {} differ, {} shadow only, {} device only",
        summary.total, summary.matched, summary.mismatched, summary.shadow_only, summary.device_only
    );
    println!("{}", path.display());
    Ok(())
}

pub async fn sniff(files: &[PathBuf]) -> Result<()> {
    for input in read_all(files).await? {
        println!("{}: {}", input.path.display(), classify(&input.text));
    }
    Ok(())
}
