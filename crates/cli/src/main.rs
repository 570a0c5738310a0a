mod args;
mod banner;

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adperf_core::{aggregate_file, write_reports};

use args::Args;

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    let output_dir = config.output.dir.clone();

    if !args.input.exists() {
        bail!("input file '{}' does not exist", args.input.display());
    }

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

    banner::print_header(&args.input, &output_dir);

    let started = Instant::now();

    info!("Processing {:?}", args.input);
    let aggregation = aggregate_file(&args.input, &config.ingest)
        .with_context(|| format!("Failed to process {:?}", args.input))?;
    banner::print_ingest(
        aggregation.campaigns.len(),
        &aggregation.stats,
        started.elapsed(),
    );

    let paths = write_reports(&aggregation.campaigns, &output_dir, &config.output)
        .context("Failed to write reports")?;

    banner::print_summary(&paths, started.elapsed());
    Ok(())
}
