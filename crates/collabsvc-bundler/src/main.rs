//! Command-line bundler for the collaboration service OpenAPI spec.
//!
//! Reads `tags/*.yaml` path fragments and `components/components.yaml` from
//! the current working directory and writes the merged document to the
//! `--output` path.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use collabsvc_openapi::bundle;
use tracing_subscriber::EnvFilter;

/// Bundle per-tag OpenAPI path fragments into a single spec document.
#[derive(Debug, Parser)]
#[command(name = "collabsvc-bundler")]
#[command(version)]
#[command(about = "Bundle per-tag OpenAPI path fragments into a single spec document")]
struct Cli {
    /// Path to the output bundled OpenAPI file, resolved against the
    /// current working directory.
    #[arg(long, default_value = "collabsvc_bundled.yaml")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Warnings go to stderr so the success line on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let base_dir =
        std::env::current_dir().context("Failed to resolve current working directory")?;
    let tags_dir = base_dir.join("tags");
    let components_file = base_dir.join("components").join("components.yaml");
    let output_file = base_dir.join(&cli.output);

    let report = bundle(&tags_dir, &components_file, &output_file).context("Bundling failed")?;
    tracing::debug!(
        merged = report.merged,
        skipped = report.skipped,
        paths = report.paths,
        components = report.components,
        "bundle complete"
    );

    println!(
        "Successfully bundled OpenAPI spec to {}",
        output_file.display()
    );
    Ok(())
}
