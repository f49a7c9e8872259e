//! Compose a lab report from a snapshot file and print it as JSON.
//!
//! Usage:
//!   labrep-preview <snapshot.json> [options.json]
//!
//! Without an options path, saved options are read from the user config
//! directory. `LABREP_LAYOUT=compact` overrides the layout for one run.

use std::path::PathBuf;

use eyre::Result;

use labrep_preview::config;
use labrep_preview::snapshot::{PreviewOutput, load_snapshot};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let snapshot_path = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| eyre::eyre!("usage: labrep-preview <snapshot.json> [options.json]"))?;
    let options_path = args.next().map(PathBuf::from);

    let snapshot = load_snapshot(&snapshot_path)?;
    let options = config::resolve_options(options_path.as_deref())?;

    let document = labrep_report::compose_document(&snapshot, &options);
    tracing::info!(
        pages = document.pages.len(),
        layout = ?options.layout_mode,
        "report composed"
    );

    let output = PreviewOutput::new(document);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
