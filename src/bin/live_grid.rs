use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use live_grid::{
    extract_grid, fetch_html_blocking, format_report, report_to_json, Config, GridSelectors,
};

#[derive(Parser, Debug)]
#[command(name = "live-grid", version, about = "Print the race starting grid by row")]
struct Cli {
    /// Page to fetch (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// Read HTML from a local file instead of fetching
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// JSON config with selector and fetch overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("live_grid=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(url) = cli.url {
        config.fetch.url = url;
    }
    if let Some(secs) = cli.timeout {
        config.fetch.timeout_secs = secs;
    }

    let selectors = GridSelectors::compile(&config.grid)?;

    let html = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => fetch_html_blocking(&config.fetch)?,
    };

    let report = extract_grid(&html, &selectors)?;
    info!(
        rows = report.groups.len(),
        drivers = report.record_count(),
        skipped = report.skipped.len(),
        "extracted live grid"
    );

    match cli.format {
        OutputFormat::Text => println!("{}", format_report(&report)),
        OutputFormat::Json => println!("{}", report_to_json(&report)?),
    }

    Ok(())
}
