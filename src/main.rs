use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use serp_harvest::config::Config;
use serp_harvest::crawler::Crawler;
use serp_harvest::exporters::{self, OutputFormat};
use serp_harvest::fetcher::HttpFetcher;
use serp_harvest::jobs::load_jobs;
use serp_harvest::parser::SearchParser;

/// Collects structured Bing search data for a list of keywords.
#[derive(Parser, Debug)]
#[command(name = "serp-harvest", version, about)]
struct Cli {
    /// Path to settings JSON
    #[arg(short, long, default_value = "config/settings.example.json")]
    config: PathBuf,

    /// Path to input JSON describing keywords
    #[arg(short, long, default_value = "data/input.sample.json")]
    input: PathBuf,

    /// Output directory (default: configured default_output_dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // tracing-subscriber also picks up `log` records from the library
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(true)
        .init();

    let config = Config::load(&cli.config);
    let jobs = load_jobs(&cli.input)?;
    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| config.default_output_dir.clone());

    let fetcher = HttpFetcher::from_config(&config)?;
    let crawler = Crawler::new(
        fetcher,
        SearchParser::new(),
        &config.bing_base_url,
        config.concurrency,
    );
    let records = crawler.crawl(&jobs).await?;

    let written = exporters::export(&records, cli.format, &output_dir)
        .context("failed to write results")?;

    tracing::info!(
        jobs = jobs.len(),
        records = records.len(),
        output_base_path = %output_dir.join(exporters::OUTPUT_BASE_NAME).display(),
        "Scraping completed"
    );
    for path in written {
        tracing::info!("wrote {}", path.display());
    }
    Ok(())
}
