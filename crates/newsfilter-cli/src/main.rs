mod prompt;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use newsfilter_client::{ReqwestFetcher, ScraperExtractor};
use newsfilter_core::{AggregateEvent, AggregateReporter, Aggregator, load_sources, run_session};
use newsfilter_store::{CsvExporter, JsonFileCache};

use crate::prompt::StdinDecisions;

#[derive(Parser)]
#[command(
    name = "newsfilter",
    version,
    about = "Scrape news headlines, cache them, and filter by keyword"
)]
struct Cli {
    /// JSON file listing the news sources
    #[arg(long, env = "NEWSFILTER_SOURCES", default_value = "news_sources.json")]
    sources: PathBuf,

    /// Headline cache file; delete it to force a fresh scrape
    #[arg(long, env = "NEWSFILTER_CACHE", default_value = "cached_news.json")]
    cache: PathBuf,

    /// Directory CSV exports are written to
    #[arg(long, env = "NEWSFILTER_EXPORT_DIR", default_value = "exports")]
    export_dir: PathBuf,
}

/// Prints per-source progress to stdout.
struct ConsoleReporter;

impl AggregateReporter for ConsoleReporter {
    fn report(&self, event: AggregateEvent<'_>) {
        match event {
            AggregateEvent::SourceStarted { name } => println!("Scraping {name}..."),
            AggregateEvent::SourceCompleted { name, headlines } => {
                tracing::info!(source = %name, %headlines, "Source scraped");
            }
            AggregateEvent::SourceFailed { name, error } => {
                println!("Error scraping {name}: {error}");
                tracing::warn!(source = %name, %error, "Source failed");
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("newsfilter=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let sources = load_sources(&cli.sources)
        .with_context(|| format!("Failed to load sources from {}", cli.sources.display()))?;

    let fetcher = ReqwestFetcher::new().context("Failed to create HTTP client")?;
    let aggregator = Aggregator::with_reporter(fetcher, ScraperExtractor::new(), ConsoleReporter);
    let cache = JsonFileCache::new(&cli.cache);
    let exporter = CsvExporter::new(&cli.export_dir);

    let mut stdout = std::io::stdout();
    let outcome = run_session(
        &aggregator,
        &sources,
        &cache,
        &exporter,
        &StdinDecisions,
        &mut stdout,
    )
    .await
    .context("newsfilter session failed")?;

    tracing::debug!(?outcome, "Session finished");
    Ok(())
}
