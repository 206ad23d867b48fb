//! # Selector Scraper
//!
//! Scrapes articles from configured listing pages and writes their titles
//! and body text to a JSON file.
//!
//! ## Usage
//!
//! ```sh
//! selector_scraper -c scraping_config.json -o output.json
//! ```
//!
//! ## Architecture
//!
//! The application is a sequential pipeline:
//! 1. **Config**: Load the scrape targets once
//! 2. **Links**: Read each target's listing page and collect article URLs
//! 3. **Articles**: Fetch each article and extract title and content
//! 4. **Output**: Write every collected article to one JSON file
//!
//! A failing article is logged and skipped. A failing listing page, a bad
//! config file, or an unwritable output path ends the run with an error.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use outputs::json;
use scrapers::Scraper;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("selector_scraper starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let targets = config::load_targets(&args.config).await?;

    let scraper = Scraper::new(Duration::from_secs(args.timeout_secs), &args.user_agent)?;
    let articles = pipeline::run(&scraper, &targets).await?;

    json::write_json(&args.output, &articles).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = articles.len(),
        output = %args.output,
        "Execution complete"
    );

    Ok(())
}
