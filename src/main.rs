use crate::config::cli::Args;
use crate::config::Config;
use crate::domain::storage::MatchSink;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{FotbalCzLayout, JsonLinesStore, PortalClient};
use crate::services::crawl::CrawlService;
use clap::Parser;
use std::str::FromStr;
use tracing::{error, info};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = tracing::Level::from_str(&args.log_level)
        .map_err(|e| ScrapeError::Config(format!("invalid log level: {e}")))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::from_args(args)?;

    if !config.scraper_config.project.scrape_data {
        info!("Skipping the scraping process...");
        return Ok(());
    }

    info!("Scraping the match data and storing it in {}", config.args.output.display());

    let fetcher = PortalClient::new(
        config.http_client.clone(),
        config.scraper_config.scraper.cookie_php_session.clone(),
    );
    let mut crawl = CrawlService::new(
        config.scraper_config.clone(),
        fetcher,
        FotbalCzLayout::new()?,
        JsonLinesStore::new(&config.args.output),
    );

    let report = crawl.run().await.inspect_err(|e| {
        let class = if e.is_fetch() {
            "fetch"
        } else if e.is_structure() {
            "page structure"
        } else {
            "internal"
        };
        error!(error = %e, "Scraping aborted on a {class} error");
    })?;
    info!(
        listed = report.listed,
        skipped = report.skipped,
        "Scraping completed successfully! {} matches saved to {}",
        crawl.sink().written(),
        crawl.sink().path().display()
    );
    Ok(())
}
