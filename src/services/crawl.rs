use crate::config::ScraperConfig;
use crate::domain::storage::MatchSink;
use crate::domain::MatchStub;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{PageFetcher, RobotsPolicy, SiteLayout};
use crate::services::detail::DetailExtractor;
use crate::services::listing::ListingExtractor;
use crate::services::metadata::MetadataParser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlReport {
    pub listed: usize,
    pub scraped: usize,
    pub skipped: usize,
}

/// Fetches the listing page, then every detail page of the target team, one
/// after the other, handing each finished match to the sink.
pub struct CrawlService<F, L, S> {
    config: ScraperConfig,
    fetcher: F,
    layout: L,
    sink: S,
    metadata: MetadataParser,
}

impl<F, L, S> CrawlService<F, L, S>
where
    F: PageFetcher,
    L: SiteLayout,
    S: MatchSink,
{
    pub fn new(config: ScraperConfig, fetcher: F, layout: L, sink: S) -> Self {
        let metadata = MetadataParser::new(&config.vocabulary);
        info!("Created new Crawl service");
        Self {
            config,
            fetcher,
            layout,
            sink,
            metadata,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn run(&mut self) -> Result<CrawlReport> {
        info!("Step 1: Getting match listing...");
        let stubs = self.list_matches().await?;
        info!(
            "Found {} matches of {}",
            stubs.len(),
            self.config.scraper.target_team
        );

        let mut robots = RobotsPolicy::new();

        info!("Step 2: Getting match details...");
        let mut report = CrawlReport {
            listed: stubs.len(),
            ..CrawlReport::default()
        };

        let pb = ProgressBar::new(stubs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| ScrapeError::Other(e.to_string()))?,
        );

        for stub in stubs {
            pb.set_message(stub.summary.team_names.join(" - "));

            if self.config.scraper.obey_robots_txt
                && !robots.is_allowed(&self.fetcher, &stub.detail_url).await
            {
                warn!(url = %stub.detail_url, "Skipping match disallowed by robots.txt");
                report.skipped += 1;
                pb.inc(1);
                continue;
            }

            self.scrape_match(stub).await?;
            report.scraped += 1;
            info!("Match {} scraped.", report.scraped);
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!(
            scraped = report.scraped,
            skipped = report.skipped,
            "Crawl completed"
        );
        Ok(report)
    }

    async fn list_matches(&self) -> Result<Vec<MatchStub>> {
        let scraper = &self.config.scraper;
        let body = self.fetcher.fetch(&scraper.central_url).await?;
        ListingExtractor::new(
            &self.layout,
            &self.metadata,
            &scraper.target_team,
            &scraper.base_url,
        )
        .extract(&body)
    }

    async fn scrape_match(&mut self, stub: MatchStub) -> Result<()> {
        let body = self.fetcher.fetch(&stub.detail_url).await?;
        let record = DetailExtractor::new(
            &self.layout,
            &self.config.scraper.target_team,
            &self.config.vocabulary.captain_marker,
        )
        .extract(stub.summary, &body)?;
        self.sink.save_match(&record)
    }
}
