use super::PageFetcher;
use crate::error::{Result, ScrapeError};
use reqwest::Url;
use std::collections::HashMap;
use texting_robots::Robot;
use tracing::{info, warn};

pub const AGENT_TOKEN: &str = "facr_scraper";

/// robots.txt location for the origin of `url`.
pub fn robots_url(url: &str) -> Result<String> {
    Url::parse(url)
        .and_then(|u| u.join("/robots.txt"))
        .map(String::from)
        .map_err(|e| ScrapeError::structure(format!("invalid url {url:?}: {e}")))
}

/// robots.txt rules per origin, downloaded the first time an origin is seen.
/// An origin whose file can't be fetched or parsed allows everything.
#[derive(Default)]
pub struct RobotsPolicy {
    robots: HashMap<String, Option<Robot>>,
}

impl RobotsPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_allowed<F: PageFetcher>(&mut self, fetcher: &F, url: &str) -> bool {
        let location = match robots_url(url) {
            Ok(location) => location,
            Err(e) => {
                warn!(error = %e, "cannot derive robots.txt location, allowing");
                return true;
            }
        };

        if !self.robots.contains_key(&location) {
            let robot = Self::load(fetcher, &location).await;
            self.robots.insert(location.clone(), robot);
        }

        match self.robots.get(&location) {
            Some(Some(robot)) => robot.allowed(url),
            _ => true,
        }
    }

    async fn load<F: PageFetcher>(fetcher: &F, location: &str) -> Option<Robot> {
        let content = match fetcher.fetch(location).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "robots.txt unavailable, allowing all");
                return None;
            }
        };

        match Robot::new(AGENT_TOKEN, content.as_bytes()) {
            Ok(robot) => {
                info!("Loaded {}", location);
                Some(robot)
            }
            Err(e) => {
                warn!(error = %e, "unreadable {}, allowing all", location);
                None
            }
        }
    }
}
