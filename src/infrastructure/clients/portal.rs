use super::PageFetcher;
use crate::error::{Result, ScrapeError};
use reqwest::header::COOKIE;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

/// HTTP client for the results portal. Every request carries the session cookie.
pub struct PortalClient {
    client: Client,
    cookie: String,
}

impl PortalClient {
    pub fn new(client: Client, cookie: impl Into<String>) -> Self {
        Self {
            client,
            cookie: cookie.into(),
        }
    }
}

impl PageFetcher for PortalClient {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        let mut request = self.client.get(url);
        if !self.cookie.is_empty() {
            request = request.header(COOKIE, &self.cookie);
        }

        let response = request.send().await.map_err(|e| ScrapeError::Fetch {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        let body = response.text().await.map_err(|e| ScrapeError::Fetch {
            url: url.to_owned(),
            source: e,
        })?;

        debug!(bytes = body.len(), "fetched page");
        Ok(body)
    }
}

/// Appends a detail link to the portal base URL with exactly one `/` between
/// them. Absolute links are kept.
pub fn join_url(base_url: &str, link: &str) -> Result<String> {
    let mut base = Url::parse(base_url)
        .map_err(|e| ScrapeError::Config(format!("invalid base url {base_url:?}: {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(link.trim_start_matches('/'))
        .map(String::from)
        .map_err(|e| ScrapeError::structure(format!("invalid detail link {link:?}: {e}")))
}
