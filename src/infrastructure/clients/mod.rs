pub(crate) mod portal;
pub(crate) mod robots;

use crate::error::Result;

/// Anything that can hand back the body of a page.
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}
