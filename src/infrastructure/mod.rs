mod clients;
pub(crate) mod scrapers;
mod storage;

pub use clients::{
    portal::{join_url, PortalClient},
    robots::RobotsPolicy,
    PageFetcher,
};
pub use scrapers::{
    fotbal_cz::FotbalCzLayout, RawMatchRound, RawRosterRow, SiteLayout,
};
pub use storage::fs_store::JsonLinesStore;
