pub(crate) mod crawl;
pub(crate) mod detail;
pub(crate) mod listing;
pub(crate) mod metadata;
pub(crate) mod roster;
