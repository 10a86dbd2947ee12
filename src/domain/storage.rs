use super::MatchRecord;
use crate::error::Result;

/// Destination for completed match records.
pub trait MatchSink {
    fn save_match(&mut self, record: &MatchRecord) -> Result<()>;

    /// Number of records written during this run.
    fn written(&self) -> usize;
}
