mod football;
pub(crate) mod storage;

pub use football::{
    MatchRecord, MatchStub, MatchSummary, PlayerRecord, Score, ScorerMap, TeamSide,
};
