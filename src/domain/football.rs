use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Ordered goal pair, home first. Serialized as `[home, away]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(pub u32, pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Home,
    Visitor,
}

/// One qualifying row of the listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub team_names: [String; 2],
    /// `None` until the match has been played.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_number: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub referees: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stadium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectators: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Metadata whose label isn't in the vocabulary, keyed by the label as shown.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl MatchSummary {
    pub fn new(home: impl Into<String>, visitor: impl Into<String>) -> Self {
        Self {
            team_names: [home.into(), visitor.into()],
            score: None,
            date: Vec::new(),
            match_number: None,
            referees: Vec::new(),
            delegate: None,
            stadium: None,
            spectators: None,
            note: None,
            extra: BTreeMap::new(),
        }
    }

    /// The target team plays at home when it is listed first.
    pub fn side_of(&self, team: &str) -> TeamSide {
        if self.team_names[0] == team {
            TeamSide::Home
        } else {
            TeamSide::Visitor
        }
    }

    /// Reads the date tokens as `[weekday] day month year [HH:MM]`.
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        let mut tokens = self
            .date
            .iter()
            .map(String::as_str)
            .skip_while(|t| t.parse::<u32>().is_err());

        let day = tokens.next()?.parse().ok()?;
        let month = tokens.next()?.parse().ok()?;
        let year = tokens.next()?.parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        let time = tokens
            .next()
            .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok())
            .unwrap_or(NaiveTime::MIN);

        Some(date.and_time(time))
    }
}

/// A summary paired with the absolute URL of its detail page. The URL is the
/// key that ties a detail page back to its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStub {
    pub summary: MatchSummary,
    pub detail_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub number: u32,
    pub position: String,
    pub name: String,
    pub captain: bool,
    /// Minute of the red card, `-1` when there was none.
    pub red_card: i32,
    pub yellow_cards: Vec<u32>,
    /// Minute the player went off, `-1` when not substituted.
    pub substitution_minute: i32,
    pub substitution_player: String,
    pub goals: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    #[serde(flatten)]
    pub summary: MatchSummary,
    pub half_time_score: Score,
    pub players: Vec<PlayerRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kickoff: Option<NaiveDateTime>,
}

impl MatchRecord {
    pub fn new(summary: MatchSummary, half_time_score: Score, players: Vec<PlayerRecord>) -> Self {
        let kickoff = summary.kickoff();
        Self {
            summary,
            half_time_score,
            players,
            kickoff,
        }
    }
}

/// Goal minutes per scorer for one side of one match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScorerMap(HashMap<String, Vec<u32>>);

impl ScorerMap {
    pub fn record(&mut self, player: impl Into<String>, minute: u32) {
        self.0.entry(player.into()).or_default().push(minute);
    }

    pub fn goals_for(&self, player: &str) -> Vec<u32> {
        self.0.get(player).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
