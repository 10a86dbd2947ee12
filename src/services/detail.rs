use crate::domain::{MatchRecord, MatchSummary, Score, ScorerMap};
use crate::error::{parse_number, Result, ScrapeError};
use crate::infrastructure::SiteLayout;
use crate::services::listing::parse_score;
use crate::services::roster::parse_player;
use scraper::Html;
use tracing::{debug, instrument};

/// Completes a match summary from its detail page.
pub struct DetailExtractor<'a, L: SiteLayout> {
    layout: &'a L,
    target_team: &'a str,
    captain_marker: &'a str,
}

impl<'a, L: SiteLayout> DetailExtractor<'a, L> {
    pub fn new(layout: &'a L, target_team: &'a str, captain_marker: &'a str) -> Self {
        Self {
            layout,
            target_team,
            captain_marker,
        }
    }

    #[instrument(skip_all, fields(teams = ?summary.team_names))]
    pub fn extract(&self, summary: MatchSummary, body: &str) -> Result<MatchRecord> {
        let document = Html::parse_document(body);

        let half_time_score = self.half_time_score(&document)?;
        let scorers = self.scorers(&document, &summary)?;

        let section = self
            .layout
            .team_sections(&document)
            .into_iter()
            .find(|section| section.heading == self.target_team)
            .ok_or_else(|| {
                ScrapeError::structure(format!("no team section for {}", self.target_team))
            })?;
        let rows = section.rows.ok_or_else(|| {
            ScrapeError::structure(format!("team section of {} has no roster", self.target_team))
        })?;

        let players = rows
            .iter()
            .map(|row| {
                let mut player = parse_player(row, self.captain_marker)?;
                player.goals = scorers.goals_for(&player.name);
                Ok(player)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            players = players.len(),
            scorers = scorers.len(),
            "parsed match detail"
        );
        Ok(MatchRecord::new(summary, half_time_score, players))
    }

    fn half_time_score(&self, document: &Html) -> Result<Score> {
        let text = self
            .layout
            .half_time_score(document)
            .ok_or_else(|| ScrapeError::structure("half-time score is absent"))?;
        parse_score(text.trim().trim_start_matches('(').trim_end_matches(')'))
    }

    fn scorers(&self, document: &Html, summary: &MatchSummary) -> Result<ScorerMap> {
        let side = summary.side_of(self.target_team);
        let mut scorers = ScorerMap::default();
        for entry in self.layout.timeline(document, side)? {
            let minute = parse_number("goal minute", entry.minute.trim().trim_end_matches('.'))?;
            scorers.record(entry.player.trim(), minute);
        }
        if scorers.is_empty() {
            debug!(team = self.target_team, "no goals in the timeline");
        }
        Ok(scorers)
    }
}
