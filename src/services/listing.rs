use crate::domain::{MatchStub, MatchSummary, Score};
use crate::error::{parse_number, Result, ScrapeError};
use crate::infrastructure::{join_url, RawMatchRound, SiteLayout};
use crate::services::metadata::MetadataParser;
use scraper::Html;
use tracing::{debug, instrument};

/// Reads a `home:away` score.
pub fn parse_score(text: &str) -> Result<Score> {
    let (home, away) = text
        .split_once(':')
        .ok_or_else(|| ScrapeError::structure(format!("score without separator: {text:?}")))?;
    Ok(Score(
        parse_number("home score", home)?,
        parse_number("away score", away)?,
    ))
}

/// Builds match stubs for the target team from the listing page.
pub struct ListingExtractor<'a, L: SiteLayout> {
    layout: &'a L,
    metadata: &'a MetadataParser,
    target_team: &'a str,
    base_url: &'a str,
}

impl<'a, L: SiteLayout> ListingExtractor<'a, L> {
    pub fn new(
        layout: &'a L,
        metadata: &'a MetadataParser,
        target_team: &'a str,
        base_url: &'a str,
    ) -> Self {
        Self {
            layout,
            metadata,
            target_team,
            base_url,
        }
    }

    /// Returns the target team's matches in page order.
    #[instrument(skip_all, fields(target_team = self.target_team))]
    pub fn extract(&self, body: &str) -> Result<Vec<MatchStub>> {
        let document = Html::parse_document(body);
        let rounds = self.layout.match_rounds(&document);

        let mut stubs = Vec::new();
        for round in rounds.iter() {
            if let Some(stub) = self.extract_one(round)? {
                stubs.push(stub);
            }
        }

        debug!(rounds = rounds.len(), matches = stubs.len(), "parsed listing");
        Ok(stubs)
    }

    fn extract_one(&self, round: &RawMatchRound) -> Result<Option<MatchStub>> {
        if !round.team_names.iter().any(|name| name == self.target_team) {
            return Ok(None);
        }

        let link = round
            .detail_link
            .as_deref()
            .ok_or_else(|| ScrapeError::structure("match link is absent from the match round"))?;

        let [home, visitor] = <[String; 2]>::try_from(round.team_names.clone()).map_err(|names| {
            ScrapeError::structure(format!("expected two team names, found {}", names.len()))
        })?;

        let fields = round
            .metadata
            .iter()
            .map(|text| self.metadata.parse(text))
            .collect::<Result<Vec<_>>>()?;

        let mut summary = MatchSummary::new(home, visitor);
        summary.score = round.score.as_deref().map(parse_score).transpose()?;
        for field in fields {
            MetadataParser::apply(&mut summary, field);
        }

        Ok(Some(MatchStub {
            summary,
            detail_url: join_url(self.base_url, link)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Vocabulary;
    use crate::infrastructure::scrapers::fotbal_cz::fixtures::LISTING;
    use crate::infrastructure::FotbalCzLayout;

    fn extract(body: &str, target: &str) -> Result<Vec<MatchStub>> {
        let layout = FotbalCzLayout::new().unwrap();
        let metadata = MetadataParser::new(&Vocabulary::default());
        ListingExtractor::new(&layout, &metadata, target, "https://www.fotbal.cz/").extract(body)
    }

    #[test]
    fn keeps_only_target_team_matches_in_order() {
        let stubs = extract(LISTING, "FC Test").unwrap();

        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0].detail_url, "https://www.fotbal.cz/zapasy/zapas/1001");
        assert_eq!(stubs[1].detail_url, "https://www.fotbal.cz/zapasy/zapas/1003");
        assert_eq!(stubs[0].summary.team_names, ["FC Test", "SK Soupeř"]);
        assert_eq!(stubs[1].summary.team_names, ["FK Hosté", "FC Test"]);
    }

    #[test]
    fn fills_score_and_metadata() {
        let stubs = extract(LISTING, "FC Test").unwrap();
        let home = &stubs[0].summary;

        assert_eq!(home.score, Some(Score(3, 1)));
        assert_eq!(home.date, vec!["12", "8", "2023", "17:00"]);
        assert_eq!(home.referees, vec!["Jan Novák", "Petr Dvořák", "Karel Svoboda"]);
        assert_eq!(home.delegate.as_deref(), Some("Josef Malý"));
        assert_eq!(home.stadium.as_deref(), Some("Stadion u Lesa"));
        assert_eq!(home.spectators.as_deref(), Some("350"));
        assert_eq!(home.extra["Pořadatel"], "TJ Pořadatel");

        let away = &stubs[1].summary;
        assert_eq!(away.score, None);
        assert_eq!(away.note.as_deref(), Some("odloženo"));
    }

    #[test]
    fn inline_markup_in_metadata_stays_on_one_line() {
        let body = r#"<ul><li class="MatchRound js-matchRound">
            <a class="MatchRound-match" href="/zapasy/zapas/1"><span class="H7">FC Test</span><span class="H7">SK Other</span></a>
            <p>Hřiště: Stadion <b>u Lesa</b>, Praha</p>
            <p>Pořadatel: <i>TJ</i> Pořadatel</p>
        </li></ul>"#;
        let stubs = extract(body, "FC Test").unwrap();
        let summary = &stubs[0].summary;

        assert_eq!(summary.stadium.as_deref(), Some("Stadion u Lesa , Praha"));
        assert_eq!(summary.extra["Pořadatel"], "TJ Pořadatel");
    }

    #[test]
    fn unknown_team_yields_nothing() {
        assert!(extract(LISTING, "FC Nikdo").unwrap().is_empty());
    }

    #[test]
    fn metadata_without_colon_aborts() {
        let body = r#"<ul><li class="MatchRound js-matchRound">
            <a class="MatchRound-match" href="/zapasy/zapas/1"><span class="H7">FC Test</span><span class="H7">SK Other</span></a>
            <p>Datum 12. 8. 2023</p>
        </li></ul>"#;
        let err = extract(body, "FC Test").unwrap_err();
        assert!(err.is_structure());
    }

    #[test]
    fn missing_link_aborts_only_for_target_rows() {
        let body = r#"<ul>
            <li class="MatchRound js-matchRound"><span class="H7">SK Jiný</span><span class="H7">SK Other</span></li>
            <li class="MatchRound js-matchRound"><span class="H7">FC Test</span><span class="H7">SK Other</span></li>
        </ul>"#;
        let err = extract(body, "FC Test").unwrap_err();
        assert!(matches!(err, ScrapeError::Structure { .. }));
    }

    #[test]
    fn score_parsing() {
        assert_eq!(parse_score("2:0").unwrap(), Score(2, 0));
        assert_eq!(parse_score(" 10 : 3 ").unwrap(), Score(10, 3));
        assert!(parse_score("2-0").unwrap_err().is_structure());
        assert!(parse_score("a:0").unwrap_err().is_structure());
    }
}
