use super::{
    first_text, lines_of, selector, text_of, RawMatchRound, RawRosterRow, RawSubstitution,
    RawTeamSection, RawTimelineEntry, SiteLayout,
};
use crate::domain::TeamSide;
use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// Markup of the fotbal.cz results portal.
pub struct FotbalCzLayout {
    round: Selector,
    team_name: Selector,
    match_link: Selector,
    score: Selector,
    metadata: Selector,
    half_time: Selector,
    timeline_home: Selector,
    timeline_visitor: Selector,
    timeline_minute: Selector,
    timeline_player: Selector,
    section: Selector,
    section_heading: Selector,
    table: Selector,
    body: Selector,
    row: Selector,
    cell: Selector,
    marker: Selector,
}

impl FotbalCzLayout {
    pub fn new() -> Result<Self> {
        Ok(Self {
            round: selector("li.MatchRound.js-matchRound")?,
            team_name: selector("span.H7")?,
            match_link: selector("a.MatchRound-match")?,
            score: selector("strong.H4.u-c-tertiary")?,
            metadata: selector("p")?,
            half_time: selector("p.H8.u-c-grey--100")?,
            timeline_home: selector("li.MatchTimeline-item.MatchTimeline-item--home")?,
            timeline_visitor: selector("li.MatchTimeline-item.MatchTimeline-item--visitor")?,
            timeline_minute: selector("strong")?,
            timeline_player: selector("p")?,
            section: selector("section.u-mt-24.u-overflow-x-auto")?,
            section_heading: selector("h2.H7")?,
            table: selector("table")?,
            body: selector("tbody")?,
            row: selector("tr")?,
            cell: selector("td")?,
            marker: selector("span")?,
        })
    }

    fn match_round(&self, element: ElementRef) -> RawMatchRound {
        RawMatchRound {
            team_names: element.select(&self.team_name).map(text_of).collect(),
            detail_link: element
                .select(&self.match_link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string),
            score: first_text(element, &self.score),
            metadata: element.select(&self.metadata).map(lines_of).collect(),
        }
    }

    fn roster_rows(&self, section: ElementRef) -> Option<Vec<RawRosterRow>> {
        let table = section.select(&self.table).next()?;
        let body = table.select(&self.body).next()?;
        Some(body.select(&self.row).map(|row| self.roster_row(row)).collect())
    }

    fn roster_row(&self, row: ElementRef) -> RawRosterRow {
        let cells: Vec<ElementRef> = row.select(&self.cell).collect();
        let substitution = cells
            .get(5)
            .and_then(|cell| cell.select(&self.marker).next())
            .map(|marker| RawSubstitution {
                minute: text_of(marker),
                replaced_by: marker.value().attr("title").map(str::to_string),
            });

        RawRosterRow {
            cells: cells.into_iter().map(text_of).collect(),
            substitution,
        }
    }
}

impl SiteLayout for FotbalCzLayout {
    fn match_rounds(&self, document: &Html) -> Vec<RawMatchRound> {
        document
            .select(&self.round)
            .map(|element| self.match_round(element))
            .collect()
    }

    fn half_time_score(&self, document: &Html) -> Option<String> {
        document.select(&self.half_time).next().map(text_of)
    }

    fn timeline(&self, document: &Html, side: TeamSide) -> Result<Vec<RawTimelineEntry>> {
        let entries = match side {
            TeamSide::Home => &self.timeline_home,
            TeamSide::Visitor => &self.timeline_visitor,
        };

        document
            .select(entries)
            .map(|entry| {
                let minute = first_text(entry, &self.timeline_minute)
                    .ok_or_else(|| ScrapeError::structure("timeline entry without a minute"))?;
                let player = first_text(entry, &self.timeline_player)
                    .ok_or_else(|| ScrapeError::structure("timeline entry without a player"))?;
                Ok(RawTimelineEntry { minute, player })
            })
            .collect()
    }

    fn team_sections(&self, document: &Html) -> Vec<RawTeamSection> {
        document
            .select(&self.section)
            .map(|section| RawTeamSection {
                heading: first_text(section, &self.section_heading).unwrap_or_default(),
                rows: self.roster_rows(section),
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn reads_match_rounds_in_page_order() {
        let layout = FotbalCzLayout::new().unwrap();
        let rounds = layout.match_rounds(&Html::parse_document(LISTING));

        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0].team_names, vec!["FC Test", "SK Soupeř"]);
        assert_eq!(rounds[0].detail_link.as_deref(), Some("/zapasy/zapas/1001"));
        assert_eq!(rounds[0].score.as_deref(), Some("3:1"));
        assert_eq!(rounds[0].metadata.len(), 7);
        assert!(rounds[0].metadata[0].starts_with("Datum:"));
        assert_eq!(rounds[2].score, None);
    }

    #[test]
    fn reads_half_time_and_side_timeline() {
        let layout = FotbalCzLayout::new().unwrap();
        let document = Html::parse_document(DETAIL_HOME);

        assert_eq!(layout.half_time_score(&document).as_deref(), Some("(1:0)"));

        let home = layout.timeline(&document, TeamSide::Home).unwrap();
        assert_eq!(home.len(), 3);
        assert_eq!(home[0].minute, "12.");
        assert_eq!(home[0].player, "Jan Novák");

        let visitor = layout.timeline(&document, TeamSide::Visitor).unwrap();
        assert_eq!(visitor.len(), 1);
        assert_eq!(visitor[0].player, "Tomáš Cizí");
    }

    #[test]
    fn timeline_entry_without_minute_is_structural() {
        let layout = FotbalCzLayout::new().unwrap();
        let document = Html::parse_document(
            r#"<ul><li class="MatchTimeline-item MatchTimeline-item--home"><p>Jan Novák</p></li></ul>"#,
        );
        let err = layout.timeline(&document, TeamSide::Home).unwrap_err();
        assert!(err.is_structure());
    }

    #[test]
    fn reads_team_sections_with_body_rows_only() {
        let layout = FotbalCzLayout::new().unwrap();
        let sections = layout.team_sections(&Html::parse_document(DETAIL_HOME));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].heading, "FC Test");

        let rows = sections[1].rows.as_ref().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].cells[2], "Jan Novák [K]");
        assert_eq!(
            rows[1].substitution,
            Some(RawSubstitution {
                minute: "80".to_string(),
                replaced_by: Some("Ondřej Náhradník".to_string()),
            })
        );
        assert_eq!(rows[0].substitution, None);
    }

    #[test]
    fn section_without_table_has_no_rows() {
        let layout = FotbalCzLayout::new().unwrap();
        let sections = layout.team_sections(&Html::parse_document(
            r#"<section class="u-mt-24 u-overflow-x-auto"><h2 class="H7">FC Test</h2></section>"#,
        ));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].rows, None);
    }
}
