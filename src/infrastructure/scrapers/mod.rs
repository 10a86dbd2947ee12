use crate::domain::TeamSide;
use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

pub(crate) mod fotbal_cz;

/// One match row of the listing page, as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMatchRound {
    pub team_names: Vec<String>,
    pub detail_link: Option<String>,
    pub score: Option<String>,
    /// `label: value` paragraphs.
    pub metadata: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawTimelineEntry {
    pub minute: String,
    pub player: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawSubstitution {
    pub minute: String,
    pub replaced_by: Option<String>,
}

/// Cells of one roster row in page order: number, position, name,
/// yellow cards, red card, substitution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRosterRow {
    pub cells: Vec<String>,
    pub substitution: Option<RawSubstitution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawTeamSection {
    pub heading: String,
    /// `None` when the section has no roster table.
    pub rows: Option<Vec<RawRosterRow>>,
}

/// Knows where things live in the portal's markup. Everything downstream
/// works on the raw text this hands back.
pub trait SiteLayout {
    fn match_rounds(&self, document: &Html) -> Vec<RawMatchRound>;

    fn half_time_score(&self, document: &Html) -> Option<String>;

    fn timeline(&self, document: &Html, side: TeamSide) -> Result<Vec<RawTimelineEntry>>;

    fn team_sections(&self, document: &Html) -> Vec<RawTeamSection>;
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

/// Text of `element` with every text node trimmed and the pieces concatenated.
pub(crate) fn text_of(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

/// Like [`text_of`] but keeps a line break between non-empty text nodes.
pub(crate) fn lines_of(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn first_text(element: ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(text_of)
}
