use crate::domain::PlayerRecord;
use crate::error::{parse_number, Result, ScrapeError};
use crate::infrastructure::RawRosterRow;

const NUMBER: usize = 0;
const POSITION: usize = 1;
const NAME: usize = 2;
const YELLOW_CARDS: usize = 3;
const RED_CARD: usize = 4;
const SUBSTITUTION: usize = 5;

fn cell<'a>(row: &'a RawRosterRow, index: usize, what: &str) -> Result<&'a str> {
    row.cells
        .get(index)
        .map(|c| c.trim())
        .ok_or_else(|| ScrapeError::structure(format!("roster row without a {what} cell")))
}

/// Parses one roster row. Goals are left empty; they come from the timeline.
pub fn parse_player(row: &RawRosterRow, captain_marker: &str) -> Result<PlayerRecord> {
    let number = parse_number("jersey number", cell(row, NUMBER, "number")?)?;
    let position = cell(row, POSITION, "position")?.to_string();

    let raw_name = cell(row, NAME, "name")?;
    let captain = !captain_marker.is_empty() && raw_name.contains(captain_marker);
    let name = if captain {
        raw_name.replace(captain_marker, "").trim().to_string()
    } else {
        raw_name.to_string()
    };

    let yellow_cards = cell(row, YELLOW_CARDS, "yellow card")?
        .split(',')
        .map(str::trim)
        .filter(|minute| !minute.is_empty())
        .map(|minute| parse_number("yellow card minute", minute))
        .collect::<Result<Vec<u32>>>()?;

    let red_card = match cell(row, RED_CARD, "red card")? {
        "" => -1,
        minute => parse_number("red card minute", minute)?,
    };

    cell(row, SUBSTITUTION, "substitution")?;
    let (substitution_minute, substitution_player) = match &row.substitution {
        Some(sub) => (
            parse_number("substitution minute", &sub.minute)?,
            sub.replaced_by.clone().unwrap_or_default(),
        ),
        None => (-1, String::new()),
    };

    Ok(PlayerRecord {
        number,
        position,
        name,
        captain,
        red_card,
        yellow_cards,
        substitution_minute,
        substitution_player,
        goals: Vec::new(),
    })
}
