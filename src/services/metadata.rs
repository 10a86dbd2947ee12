use crate::config::Vocabulary;
use crate::domain::MatchSummary;
use crate::error::{Result, ScrapeError};
use std::collections::HashMap;

/// Canonical metadata fields of a listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    Date,
    MatchNumber,
    Referees,
    Delegate,
    Stadium,
    Spectators,
    Note,
}

/// How the value of a field is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Date components, e.g. `["12", "8", "2023", "17:00"]`.
    Tokens,
    /// One name per line.
    Names,
    Text,
}

impl MetaField {
    pub fn kind(self) -> FieldKind {
        match self {
            MetaField::Date => FieldKind::Tokens,
            MetaField::Referees => FieldKind::Names,
            MetaField::MatchNumber
            | MetaField::Delegate
            | MetaField::Stadium
            | MetaField::Spectators
            | MetaField::Note => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Tokens(Vec<String>),
    Names(Vec<String>),
    Text(String),
}

impl FieldValue {
    fn parse(kind: FieldKind, value: &str) -> Self {
        match kind {
            FieldKind::Tokens => FieldValue::Tokens(
                value
                    .replace('\u{a0}', " ")
                    .replace('.', "")
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
            ),
            FieldKind::Names => FieldValue::Names(
                value
                    .replace(['\t', '-', ','], "")
                    .split('\n')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            FieldKind::Text => FieldValue::Text(collapse_whitespace(value)),
        }
    }

    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Tokens(items) | FieldValue::Names(items) => items.join(" "),
        }
    }

    fn into_list(self) -> Vec<String> {
        match self {
            FieldValue::Tokens(items) | FieldValue::Names(items) => items,
            FieldValue::Text(text) => vec![text],
        }
    }
}

/// Inline markup splits a value into several text nodes; join them with single spaces.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedField {
    Known(MetaField, FieldValue),
    /// Label outside the vocabulary, kept as shown on the page.
    Unknown { label: String, value: String },
}

/// Turns `label: value` paragraphs into typed fields.
#[derive(Debug, Clone)]
pub struct MetadataParser {
    labels: HashMap<String, MetaField>,
}

impl MetadataParser {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let labels = [
            (&vocabulary.date, MetaField::Date),
            (&vocabulary.match_number, MetaField::MatchNumber),
            (&vocabulary.referees, MetaField::Referees),
            (&vocabulary.delegate, MetaField::Delegate),
            (&vocabulary.stadium, MetaField::Stadium),
            (&vocabulary.spectators, MetaField::Spectators),
            (&vocabulary.note, MetaField::Note),
        ]
        .into_iter()
        .map(|(label, field)| (label.trim().to_string(), field))
        .collect();

        Self { labels }
    }

    pub fn field(&self, label: &str) -> Option<MetaField> {
        self.labels.get(label).copied()
    }

    /// Splits on the first colon. A paragraph without one means the listing
    /// markup changed.
    pub fn parse(&self, text: &str) -> Result<ParsedField> {
        let (label, value) = text.split_once(':').ok_or_else(|| {
            ScrapeError::structure(format!("metadata paragraph without a label: {text:?}"))
        })?;
        let label = label.trim();
        let value = value.trim();

        Ok(match self.field(label) {
            Some(field) => ParsedField::Known(field, FieldValue::parse(field.kind(), value)),
            None => ParsedField::Unknown {
                label: label.to_string(),
                value: collapse_whitespace(value),
            },
        })
    }

    pub fn apply(summary: &mut MatchSummary, parsed: ParsedField) {
        match parsed {
            ParsedField::Known(field, value) => match field {
                MetaField::Date => summary.date = value.into_list(),
                MetaField::Referees => summary.referees = value.into_list(),
                MetaField::MatchNumber => summary.match_number = Some(value.into_text()),
                MetaField::Delegate => summary.delegate = Some(value.into_text()),
                MetaField::Stadium => summary.stadium = Some(value.into_text()),
                MetaField::Spectators => summary.spectators = Some(value.into_text()),
                MetaField::Note => summary.note = Some(value.into_text()),
            },
            ParsedField::Unknown { label, value } => {
                summary.extra.insert(label, value);
            }
        }
    }
}
