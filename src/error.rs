use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport-level failure (DNS, TLS, timeout, ...).
    #[error("http request failed for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The page markup no longer matches what the extractors expect.
    #[error("page structure changed: {context}")]
    Structure { context: String },

    #[error("page structure changed: {context} is not a number ({value:?})")]
    Number { context: &'static str, value: String },

    #[error("Selector error: {0}")]
    Selector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl ScrapeError {
    pub fn structure(context: impl Into<String>) -> Self {
        Self::Structure {
            context: context.into(),
        }
    }

    /// True for the FetchError class (transport failure or non-success status).
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::UnexpectedStatus { .. })
    }

    /// True for the StructureError class.
    pub fn is_structure(&self) -> bool {
        matches!(self, Self::Structure { .. } | Self::Number { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Parses trimmed page text as an integer, naming the field on failure.
pub fn parse_number<T: std::str::FromStr>(context: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ScrapeError::Number {
        context,
        value: value.to_string(),
    })
}
