use crate::config::cli::Args;
use crate::error::{Result, ScrapeError};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSection {
    #[serde(default)]
    pub obey_robots_txt: bool,
    pub target_team: String,
    pub base_url: String,
    pub central_url: String,
    #[serde(default)]
    pub cookie_php_session: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    #[serde(default = "default_true")]
    pub scrape_data: bool,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self { scrape_data: true }
    }
}

fn default_true() -> bool {
    true
}

/// Site-specific wording the extractors key on. Defaults match the Czech
/// labels used by fotbal.cz.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub date: String,
    pub match_number: String,
    pub referees: String,
    pub delegate: String,
    pub stadium: String,
    pub spectators: String,
    pub note: String,
    pub captain_marker: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            date: "Datum".into(),
            match_number: "Číslo utkání".into(),
            referees: "Rozhodčí".into(),
            delegate: "Delegát".into(),
            stadium: "Hřiště".into(),
            spectators: "Diváků".into(),
            note: "Poznámka".into(),
            captain_marker: "[K]".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    pub scraper: ScraperSection,
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

impl ScraperConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScrapeError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.scraper.target_team.trim().is_empty() {
            return Err(ScrapeError::Config("scraper.target_team is empty".into()));
        }
        if self.scraper.base_url.trim().is_empty() {
            return Err(ScrapeError::Config("scraper.base_url is empty".into()));
        }
        if self.scraper.central_url.trim().is_empty() {
            return Err(ScrapeError::Config("scraper.central_url is empty".into()));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the file values.
    pub fn apply_overrides(&mut self, args: &Args) {
        if let Some(team) = &args.target_team {
            self.scraper.target_team = team.clone();
        }
        if let Some(cookie) = &args.cookie {
            self.scraper.cookie_php_session = cookie.clone();
        }
    }
}

pub struct Config {
    pub args: Args,
    pub scraper_config: ScraperConfig,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let mut scraper_config = ScraperConfig::load(&args.config_file)?;
        scraper_config.apply_overrides(&args);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScrapeError::Config(format!("cannot build http client: {e}")))?;

        info!(
            target_team = %scraper_config.scraper.target_team,
            "Loaded configuration from {}",
            args.config_file.display()
        );

        Ok(Self {
            args,
            scraper_config,
            http_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    const CONFIG: &str = r#"{
        "scraper": {
            "obey_robots_txt": true,
            "target_team": "FC Test",
            "base_url": "https://www.fotbal.cz",
            "central_url": "https://www.fotbal.cz/souteze/club/club/1",
            "cookie_php_session": "PHPSESSID=abc"
        },
        "project": { "scrape_data": false }
    }"#;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_file_with_default_vocabulary() {
        let file = write_config(CONFIG);
        let config = ScraperConfig::load(file.path()).unwrap();

        assert!(config.scraper.obey_robots_txt);
        assert_eq!(config.scraper.target_team, "FC Test");
        assert!(!config.project.scrape_data);
        assert_eq!(config.vocabulary.date, "Datum");
        assert_eq!(config.vocabulary.captain_marker, "[K]");
    }

    #[test]
    fn partial_vocabulary_keeps_other_defaults() {
        let file = write_config(
            r#"{
                "scraper": {
                    "target_team": "FC Test",
                    "base_url": "https://example.org",
                    "central_url": "https://example.org/list"
                },
                "vocabulary": { "captain_marker": "(C)" }
            }"#,
        );
        let config = ScraperConfig::load(file.path()).unwrap();

        assert!(config.project.scrape_data);
        assert!(!config.scraper.obey_robots_txt);
        assert_eq!(config.vocabulary.captain_marker, "(C)");
        assert_eq!(config.vocabulary.referees, "Rozhodčí");
    }

    #[test]
    fn empty_target_team_is_rejected() {
        let file = write_config(
            r#"{
                "scraper": {
                    "target_team": " ",
                    "base_url": "https://example.org",
                    "central_url": "https://example.org/list"
                }
            }"#,
        );
        let err = ScraperConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));
    }

    #[test]
    fn cli_overrides_win() {
        let file = write_config(CONFIG);
        let mut config = ScraperConfig::load(file.path()).unwrap();
        let args = Args::parse_from([
            "facr_scraper",
            "--target-team",
            "SK Other",
            "--cookie",
            "PHPSESSID=xyz",
        ]);
        config.apply_overrides(&args);

        assert_eq!(config.scraper.target_team, "SK Other");
        assert_eq!(config.scraper.cookie_php_session, "PHPSESSID=xyz");
    }
}
