use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to scraper configuration file
    #[arg(long, default_value = "scraper_config.json")]
    pub config_file: PathBuf,

    /// File the scraped matches are written to (one JSON object per line)
    #[arg(long, default_value = "matches.json")]
    pub output: PathBuf,

    /// Team to collect matches for, overrides the config file
    #[arg(long)]
    pub target_team: Option<String>,

    /// Session cookie sent with every request, overrides the config file
    #[arg(long, env = "FACR_COOKIE")]
    pub cookie: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
