use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::error::{Result, ScrapeError};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "NBA_SCRAPER_CONFIG";
/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "NBA_DATA_DIR";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

/// Immutable settings for one run, handed to the fetcher and the season loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme and host that month links and season pages hang off.
    pub origin: String,
    /// Seasons to walk, in order. A season is named by the year it ends in.
    pub seasons: Vec<u16>,
    pub data_dir: PathBuf,
    pub user_agent: String,
    /// Post-request pause is drawn uniformly from `min..=max` seconds.
    pub min_delay_secs: u64,
    pub max_delay_secs: u64,
    pub timeout_secs: u64,
    /// Answer used when the update prompt gets an empty reply or no input at all.
    pub confirm_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: "https://www.basketball-reference.com".to_string(),
            seasons: (2017..=2020).rev().collect(),
            data_dir: PathBuf::from("NBA").join("data"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_delay_secs: 10,
            max_delay_secs: 30,
            timeout_secs: 60,
            confirm_default: false,
        }
    }
}

impl Config {
    /// Defaults, overlaid by the JSON file in `NBA_SCRAPER_CONFIG` and then `NBA_DATA_DIR`.
    pub fn load() -> Result<Self> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        config.validate()?;
        info!(data_dir = %config.data_dir.display(), seasons = ?config.seasons, "Loaded configuration");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Missing fields fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ScrapeError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.seasons.is_empty() {
            return Err(ScrapeError::Config("no seasons configured".to_string()));
        }
        if self.min_delay_secs > self.max_delay_secs {
            return Err(ScrapeError::Config(format!(
                "min_delay_secs ({}) is greater than max_delay_secs ({})",
                self.min_delay_secs, self.max_delay_secs
            )));
        }
        let origin = self.origin_url()?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(ScrapeError::Config(format!("origin must be an http(s) url: {}", self.origin)));
        }
        Ok(())
    }

    pub fn season_path(&self, year: u16) -> PathBuf {
        self.data_dir.join(format!("NBA_{year}_games.csv"))
    }

    pub fn origin_url(&self) -> Result<Url> {
        Url::parse(&self.origin).map_err(|e| ScrapeError::Config(format!("invalid origin '{}': {e}", self.origin)))
    }

    pub fn season_url(&self, year: u16) -> Result<Url> {
        self.origin_url()?
            .join(&format!("/leagues/NBA_{year}_games.html"))
            .map_err(|e| ScrapeError::Config(e.to_string()))
    }
}
