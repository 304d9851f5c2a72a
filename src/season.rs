use std::fs;

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::PageSource;
use crate::parser;
use crate::prompt::Confirm;
use crate::store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum SeasonOutcome {
    /// The file existed and the update was declined.
    Skipped,
    /// `rows` is the size of the season file after the last month was merged.
    Updated { months: usize, rows: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonReport {
    pub year: u16,
    pub outcome: SeasonOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seasons: Vec<SeasonReport>,
}

/// Walk every configured season in order. The first failure ends the run.
#[instrument(skip_all)]
pub fn run<S, C>(config: &Config, source: &S, confirm: &mut C) -> Result<RunSummary>
where
    S: PageSource,
    C: Confirm,
{
    fs::create_dir_all(&config.data_dir)?;

    let mut summary = RunSummary::default();
    for &year in &config.seasons {
        let outcome = scrape_season(config, year, source, confirm)?;
        summary.seasons.push(SeasonReport { year, outcome });
    }
    info!(seasons = summary.seasons.len(), "Run complete");
    Ok(summary)
}

/// Fetch one season's month pages and merge each into the season file as it arrives.
#[instrument(level = "info", skip(config, source, confirm))]
pub fn scrape_season<S, C>(config: &Config, year: u16, source: &S, confirm: &mut C) -> Result<SeasonOutcome>
where
    S: PageSource,
    C: Confirm,
{
    let path = config.season_path(year);
    if path.exists() {
        let question = format!("We already have data for the {year} NBA season. Would you like to update it?");
        if !confirm.confirm(&question, config.confirm_default)? {
            info!(path = %path.display(), "Keeping existing season file");
            return Ok(SeasonOutcome::Skipped);
        }
    }

    let season_url = config.season_url(year)?;
    let base_page = source.fetch(season_url.as_str())?;
    let month_urls = parser::extract_month_links(&base_page, &season_url)?;
    info!(months = month_urls.len(), "Found month pages");

    let mut rows = 0;
    for url in &month_urls {
        let page = source.fetch(url)?;
        let games = parser::extract_games(&page)?;
        info!(url = %url, games = games.len(), "Parsed month");
        rows = store::persist(&path, games)?;
    }

    Ok(SeasonOutcome::Updated { months: month_urls.len(), rows })
}
