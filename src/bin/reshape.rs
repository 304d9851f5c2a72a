use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use nba_schedule_scraper::reshape::{self, recent_form, write_long_csv};
use nba_schedule_scraper::{Config, init_tracing};
use tracing::{error, info};

type Error = Box<dyn std::error::Error + Send + Sync>;

/// Print the season files as one CSV row per team per game.
#[derive(Debug, Parser)]
#[command(name = "reshape")]
struct Args {
    /// Directory holding the season files. Defaults to the configured data directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Only show this team's most recent games.
    #[arg(long)]
    team: Option<String>,

    /// With --team, only games strictly before this date (YYYY-MM-DD).
    #[arg(long, requires = "team")]
    before: Option<NaiveDate>,

    /// With --team, how many games to show.
    #[arg(long, default_value_t = 5, requires = "team")]
    last: usize,
}

fn main() -> Result<(), Error> {
    init_tracing();
    let args = Args::parse();

    let dir = match args.data_dir {
        Some(dir) => dir,
        None => Config::load()?.data_dir,
    };

    let result = match &args.team {
        None => reshape::load_and_standardize(&dir),
        Some(team) => reshape::load_all_games(&dir).map(|games| {
            let before = args.before.unwrap_or(NaiveDate::MAX);
            let recent = recent_form(&games, team, before, args.last);
            info!(team = %team, games = recent.len(), "Selected recent games");
            recent
        }),
    };

    match result {
        Ok(rows) => {
            write_long_csv(io::stdout().lock(), &rows)?;
            Ok(())
        }
        Err(e) => {
            error!(error = %e, dir = %dir.display(), "Reshape failed");
            Err(e.into())
        }
    }
}
