use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::{Result, ScrapeError};
use crate::model::game::{coerce_attendance, coerce_points};
use crate::model::{Game, TeamGame};

const DATE_FORMATS: [&str; 3] = ["%a, %b %d, %Y", "%Y-%m-%d", "%b %d, %Y"];

/// A season-file row read through normalized column names.
#[derive(Debug, Deserialize)]
struct StandardRow {
    date: String,
    #[serde(rename = "start_(et)")]
    start_et: String,
    visitor_team: String,
    visitor_pts: Option<String>,
    home_team: String,
    home_pts: Option<String>,
    #[serde(default)]
    overtime: String,
    #[serde(default)]
    attendance: String,
    #[serde(default)]
    game_duration: String,
    #[serde(default)]
    arena: String,
}

/// `start (ET)` becomes `start_(et)`.
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn standardize_row(row: StandardRow, source: &Path) -> Result<Game> {
    let date = parse_date(&row.date).ok_or_else(|| {
        ScrapeError::Parse(format!("unrecognized date '{}' in {}", row.date, source.display()))
    })?;
    Ok(Game {
        date,
        start_et: row.start_et,
        visitor_team: row.visitor_team,
        visitor_pts: row.visitor_pts.as_deref().and_then(coerce_points),
        home_team: row.home_team,
        home_pts: row.home_pts.as_deref().and_then(coerce_points),
        overtime: row.overtime,
        attendance: coerce_attendance(&row.attendance),
        game_duration: row.game_duration,
        arena: row.arena,
    })
}

/// Read one season file with normalized headers and coerced types.
pub fn load_games(path: &Path) -> Result<Vec<Game>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: csv::StringRecord = reader.headers()?.iter().map(normalize_column).collect();
    reader.set_headers(headers);

    let mut games = Vec::new();
    for row in reader.deserialize::<StandardRow>() {
        games.push(standardize_row(row?, path)?);
    }
    debug!(path = %path.display(), games = games.len(), "Loaded season file");
    Ok(games)
}

fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Every game from every season file in `dir`, files taken in name order.
pub fn load_all_games(dir: &Path) -> Result<Vec<Game>> {
    let mut games = Vec::new();
    for path in csv_files(dir)? {
        games.extend(load_games(&path)?);
    }
    Ok(games)
}

fn outcome(scored: Option<u32>, allowed: Option<u32>) -> Option<u8> {
    match (scored, allowed) {
        (Some(s), Some(a)) => Some(u8::from(s > a)),
        _ => None,
    }
}

fn project(game: &Game, home: bool) -> TeamGame {
    let (team, opponent, scored, allowed) = if home {
        (&game.home_team, &game.visitor_team, game.home_pts, game.visitor_pts)
    } else {
        (&game.visitor_team, &game.home_team, game.visitor_pts, game.home_pts)
    };
    TeamGame {
        date: game.date,
        start_et: game.start_et.clone(),
        team: team.clone(),
        opponent: opponent.clone(),
        is_home: home,
        points_scored: scored,
        points_allowed: allowed,
        won: outcome(scored, allowed),
        arena: game.arena.clone(),
    }
}

/// Two rows per game: all home-perspective rows, then all visitor-perspective rows.
pub fn to_long(games: &[Game]) -> Vec<TeamGame> {
    games
        .iter()
        .map(|g| project(g, true))
        .chain(games.iter().map(|g| project(g, false)))
        .collect()
}

/// `team`'s own row for `game`: the home view when it hosted, otherwise the visitor view.
pub fn team_view(game: &Game, team: &str) -> TeamGame {
    project(game, game.home_team == team)
}

#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn load_and_standardize(dir: &Path) -> Result<Vec<TeamGame>> {
    let games = load_all_games(dir)?;
    let long = to_long(&games);
    info!(games = games.len(), rows = long.len(), "Reshaped season files");
    Ok(long)
}

/// Up to `n` games `team` played strictly before `before`, most recent first.
pub fn last_n_games<'a>(games: &'a [Game], team: &str, before: NaiveDate, n: usize) -> Vec<&'a Game> {
    let mut past: Vec<&Game> = games.iter().filter(|g| g.involves(team) && g.date < before).collect();
    past.sort_by(|a, b| b.date.cmp(&a.date));
    past.truncate(n);
    past
}

/// `team`'s last `n` games before `before` as its own rows, most recent first.
pub fn recent_form(games: &[Game], team: &str, before: NaiveDate, n: usize) -> Vec<TeamGame> {
    last_n_games(games, team, before, n)
        .into_iter()
        .map(|game| team_view(game, team))
        .collect()
}

pub fn write_long_csv<W: Write>(writer: W, rows: &[TeamGame]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
