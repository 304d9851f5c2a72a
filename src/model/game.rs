use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of a season file, as scraped from a schedule table.
///
/// Text fields are kept exactly as the page shows them; only the point columns
/// are coerced, since unplayed games carry an empty cell there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: String,
    #[serde(rename = "start (ET)")]
    pub start_et: String,
    pub visitor_team: String,
    #[serde(deserialize_with = "lenient_points")]
    pub visitor_pts: Option<u32>,
    pub home_team: String,
    #[serde(deserialize_with = "lenient_points")]
    pub home_pts: Option<u32>,
    pub overtime: String,
    pub attendance: String,
    pub game_duration: String,
    pub arena: String,
}

impl GameRecord {
    /// (date, home_team, visitor_team); unique within a season file.
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.date, &self.home_team, &self.visitor_team)
    }
}

/// A season-file row after type coercion, ready to be pivoted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub date: NaiveDate,
    pub start_et: String,
    pub visitor_team: String,
    pub visitor_pts: Option<u32>,
    pub home_team: String,
    pub home_pts: Option<u32>,
    pub overtime: String,
    pub attendance: Option<u32>,
    pub game_duration: String,
    pub arena: String,
}

impl Game {
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.visitor_team == team
    }
}

/// Parse a points cell. Anything that is not a whole non-negative number is absent.
///
/// Accepts `112.0` as well as `112`, since dataframe tools write nullable
/// integer columns as floats.
pub fn coerce_points(raw: &str) -> Option<u32> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<u32>() {
        return Some(n);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Some(f as u32),
        _ => None,
    }
}

/// Attendance is printed with thousands separators, e.g. `18,624`.
pub fn coerce_attendance(raw: &str) -> Option<u32> {
    let stripped: String = raw.chars().filter(|c| *c != ',').collect();
    coerce_points(&stripped)
}

fn lenient_points<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(coerce_points))
}
