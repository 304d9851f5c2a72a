use chrono::NaiveDate;
use serde::Serialize;

/// One team's view of one game. Every [`Game`](super::game::Game) yields two of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamGame {
    pub date: NaiveDate,
    #[serde(rename = "start_(et)")]
    pub start_et: String,
    pub team: String,
    pub opponent: String,
    pub is_home: bool,
    pub points_scored: Option<u32>,
    pub points_allowed: Option<u32>,
    /// 1 for a win, 0 otherwise; absent while either score is unknown.
    pub won: Option<u8>,
    pub arena: String,
}
