//! Data models for the FPL API responses and the domain types built from them.
//!
//! Upstream payloads carry far more fields than a leaderboard needs; each
//! struct here names exactly the fields this application consumes and serde
//! drops the rest during deserialization.

use serde::{Deserialize, Serialize};

/// Gameweek identifier: positive, 1-based, sequential, stable for a season.
pub type GameweekId = u32;

/// League metadata embedded in the standings response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub name: String,
}

/// One member row of the standings response.
/// `entry` is the manager id used by the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStanding {
    pub rank: u32,
    pub player_name: String,
    pub entry_name: String,
    pub entry: u64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsPage {
    pub results: Vec<RawStanding>,
}

/// Model for `GET /leagues-classic/{league_id}/standings/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub league: LeagueInfo,
    pub standings: StandingsPage,
}

/// One gameweek of a manager's history. The upstream calls the gameweek id
/// `event`; `points` is the score for that gameweek alone and `total_points`
/// the cumulative season total after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameweekRecord {
    #[serde(rename = "event")]
    pub gameweek: GameweekId,
    pub points: i64,
    pub total_points: i64,
}

/// Model for `GET /entry/{manager_id}/history/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub current: Vec<GameweekRecord>,
}

/// One season event of the bootstrap payload. Index position + 1 in the
/// events array is the gameweek id; only the deadline matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapEvent {
    pub deadline_time: String,
}

/// Model for `GET /bootstrap-static/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapResponse {
    pub events: Vec<BootstrapEvent>,
}

/// A league member with the league's display name denormalized onto each
/// entry so downstream rendering never needs a second lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    pub id: u64,
    pub display_name: String,
    pub team_name: String,
    pub league_name: String,
}

/// A ranked leaderboard row. Rank is 1-based and dense, assigned purely from
/// descending score order at report-generation time; ties keep their relative
/// order through the stable sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingEntry {
    pub rank: u32,
    pub manager: Manager,
    pub score: i64,
}

/// Scope of a points query. Replaces the shared default-list sentinel of the
/// kind `gameweek=[0]` with an explicit tagged variant: `Overall` means the
/// manager's current cumulative total, `Gameweeks` a sum over the given ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameweekFilter {
    Overall,
    Gameweeks(Vec<GameweekId>),
}
