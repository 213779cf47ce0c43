//! Leaderboard aggregation
//!
//! Composes the roster, calendar and history fetchers into the two reports
//! this tool produces: the current overall standings and the month-scoped
//! "Manager of the Month" leaderboard.

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::data_fetcher::api::{
    fetch_current_standings, fetch_league_roster, points_for, resolve_gameweeks,
};
use crate::data_fetcher::models::{GameweekFilter, Manager, StandingEntry};
use crate::error::AppError;

/// Returns the top `limit` entries of the league's current overall standings.
///
/// Rank and score come from the upstream source; this only truncates.
/// A `limit` of 0 returns an empty list, a `limit` beyond the roster size the
/// whole roster.
#[instrument(skip(client, config))]
pub async fn current_standings(
    client: &Client,
    config: &Config,
    league_id: u64,
    limit: usize,
) -> Result<Vec<StandingEntry>, AppError> {
    let mut entries = fetch_current_standings(client, config, league_id).await?;
    entries.truncate(limit);
    Ok(entries)
}

/// Builds the month-scoped leaderboard for a league.
///
/// Fetches the roster once, resolves the gameweeks whose deadlines fall in
/// (month, year) once, then fetches each manager's history in sequence and
/// sums their points over the resolved set. Managers are sorted by score
/// descending with dense 1-based ranks; ties keep roster order through the
/// stable sort. A month with no gameweeks is valid and scores everyone 0.
#[instrument(skip(client, config))]
pub async fn monthly_standings(
    client: &Client,
    config: &Config,
    league_id: u64,
    month: u32,
    year: i32,
    limit: usize,
) -> Result<Vec<StandingEntry>, AppError> {
    let roster = fetch_league_roster(client, config, league_id).await?;
    let gameweeks = resolve_gameweeks(client, config, month, year).await?;

    if gameweeks.is_empty() {
        info!("No gameweek deadlines in {month}/{year}; every score will be 0");
    }

    let filter = GameweekFilter::Gameweeks(gameweeks);
    let mut scored = Vec::with_capacity(roster.len());
    for manager in roster {
        let score = points_for(client, config, manager.id, &filter).await?;
        scored.push((manager, score));
    }

    let mut entries = rank_by_score(scored);
    entries.truncate(limit);
    Ok(entries)
}

/// Sorts scored managers descending and assigns dense 1-based ranks.
///
/// The sort is stable, so equal scores keep the relative order the managers
/// arrived in; there is no further tie-break rule.
pub fn rank_by_score(mut scored: Vec<(Manager, i64)>) -> Vec<StandingEntry> {
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .enumerate()
        .map(|(index, (manager, score))| StandingEntry {
            rank: (index + 1) as u32,
            manager,
            score,
        })
        .collect()
}
