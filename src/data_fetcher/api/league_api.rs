//! League roster and current standings
//!
//! Both operations read the same standings endpoint. Failures that indicate a
//! bad league id (404, or a body that is not a standings payload) map to
//! `InvalidLeagueId`, the one error the interactive boundary recovers from.

use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch;
use super::urls::build_standings_url;
use crate::config::Config;
use crate::data_fetcher::models::{Manager, RawStanding, StandingEntry, StandingsResponse};
use crate::error::AppError;

/// Fetches the current membership of a classic league.
///
/// Every member is projected onto [`Manager`] with the league's display name
/// attached, so downstream consumers never need the raw payload.
#[instrument(skip(client, config))]
pub async fn fetch_league_roster(
    client: &Client,
    config: &Config,
    league_id: u64,
) -> Result<Vec<Manager>, AppError> {
    let response = fetch_standings_page(client, config, league_id).await?;

    let league_name = response.league.name;
    let roster: Vec<Manager> = response
        .standings
        .results
        .iter()
        .map(|row| project_manager(row, &league_name))
        .collect();

    debug!(
        "Fetched {} manager(s) from league {league_id} ({league_name})",
        roster.len()
    );
    Ok(roster)
}

/// Fetches the current overall standings of a classic league.
///
/// Rank and total come from the upstream source verbatim; no re-ranking
/// happens on this path.
#[instrument(skip(client, config))]
pub async fn fetch_current_standings(
    client: &Client,
    config: &Config,
    league_id: u64,
) -> Result<Vec<StandingEntry>, AppError> {
    let response = fetch_standings_page(client, config, league_id).await?;

    let league_name = response.league.name;
    let entries = response
        .standings
        .results
        .iter()
        .map(|row| StandingEntry {
            rank: row.rank,
            manager: project_manager(row, &league_name),
            score: row.total,
        })
        .collect();

    Ok(entries)
}

async fn fetch_standings_page(
    client: &Client,
    config: &Config,
    league_id: u64,
) -> Result<StandingsResponse, AppError> {
    let url = build_standings_url(&config.api_domain, league_id);

    fetch(client, &url).await.map_err(|e| match e {
        AppError::ApiNotFound { .. }
        | AppError::ApiUnexpectedStructure { .. }
        | AppError::ApiMalformedJson { .. }
        | AppError::ApiNoData { .. } => AppError::invalid_league_id(league_id, &url),
        other => other,
    })
}

fn project_manager(row: &RawStanding, league_name: &str) -> Manager {
    Manager {
        id: row.entry,
        display_name: row.player_name.clone(),
        team_name: row.entry_name.clone(),
        league_name: league_name.to_string(),
    }
}
