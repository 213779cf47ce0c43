//! Per-manager gameweek history and points summation

use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch;
use super::urls::build_history_url;
use crate::config::Config;
use crate::data_fetcher::models::{GameweekFilter, GameweekRecord, HistoryResponse};
use crate::error::AppError;

/// Fetches a manager's chronological per-gameweek history.
///
/// A manager listed in a league roster is expected to have history; an
/// upstream 404, a body of the wrong shape, or an empty history all map to
/// `ManagerNotFound` and are propagated, not swallowed. A roster member
/// without history is a data inconsistency the user should see.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `config` - Application config carrying the API domain
/// * `manager_id` - The manager (entry) identifier
#[instrument(skip(client, config))]
pub async fn fetch_manager_history(
    client: &Client,
    config: &Config,
    manager_id: u64,
) -> Result<Vec<GameweekRecord>, AppError> {
    let url = build_history_url(&config.api_domain, manager_id);

    let response: HistoryResponse = fetch(client, &url).await.map_err(|e| match e {
        AppError::ApiNotFound { .. }
        | AppError::ApiUnexpectedStructure { .. }
        | AppError::ApiMalformedJson { .. }
        | AppError::ApiNoData { .. } => AppError::manager_not_found(manager_id, &url),
        other => other,
    })?;

    if response.current.is_empty() {
        return Err(AppError::manager_not_found(manager_id, &url));
    }

    debug!(
        "Fetched {} history record(s) for manager {manager_id}",
        response.current.len()
    );
    Ok(response.current)
}

/// Fetches a manager's history and reduces it per the given filter.
///
/// With `GameweekFilter::Overall` this is the manager's current cumulative
/// total; with `GameweekFilter::Gameweeks` the sum of points over the listed
/// gameweeks. See [`sum_points`] for the exact semantics.
pub async fn points_for(
    client: &Client,
    config: &Config,
    manager_id: u64,
    filter: &GameweekFilter,
) -> Result<i64, AppError> {
    let history = fetch_manager_history(client, config, manager_id).await?;
    Ok(sum_points(&history, filter))
}

/// Reduces a history to a single score.
///
/// `Overall` returns the `total_points` of the chronologically last record
/// (0 for an empty history). `Gameweeks` sums the `points` of records whose
/// gameweek is in the set; gameweeks absent from the history contribute 0
/// implicitly, so a manager who joined mid-season is scored on what they
/// actually played.
pub fn sum_points(history: &[GameweekRecord], filter: &GameweekFilter) -> i64 {
    match filter {
        GameweekFilter::Overall => history.last().map(|record| record.total_points).unwrap_or(0),
        GameweekFilter::Gameweeks(gameweeks) => history
            .iter()
            .filter(|record| gameweeks.contains(&record.gameweek))
            .map(|record| record.points)
            .sum(),
    }
}
