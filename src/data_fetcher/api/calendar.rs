//! Gameweek calendar resolution
//!
//! Maps a calendar month to the set of gameweeks whose deadlines fall inside
//! it, using the season-wide schedule from the bootstrap endpoint. Index
//! position + 1 in the events array is the gameweek id.

use chrono::{DateTime, Datelike};
use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch;
use super::urls::build_bootstrap_url;
use crate::config::Config;
use crate::data_fetcher::models::{BootstrapEvent, BootstrapResponse, GameweekId};
use crate::error::AppError;

/// Resolves the gameweeks whose deadline falls in the given month and year.
///
/// Returns the matching gameweek ids in ascending order. An empty result is
/// valid (a month with no fixtures); any fetch or parse failure surfaces as
/// `ScheduleUnavailable` with no retry.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `config` - Application config carrying the API domain
/// * `month` - Calendar month, 1-12
/// * `year` - 4-digit calendar year
#[instrument(skip(client, config))]
pub async fn resolve_gameweeks(
    client: &Client,
    config: &Config,
    month: u32,
    year: i32,
) -> Result<Vec<GameweekId>, AppError> {
    let url = build_bootstrap_url(&config.api_domain);

    // A timeout keeps its own kind; every other failure on this endpoint is
    // an unreachable or unusable schedule.
    let response: BootstrapResponse = fetch(client, &url).await.map_err(|e| match e {
        AppError::NetworkTimeout { .. } => e,
        other => AppError::schedule_unavailable(other.to_string(), &url),
    })?;

    let gameweeks = gameweeks_in_month(&response.events, month, year)
        .map_err(|message| AppError::schedule_unavailable(message, &url))?;

    debug!(
        "Resolved {} gameweek(s) for {month}/{year}",
        gameweeks.len()
    );
    Ok(gameweeks)
}

/// Filters the season schedule down to the gameweek ids whose deadline
/// timestamp matches the given month and year. Deadlines are compared in the
/// timezone they are published in.
///
/// Returns an error message naming the offending gameweek when a deadline
/// timestamp is not valid ISO-8601.
pub fn gameweeks_in_month(
    events: &[BootstrapEvent],
    month: u32,
    year: i32,
) -> Result<Vec<GameweekId>, String> {
    let mut gameweeks = Vec::new();

    for (index, event) in events.iter().enumerate() {
        let gameweek = (index + 1) as GameweekId;
        let deadline = DateTime::parse_from_rfc3339(&event.deadline_time).map_err(|e| {
            format!(
                "invalid deadline_time {:?} for gameweek {gameweek}: {e}",
                event.deadline_time
            )
        })?;

        if deadline.month() == month && deadline.year() == year {
            gameweeks.push(gameweek);
        }
    }

    Ok(gameweeks)
}
