//! Report orchestration and the interactive boundary
//!
//! The league-id prompt loop lives here: the aggregator is called once per
//! attempt and exactly `InvalidLeagueId` leads to a re-prompt. Every other
//! error kind aborts the run and is reported by main.

use crate::cli::Args;
use crate::config::Config;
use crate::config::user_prompts::prompt_for_league_id;
use crate::data_fetcher::aggregator::{current_standings, monthly_standings};
use crate::data_fetcher::api::http_client::create_http_client_with_timeout;
use crate::data_fetcher::models::StandingEntry;
use crate::error::AppError;
use crate::ui::leaderboard::{month_name, render_leaderboard};
use chrono::{Datelike, Local, Utc};
use tracing::{info, warn};

pub async fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    // Use UTC internally, convert to local time for the month/year defaults
    let today = Utc::now().with_timezone(&Local);
    let month = args.month.unwrap_or(today.month());
    let year = args.year.unwrap_or(today.year());

    let mut league_id = match args.league {
        Some(league_id) => league_id,
        None => prompt_for_league_id().await?,
    };

    // Retry at the boundary: only a rejected league id is recoverable,
    // by asking for another one.
    let entries = loop {
        let result = if args.current {
            current_standings(&client, &config, league_id, args.limit).await
        } else {
            monthly_standings(&client, &config, league_id, month, year, args.limit).await
        };

        match result {
            Ok(entries) => break entries,
            Err(e) if e.is_invalid_league_id() => {
                warn!("League id {league_id} rejected by the API: {e}");
                println!("This league id is invalid, please re-enter the id.");
                league_id = prompt_for_league_id().await?;
            }
            Err(e) => return Err(e),
        }
    };

    let title = report_title(args.current, league_id, month, year, &entries);
    info!("Rendering {} entries for league {league_id}", entries.len());
    print!("\n{}", render_leaderboard(&title, &entries, !args.plain));

    Ok(())
}

/// Builds the report title from the league name carried on the entries.
/// An empty result (limit 0, or an empty league) falls back to the id.
fn report_title(
    current: bool,
    league_id: u64,
    month: u32,
    year: i32,
    entries: &[StandingEntry],
) -> String {
    let league_name = entries
        .first()
        .map(|entry| entry.manager.league_name.clone())
        .unwrap_or_else(|| format!("League {league_id}"));

    if current {
        format!("{league_name} Current Standings:")
    } else {
        format!(
            "{league_name} Manager of the Month - {} {year}:",
            month_name(month)
        )
    }
}
