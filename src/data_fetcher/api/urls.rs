//! URL building utilities for the FPL API endpoints

/// Builds the classic-league standings URL. The same endpoint serves both the
/// league roster and the current overall standings.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `league_id` - The classic league identifier
///
/// # Returns
/// * `String` - The complete standings URL
///
/// # Example
/// ```
/// use fpl_leaderboard::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://fantasy.premierleague.com/api", 314159);
/// assert_eq!(
///     url,
///     "https://fantasy.premierleague.com/api/leagues-classic/314159/standings/"
/// );
/// ```
pub fn build_standings_url(api_domain: &str, league_id: u64) -> String {
    format!("{api_domain}/leagues-classic/{league_id}/standings/")
}

/// Builds the per-manager history URL, listing one record per played gameweek.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `manager_id` - The manager (entry) identifier
///
/// # Returns
/// * `String` - The complete history URL
///
/// # Example
/// ```
/// use fpl_leaderboard::data_fetcher::api::build_history_url;
///
/// let url = build_history_url("https://fantasy.premierleague.com/api", 1001);
/// assert_eq!(url, "https://fantasy.premierleague.com/api/entry/1001/history/");
/// ```
pub fn build_history_url(api_domain: &str, manager_id: u64) -> String {
    format!("{api_domain}/entry/{manager_id}/history/")
}

/// Builds the bootstrap URL carrying the season-wide gameweek schedule.
///
/// # Arguments
/// * `api_domain` - The base API domain
///
/// # Returns
/// * `String` - The complete bootstrap URL
///
/// # Example
/// ```
/// use fpl_leaderboard::data_fetcher::api::build_bootstrap_url;
///
/// let url = build_bootstrap_url("https://fantasy.premierleague.com/api");
/// assert_eq!(url, "https://fantasy.premierleague.com/api/bootstrap-static/");
/// ```
pub fn build_bootstrap_url(api_domain: &str) -> String {
    format!("{api_domain}/bootstrap-static/")
}
