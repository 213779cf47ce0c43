pub mod calendar;
mod fetch_utils;
pub mod history_api;
pub mod http_client;
pub mod league_api;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
#[allow(unused_imports)]
pub use http_client::*;
// Re-export endpoint operations
pub use calendar::{gameweeks_in_month, resolve_gameweeks};
pub use history_api::{fetch_manager_history, points_for, sum_points};
pub use league_api::{fetch_current_standings, fetch_league_roster};
