//! Fantasy Premier League Leaderboard Library
//!
//! This library provides functionality for fetching classic-league data from
//! the FPL API and building ranked leaderboards: the current overall
//! standings, or a month-scoped "Manager of the Month" report.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fpl_leaderboard::config::Config;
//! use fpl_leaderboard::data_fetcher::aggregator::monthly_standings;
//! use fpl_leaderboard::data_fetcher::api::http_client::create_http_client_with_timeout;
//! use fpl_leaderboard::error::AppError;
//! use fpl_leaderboard::ui::leaderboard::render_leaderboard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Rank league 314159 by points scored in November 2024
//!     let entries = monthly_standings(&client, &config, 314159, 11, 2024, 10).await?;
//!
//!     print!(
//!         "{}",
//!         render_leaderboard("Manager of the Month:", &entries, true)
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::aggregator::{current_standings, monthly_standings};
pub use data_fetcher::models::{
    GameweekFilter, GameweekId, GameweekRecord, Manager, StandingEntry,
};
pub use error::AppError;
pub use ui::leaderboard::render_leaderboard;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
