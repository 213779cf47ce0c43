//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and default values so the rest of
//! the codebase stays free of inline literals.

#![allow(dead_code)]

/// Base URL of the Fantasy Premier League API. The upstream service is fixed;
/// the config file and environment variable exist mainly so tests can point
/// the client at a local mock server.
pub const DEFAULT_API_DOMAIN: &str = "https://fantasy.premierleague.com/api";

/// Default timeout for HTTP requests in seconds.
/// Every upstream call is bounded by this; there is no retry on expiry.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool.
/// Every call in a report run targets the same host, so pooling saves the
/// TLS handshake between the roster fetch and the per-manager history fetches.
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default number of leaderboard positions to display
pub const DEFAULT_STANDINGS_LIMIT: usize = 10;

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "FPL_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "FPL_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds (default: 10)
    pub const HTTP_TIMEOUT: &str = "FPL_HTTP_TIMEOUT";
}
