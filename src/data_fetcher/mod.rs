pub mod aggregator;
pub mod api;
pub mod models;

pub use aggregator::{current_standings, monthly_standings, rank_by_score};
pub use models::{GameweekFilter, GameweekId, GameweekRecord, Manager, StandingEntry};
