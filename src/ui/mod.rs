pub mod leaderboard;

pub use leaderboard::{month_name, render_leaderboard};
