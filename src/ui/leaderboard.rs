//! Leaderboard text rendering
//!
//! Pure formatting: ranked entries in, printable text out. The only styling
//! is a bold underlined title, and even that is skipped in plain mode.

use crate::data_fetcher::models::StandingEntry;

/// English month names, indexed by month number - 1
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders a ranked list as a titled leaderboard.
///
/// One line per entry: `"{rank}. {display_name} ({team_name}) - {score}"`.
/// When `styled` is set the title line is wrapped in bold+underline ANSI
/// escapes; the entry lines are never styled.
pub fn render_leaderboard(title: &str, entries: &[StandingEntry], styled: bool) -> String {
    let mut buffer = String::new();

    if styled {
        buffer.push_str(&format!("\x1b[1;4m{title}\x1b[0m\n"));
    } else {
        buffer.push_str(title);
        buffer.push('\n');
    }
    buffer.push('\n');

    for entry in entries {
        buffer.push_str(&format!(
            "{}. {} ({}) - {}\n",
            entry.rank, entry.manager.display_name, entry.manager.team_name, entry.score
        ));
    }

    buffer
}

/// Returns the English name of a month, 1-12. Falls back to the raw number
/// for out-of-range input rather than panicking in a formatting helper.
pub fn month_name(month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .map(|name| name.to_string())
        .unwrap_or_else(|| month.to_string())
}
