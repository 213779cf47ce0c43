use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Fantasy Premier League Leaderboards
///
/// Renders classic-league leaderboards in the terminal: either the current
/// overall standings, or a "Manager of the Month" report that sums each
/// manager's points over the gameweeks whose deadlines fall in a calendar
/// month.
///
/// With no --league flag the league id is prompted for on stdin; an id the
/// API rejects is re-prompted rather than aborting the run.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Classic league id to report on. Prompted for on stdin when omitted.
    #[arg(short = 'l', long = "league", help_heading = "Report Options")]
    pub league: Option<u64>,

    /// Month to report on (1-12). Defaults to the current month.
    #[arg(
        short = 'm',
        long = "month",
        help_heading = "Report Options",
        value_parser = clap::value_parser!(u32).range(1..=12)
    )]
    pub month: Option<u32>,

    /// Year to report on (e.g. 2024). Defaults to the current year.
    #[arg(short = 'y', long = "year", help_heading = "Report Options")]
    pub year: Option<i32>,

    /// Number of leaderboard positions to display.
    #[arg(
        short = 'n',
        long = "limit",
        default_value_t = crate::constants::DEFAULT_STANDINGS_LIMIT,
        help_heading = "Report Options"
    )]
    pub limit: usize,

    /// Show the current overall standings instead of the monthly report.
    #[arg(short = 'c', long = "current", help_heading = "Report Options")]
    pub current: bool,

    /// Disable ANSI styling in the output.
    /// Useful for piping the report into other tools or plain-text logs.
    #[arg(short = 'p', long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// List current configuration settings
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: log output is mirrored to the terminal at debug level.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["fpl_leaderboard"]);
        assert_eq!(args.league, None);
        assert_eq!(args.month, None);
        assert_eq!(args.year, None);
        assert_eq!(args.limit, crate::constants::DEFAULT_STANDINGS_LIMIT);
        assert!(!args.current);
        assert!(!args.plain);
        assert!(!args.debug);
    }

    #[test]
    fn test_monthly_report_flags() {
        let args = Args::parse_from([
            "fpl_leaderboard",
            "--league",
            "314159",
            "--month",
            "11",
            "--year",
            "2024",
            "--limit",
            "5",
        ]);
        assert_eq!(args.league, Some(314159));
        assert_eq!(args.month, Some(11));
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.limit, 5);
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        let result = Args::try_parse_from(["fpl_leaderboard", "--month", "13"]);
        assert!(result.is_err());

        let result = Args::try_parse_from(["fpl_leaderboard", "--month", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_current_and_plain() {
        let args = Args::parse_from(["fpl_leaderboard", "-c", "-p"]);
        assert!(args.current);
        assert!(args.plain);
    }
}
