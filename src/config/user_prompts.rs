//! User interaction and prompts
//!
//! Interactive input collection for the one value the application cannot
//! guess: which league to report on.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for a league id on stdin and loops until a numeric id is
/// entered. Closed stdin is an error rather than an endless loop, so piping
/// an empty input terminates cleanly.
///
/// # Returns
/// * `Ok(u64)` - The parsed league id
/// * `Err(AppError)` - Error reading from stdin, or stdin reached EOF
pub async fn prompt_for_league_id() -> Result<u64, AppError> {
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);

    loop {
        println!("What is the FPL league id?");
        let mut input = String::new();
        let bytes_read = reader.read_line(&mut input).await?;
        if bytes_read == 0 {
            return Err(AppError::config_error(
                "stdin closed before a league id was entered",
            ));
        }

        match input.trim().parse::<u64>() {
            Ok(league_id) => return Ok(league_id),
            Err(_) => println!("Please enter a numeric league id."),
        }
    }
}
