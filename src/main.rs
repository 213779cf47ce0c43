// src/main.rs
mod app;
mod cli;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod logging;
mod ui;

use clap::Parser;
use cli::Args;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must live until exit so buffered log lines are flushed
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run(&args).await
}
