//! FTUSDT platform control CLI binary.

mod cli;
mod commands;

use clap::Parser;
use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = cli::Cli::parse();

    let log_level = cli.log_level.to_string();
    if cli.log_format.to_lowercase() == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::new(log_level))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::new(log_level)).init();
    }

    if let Err(err) = commands::run(cli).await {
        error!(error = ?err, "command failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
