//! Guessing Game Server CLI
//!
//! Starts the HTTP server for the guessing game.

use clap::Parser;
use guessing_server::config::{LogFormat, ServerConfig};
use guessing_server::{start_server, ServerError};
use std::path::PathBuf;
use std::process;

/// Guessing game server - a "20 questions" tree that learns from its mistakes.
#[derive(Debug, Parser)]
#[command(name = "guessing-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "GUESSING_CONFIG")]
    config: Option<PathBuf>,

    /// The port to serve the game from (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log output format (overrides the config file)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };

    if let Some(port) = cli.port {
        config.bind_port = port;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    start_server(config).await
}
