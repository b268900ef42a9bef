//! Guessing Game Server
//!
//! Serves the question tree over HTTP. Players walk the tree with
//! `/prompt`, and when the game guesses wrong they teach it a new
//! question through `/inject`.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod logging;

use config::ServerConfig;
use guessing_domain::PromptStore;
use guessing_store::{MemoryStore, StoreError};
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Seeding the prompt tree failed
    #[error("Failed to seed prompt tree: {0}")]
    Seed(#[from] StoreError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build application state with a freshly seeded in-memory tree
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let store = MemoryStore::new();
    store.seed(
        &config.seed.root_question,
        &config.seed.yes_answer,
        &config.seed.no_answer,
    )?;
    info!(prompts = store.len(), "Seeded prompt tree");

    Ok(AppState {
        store: Arc::new(store),
    })
}

/// Start the game HTTP server
///
/// Initializes tracing, seeds the store and serves until the process exits.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    logging::init_tracing(config.log_format);

    info!("Starting guessing game server");
    info!("Bind address: {}", config.bind_addr());

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
