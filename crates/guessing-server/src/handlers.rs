//! HTTP request handlers for the game server.
//!
//! Thin glue between axum and the prompt store: bind query parameters,
//! call one store operation, serialize the result.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router as AxumRouter,
};
use guessing_domain::{Prompt, PromptKey, PromptStore};
use guessing_store::StoreError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Store handle shared between handlers
pub type SharedStore = Arc<dyn PromptStore<Error = StoreError> + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Prompt tree
    pub store: SharedStore,
}

/// Query parameters naming a prompt
#[derive(Debug, Deserialize)]
pub struct PromptQuery {
    /// Prompt key
    pub key: String,
}

/// Query parameters for teaching the game a new question
#[derive(Debug, Deserialize)]
pub struct InjectQuery {
    /// Key of the answer that was wrong
    pub key: String,

    /// Question distinguishing the new answer from the old one
    #[serde(default)]
    pub value: String,

    /// The answer the player was thinking of
    #[serde(default)]
    pub answer: String,
}

/// A prompt as seen by clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptView {
    /// Prompt key
    pub key: String,
    /// Question or answer text
    pub value: String,
    /// "question" or "answer"
    pub kind: String,
    /// Where to go on "yes" (questions only)
    pub yes_key: Option<String>,
    /// Where to go on "no" (questions only)
    pub no_key: Option<String>,
}

impl From<Prompt> for PromptView {
    fn from(prompt: Prompt) -> Self {
        PromptView {
            yes_key: prompt.yes_key().map(PromptKey::into_string),
            no_key: prompt.no_key().map(PromptKey::into_string),
            kind: prompt.kind.as_str().to_string(),
            key: prompt.key.into_string(),
            value: prompt.value,
        }
    }
}

/// Home page response
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Greeting
    pub message: String,
    /// Key of the first question
    pub start_key: String,
}

/// Plain message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Number of prompts in the tree
    pub prompt_count: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Store-related error
    StoreError(StoreError),
    /// Malformed request
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::StoreError(e @ StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
            AppError::StoreError(e @ StoreError::NotAnAnswer(_)) => (StatusCode::CONFLICT, e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        warn!(error = %e, "store request failed");
        AppError::StoreError(e)
    }
}

/// GET / - Start a new game
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Think of something, then answer the questions.".to_string(),
        start_key: PromptKey::root().into_string(),
    })
}

/// GET /prompt?key=K - Fetch one prompt
async fn get_prompt(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<Json<PromptView>, AppError> {
    let prompt = state.store.lookup(&query.key)?;
    Ok(Json(prompt.into()))
}

/// GET /success - The game guessed right
async fn success() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Got it! Thanks for playing.".to_string(),
    })
}

/// GET /add?key=K - Data for the "teach me" form
///
/// Only answers can be split, so a question key is rejected here before the
/// player types anything.
async fn add_form(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<Json<PromptView>, AppError> {
    let prompt = state.store.lookup(&query.key)?;
    if prompt.is_question() {
        return Err(StoreError::NotAnAnswer(query.key).into());
    }
    Ok(Json(prompt.into()))
}

/// GET /inject?key=K&value=Q&answer=A - Teach the game a new answer
async fn inject_prompt(
    State(state): State<AppState>,
    Query(query): Query<InjectQuery>,
) -> Result<Json<PromptView>, AppError> {
    if query.answer.trim().is_empty() {
        return Err(AppError::BadRequest("answer must not be empty".to_string()));
    }

    let key = query.key;
    state
        .store
        .inject(Prompt::answer(key.as_str(), query.value), &query.answer)?;
    info!(key = %key, "learned new question");

    let question = state.store.lookup(&key)?;
    Ok(Json(question.into()))
}

/// GET /prompts - Every prompt in the tree, ordered by key
async fn list_prompts(State(state): State<AppState>) -> Json<Vec<PromptView>> {
    let mut prompts = state.store.all_prompts();
    prompts.sort_by(|a, b| a.key.cmp(&b.key));
    Json(prompts.into_iter().map(PromptView::from).collect())
}

/// GET /health - Liveness check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        prompt_count: state.store.all_prompts().len(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(home))
        .route("/prompt", get(get_prompt))
        .route("/success", get(success))
        .route("/add", get(add_form))
        .route("/inject", get(inject_prompt))
        .route("/prompts", get(list_prompts))
        .route("/health", get(health_check))
        .with_state(state)
}
