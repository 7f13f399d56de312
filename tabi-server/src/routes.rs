//! HTTP API routes.

use crate::error::ApiError;
use crate::provider::{ChatMessage, CompletionProvider};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tabi_itinerary::{ContextBuilder, ItineraryStore};

/// Application state.
///
/// The itinerary store is built once at startup and never mutated; every
/// request re-renders the grounding context from it, so no cross-request
/// locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItineraryStore>,
    pub context_builder: ContextBuilder,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Chat request body.
///
/// The server is stateless: callers resubmit the full transcript in
/// `history` on every turn. Transcript growth is the caller's
/// responsibility; no truncation is applied here.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Chat response body.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(chat))
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "tabi-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::InvalidRequest("message is required".into()));
    }

    let context = state
        .context_builder
        .build(state.store.trip(), state.store.hotel());

    let reply = state
        .provider
        .complete(&context, &request.history, &request.message)
        .await
        .map_err(|e| {
            tracing::error!(
                provider = state.provider.name(),
                error = %e,
                "completion request failed"
            );
            ApiError::from(e)
        })?;

    Ok(Json(ChatResponse { reply }))
}
