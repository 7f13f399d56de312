//! tabi-server - itinerary concierge HTTP service.
//!
//! A single chat endpoint answers questions about a fixed, pre-authored trip
//! itinerary. Each request re-renders the grounding context from the
//! read-only itinerary store and forwards the conversation to the completion
//! provider; the server keeps no conversation state of its own.
//!
//! ## Architecture
//!
//! ```text
//! Client → routes (validate) → ContextBuilder → CompletionProvider → Client
//! ```

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod error;
pub mod provider;
pub mod routes;

pub use error::ApiError;
pub use provider::{AnthropicProvider, ChatMessage, CompletionProvider, ProviderError, Role};
pub use routes::{build_router, AppState, ChatRequest, ChatResponse};

use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

/// Build the full application: routes plus permissive CORS.
///
/// The CORS layer attaches cross-origin headers to every response and
/// answers pre-flight OPTIONS requests before any route or method check.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    build_router(state).layer(cors)
}

/// Start the HTTP server.
pub async fn start_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(state);

    tracing::info!("Starting tabi server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
