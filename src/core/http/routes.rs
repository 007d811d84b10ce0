//! Route handlers for the relay.
//!
//! Three POST endpoints, one per narrative task, plus the root route and a
//! health check. Each POST handler is a single linear path: parse the JSON
//! body, log it, hand it to the narrative service, and return the completion
//! text as `text/plain`. Failures of any kind surface as HTTP 500 via
//! [`ApiError`].

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::error::ApiError;
use crate::core::server::RelayServer;
use crate::domains::narrative::{ChildState, EndingState, FeedbackEvent};

/// Build the axum router for the relay.
pub fn build_router(server: RelayServer, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .route("/childdata", post(handle_child_data))
        .route("/feedback", post(handle_feedback))
        .route("/ending", post(handle_ending))
        .layer(TraceLayer::new_for_http())
        .with_state(server);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Wrap narrative text as a UTF-8 plain-text response.
fn plain_text(text: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text)
}

/// Root route - shows a masked prefix of the configured credential.
async fn handle_index(State(server): State<RelayServer>) -> impl IntoResponse {
    plain_text(format!("OpenAIキーの一部: {}", server.key_preview()))
}

/// Health check endpoint.
async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// `POST /childdata` - generate a 3-line nurturing event.
async fn handle_child_data(
    State(server): State<RelayServer>,
    payload: Result<Json<ChildState>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(state) = payload?;
    info!("Received child data: {:?}", state);

    let text = server.narrative().generate_event(&state).await?;
    Ok(plain_text(text))
}

/// `POST /feedback` - analyze the parent's comment, 7-line stat block.
async fn handle_feedback(
    State(server): State<RelayServer>,
    payload: Result<Json<FeedbackEvent>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(event) = payload?;
    info!("Received feedback event: {:?}", event);

    let text = server.narrative().generate_feedback(&event).await?;
    Ok(plain_text(text))
}

/// `POST /ending` - generate the one-paragraph life story.
async fn handle_ending(
    State(server): State<RelayServer>,
    payload: Result<Json<EndingState>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(state) = payload?;
    info!("Received ending state: {:?}", state);

    let text = server.narrative().generate_ending(&state).await?;
    Ok(plain_text(text))
}
