//! HTTP error mapping.
//!
//! Every failure crossing the handler boundary - malformed body, upstream
//! completion failure, internal error - becomes HTTP 500 with a JSON body of
//! the form `{"error": <message>}`. The status does not distinguish between
//! categories; the message carries the detail.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::domains::narrative::NarrativeError;

/// Error returned by route handlers.
#[derive(Debug)]
pub struct ApiError(String);

impl ApiError {
    /// Create an API error from a message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// The message exposed to the client.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0 })),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.body_text())
    }
}

impl From<NarrativeError> for ApiError {
    fn from(err: NarrativeError) -> Self {
        Self(err.to_string())
    }
}
