use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced to HTTP clients as JSON bodies.
///
/// Only two kinds exist: a malformed echo body (client error, recovered
/// locally) and the probabilistic failure injected by the work simulator
/// (server error, not a real fault). Neither is retried.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid JSON body")]
    InvalidBody(#[from] serde_json::Error),

    #[error("simulated failure")]
    SimulatedFailure {
        /// Wall-clock milliseconds spent on the simulated work before the
        /// failure draw
        duration_ms: u64,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidBody(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            AppError::SimulatedFailure { duration_ms } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string(), "duration_ms": duration_ms }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
