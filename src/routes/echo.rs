//! Echo endpoint: returns the posted JSON object unchanged.

use axum::{
    body::Bytes,
    http::{Method, Uri},
    Json,
};
use serde_json::{json, Map, Value};
use tracing::instrument;

use crate::error::AppError;

/// Echo handler.
///
/// Parses the request body as a JSON object and returns it wrapped under an
/// `echo` field, structurally unchanged. Bodies that are not a JSON object are
/// rejected with 400. The payload is never logged; a rejected body only
/// produces a warning carrying the parse error.
#[instrument(name = "echo::echo", skip_all)]
pub async fn echo(method: Method, uri: Uri, body: Bytes) -> Result<Json<Value>, AppError> {
    let parsed: Map<String, Value> = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "Rejected echo body that is not a JSON object");
        AppError::InvalidBody(err)
    })?;

    tracing::info!(
        path = %uri.path(),
        method = %method,
        "Echo request"
    );

    Ok(Json(json!({ "echo": parsed })))
}
