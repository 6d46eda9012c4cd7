//! Liveness and readiness probe endpoints.
//!
//! Both handlers are static: fixed status, fixed body, no branching, no side
//! effects beyond the response itself. Used by Kubernetes, ECS, systemd, and
//! load balancers to verify the service is alive.

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe handler.
///
/// Always answers 200 with `{"message": "pong"}`.
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// Health probe handler.
///
/// Always answers 200 with `{"status": "ok"}`.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
