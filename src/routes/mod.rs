//! HTTP route handlers for the synthetic workload API.
//!
//! All endpoints live under a common `/api/v1` prefix. Every response carries
//! `Cache-Control: no-store` so probe results are never masked by an
//! intermediary cache.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod echo;
pub mod health;
pub mod work;

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes under the `/api/v1` prefix.
pub fn create_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/ping", get(health::ping))
        .route("/healthz", get(health::healthz))
        .route("/work", get(work::simulate))
        .route("/echo", post(echo::echo));

    Router::new()
        .nest("/api/v1", v1)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt; // for `oneshot`

    use super::*;
    use crate::config::RuntimeConfig;

    fn router_with(latency_ms: u64, fail_rate: f64, memory_mb: u64) -> Router {
        create_router(AppState::new(RuntimeConfig {
            latency_ms,
            fail_rate,
            memory_mb,
        }))
    }

    async fn get_path(router: &Router, path: &str) -> Response {
        router
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_body(router: &Router, path: &str, body: &str) -> Response {
        router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn ping_returns_pong() {
        let router = router_with(0, 0.0, 0);

        let response = get_path(&router, "/api/v1/ping").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "pong");
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let router = router_with(0, 0.0, 0);

        let response = get_path(&router, "/api/v1/healthz").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn responses_are_marked_no_store() {
        let router = router_with(0, 0.0, 0);

        let response = get_path(&router, "/api/v1/healthz").await;
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }

    #[tokio::test]
    async fn work_completes_and_echoes_the_configuration() {
        let router = router_with(0, 0.0, 0);

        let response = get_path(&router, "/api/v1/work").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "completed");
        assert!(json["duration_ms"].is_number());
        assert_eq!(json["config"]["latency_ms"], 0);
        assert_eq!(json["config"]["fail_rate"], 0.0);
        assert_eq!(json["config"]["memory_mb"], 0);
    }

    #[tokio::test]
    async fn work_duration_covers_the_configured_latency() {
        let router = router_with(50, 0.0, 0);

        let start = std::time::Instant::now();
        let response = get_path(&router, "/api/v1/work").await;
        let observed = start.elapsed();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(observed.as_millis() >= 50);

        let json = body_json(response).await;
        assert!(json["duration_ms"].as_u64().unwrap() >= 50);
        assert_eq!(json["config"]["latency_ms"], 50);
    }

    #[tokio::test]
    async fn work_never_fails_when_fail_rate_is_zero() {
        let router = router_with(0, 0.0, 0);

        for _ in 0..25 {
            let response = get_path(&router, "/api/v1/work").await;
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn work_always_fails_when_fail_rate_is_one() {
        let router = router_with(0, 1.0, 0);

        for _ in 0..10 {
            let response = get_path(&router, "/api/v1/work").await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let json = body_json(response).await;
            assert_eq!(json["error"], "simulated failure");
            assert!(json["duration_ms"].is_number());
        }
    }

    #[tokio::test]
    async fn work_succeeds_under_memory_pressure() {
        let router = router_with(0, 0.0, 1);

        let response = get_path(&router, "/api/v1/work").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["config"]["memory_mb"], 1);
    }

    #[tokio::test]
    async fn echo_is_a_structural_identity() {
        let router = router_with(0, 0.0, 0);

        let response = post_body(&router, "/api/v1/echo", r#"{"hello": "world", "count": 42}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["echo"]["hello"], "world");
        assert_eq!(json["echo"]["count"], 42);
        assert_eq!(json["echo"].as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn echo_preserves_nested_structure() {
        let router = router_with(0, 0.0, 0);

        let payload = r#"{"outer": {"inner": [1, 2, 3]}, "flag": true}"#;
        let response = post_body(&router, "/api/v1/echo", payload).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["echo"]["outer"]["inner"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["echo"]["flag"], true);
    }

    #[tokio::test]
    async fn echo_rejects_a_body_that_is_not_json() {
        let router = router_with(0, 0.0, 0);

        let response = post_body(&router, "/api/v1/echo", "not valid json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "invalid JSON body");
    }

    #[tokio::test]
    async fn echo_rejects_json_that_is_not_an_object() {
        let router = router_with(0, 0.0, 0);

        let response = post_body(&router, "/api/v1/echo", "42").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn routes_outside_the_prefix_are_not_found() {
        let router = router_with(0, 0.0, 0);

        let response = get_path(&router, "/ping").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
