//! Synthetic work simulator.
//!
//! Manufactures controllable latency, memory pressure, and failure rate so
//! that load-testing and monitoring tooling has a realistic workload to
//! observe. All three knobs come from [`RuntimeConfig`] and apply per request;
//! nothing is shared or cached between requests.

use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{Method, Uri},
    Json,
};
use rand::Rng;
use serde::Serialize;
use tracing::instrument;

use crate::config::{RuntimeConfig, BYTES_PER_MB, TOUCH_STRIDE_BYTES};
use crate::error::AppError;
use crate::state::AppState;

/// Successful work response, echoing the active configuration.
#[derive(Debug, Serialize)]
pub struct WorkResponse {
    pub status: &'static str,
    pub duration_ms: u64,
    pub config: RuntimeConfig,
}

/// Work simulator handler.
///
/// In order: sleeps for the configured latency, allocates and touches the
/// configured amount of memory, then rolls the failure die. The reported
/// duration covers all three steps. The sleep suspends only this request's
/// task; concurrent requests proceed unaffected.
#[instrument(name = "work::simulate", skip_all)]
pub async fn simulate(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Json<WorkResponse>, AppError> {
    let config = &state.config;
    let start = Instant::now();

    if config.latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.latency_ms)).await;
    }

    // Held until the handler returns, then freed; never reused across requests.
    let _pressure = allocate_and_touch(config.memory_mb as usize);

    let failed = config.fail_rate > 0.0 && rand::rng().random::<f64>() < config.fail_rate;

    let duration_ms = start.elapsed().as_millis() as u64;

    if failed {
        tracing::error!(
            path = %uri.path(),
            method = %method,
            status = 500,
            duration_ms,
            "Simulated work failed"
        );
        return Err(AppError::SimulatedFailure { duration_ms });
    }

    tracing::info!(
        path = %uri.path(),
        method = %method,
        status = 200,
        duration_ms,
        "Simulated work completed"
    );

    Ok(Json(WorkResponse {
        status: "completed",
        duration_ms,
        config: state.config.as_ref().clone(),
    }))
}

/// Allocates `memory_mb` megabytes and writes one byte per page.
///
/// The sparse writes force the kernel to commit real pages, so the allocation
/// shows up in RSS instead of being satisfied by the shared zero page. The
/// buffer is routed through `black_box` to keep the writes observable.
fn allocate_and_touch(memory_mb: usize) -> Vec<u8> {
    if memory_mb == 0 {
        return Vec::new();
    }

    let mut buf = vec![0u8; memory_mb * BYTES_PER_MB];
    for offset in (0..buf.len()).step_by(TOUCH_STRIDE_BYTES) {
        buf[offset] = 1;
    }

    std::hint::black_box(buf)
}
