//! Configuration loading and constants.
//!
//! Loads the runtime tunables from environment variables at startup and defines
//! constants for environment variable names, listener defaults, the memory touch
//! pattern, and logging. `RuntimeConfig` is the root configuration struct read by
//! every invocation of the work simulator.

use std::str::FromStr;

use serde::Serialize;

// =============================================================================
// Environment Variables
// =============================================================================

/// Artificial latency added to every work request, in milliseconds
pub const ENV_LATENCY_MS: &str = "LATENCY_MS";

/// Probability in [0, 1] that a work request fails with a synthetic error
pub const ENV_FAIL_RATE: &str = "FAIL_RATE";

/// Megabytes allocated and touched per work request
pub const ENV_MEMORY_MB: &str = "MEMORY_MB";

/// TCP port the HTTP listener binds to
pub const ENV_PORT: &str = "PORT";

/// Log output format ("text" or "json")
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

// =============================================================================
// Listener Defaults
// =============================================================================

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listener port
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// Memory Touch Pattern
// =============================================================================

/// Stride in bytes between touched positions in the allocated buffer.
/// One write per page forces the host OS to commit real memory instead of
/// serving the whole allocation from the shared zero page.
pub const TOUCH_STRIDE_BYTES: usize = 4096;

/// Bytes per megabyte of requested allocation
pub const BYTES_PER_MB: usize = 1024 * 1024;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Probe and simulator responses must never be served from an intermediary
/// cache: a cached /healthz would mask a dead process.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "ersatz=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Runtime tunables for the synthetic work simulator.
///
/// Loaded once from the environment at startup and shared read-only across all
/// request handlers for the lifetime of the process. Serialized verbatim into
/// successful work responses so callers can see which knobs were active.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeConfig {
    /// Milliseconds to sleep before responding
    pub latency_ms: u64,
    /// Probability of simulated failure, compared against a uniform draw in [0, 1)
    pub fail_rate: f64,
    /// Megabytes to allocate and touch
    pub memory_mb: u64,
}

impl RuntimeConfig {
    /// Loads the runtime configuration from the process environment.
    ///
    /// Unset or unparsable variables fall back to their zero defaults instead of
    /// failing startup; a garbled `FAIL_RATE` yields a service that never fails
    /// rather than one that never starts.
    pub fn from_env() -> Self {
        let config = Self {
            latency_ms: env_parse(ENV_LATENCY_MS, 0),
            fail_rate: env_parse(ENV_FAIL_RATE, 0.0),
            memory_mb: env_parse(ENV_MEMORY_MB, 0),
        };

        tracing::info!(
            latency_ms = config.latency_ms,
            fail_rate = config.fail_rate,
            memory_mb = config.memory_mb,
            "Loaded runtime configuration"
        );

        config
    }
}

/// Returns the listener port, honoring `PORT` when set and parseable.
pub fn listen_port() -> u16 {
    env_parse(ENV_PORT, DEFAULT_PORT)
}

/// Returns the log format, either "text" (default) or "json".
pub fn log_format() -> String {
    std::env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string())
}

/// Reads an environment variable and parses it as `T`, falling back to
/// `default` when the variable is unset or fails to parse.
fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
