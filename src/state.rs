//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::RuntimeConfig;

/// Shared application state, cloneable across handlers via an Arc-wrapped config.
///
/// The runtime configuration is loaded once at startup and never mutated
/// afterwards, so concurrent handlers read it without any coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RuntimeConfig>,
}

impl AppState {
    /// Creates a new application state from the given runtime configuration.
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
