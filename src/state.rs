//! Application state shared by the HTTP handlers.
//!
//! The parsers themselves are stateless; the state only carries what the
//! surrounding server needs: its configuration and instance identity.

use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::config::Config;

/// The application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Unique id of this server instance
    pub server_id: String,
    /// When this instance was started
    pub started_at: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config) -> Self {
        Self {
            config,
            server_id: Uuid::new_v4().to_string(),
            started_at: Instant::now(),
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    /// Seconds elapsed since the server started
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
