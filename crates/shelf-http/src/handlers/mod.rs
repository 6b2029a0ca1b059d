pub mod health;
pub mod resources;

pub use health::health_check;
pub use resources::{list_resources, not_found, show_form, submit_resource};

use crate::config::HttpConfig;
use crate::session::SessionStore;
use shelf_core::Registry;
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<HttpConfig>,
}

impl AppState {
    pub fn new(config: HttpConfig) -> Self {
        Self::with_registry(config, Registry::new())
    }

    pub fn with_registry(config: HttpConfig, registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
            sessions: Arc::new(SessionStore::with_limits(
                config.session_idle_timeout(),
                config.max_sessions,
            )),
            config: Arc::new(config),
        }
    }
}
