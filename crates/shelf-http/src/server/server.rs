//! # Shelf HTTP Server
//!
//! Owns the configuration and shared state, builds the router and runs it
//! until a shutdown signal arrives.

use super::lifecycle::{bind, start_server};
use super::router::build_router;
use crate::config::HttpConfig;
use crate::errors::{HttpError, HttpResult};
use crate::handlers::AppState;
use axum::Router;
use shelf_core::{AppConfig, AppConfigTrait};
use std::net::SocketAddr;

/// The submission form server
///
/// ```rust,no_run
/// use shelf_core::AppConfig;
/// use shelf_http::{HttpConfig, Server};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = Server::new(AppConfig::default(), HttpConfig::default())?;
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct Server {
    addr: SocketAddr,
    state: AppState,
}

impl Server {
    /// Validate both configs and prepare empty session state
    pub fn new(app_config: AppConfig, http_config: HttpConfig) -> HttpResult<Self> {
        app_config.validate()?;
        http_config.validate()?;

        let addr = app_config
            .bind_address()
            .parse::<SocketAddr>()
            .map_err(|e| HttpError::invalid_address(app_config.bind_address(), e))?;

        Ok(Self {
            addr,
            state: AppState::new(http_config),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The router this server would serve, for in-process use
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind and serve until shutdown
    pub async fn run(self) -> HttpResult<()> {
        let listener = bind(self.addr).await?;
        start_server(listener, build_router(self.state)).await
    }
}
