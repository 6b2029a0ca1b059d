//! # shelf-http
//!
//! Web front end for the shelf resource registry:
//! - the submission form and the session's registered resources at `/`
//! - a JSON listing of the session's resources at `/api/resources`
//! - a health check endpoint
//! - cookie-identified, in-memory sessions
//! - structured logging setup and graceful shutdown

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod session;
pub mod views;

pub use config::{HttpConfig, HttpDefaults};
pub use errors::{HttpError, HttpResult};
pub use handlers::AppState;
pub use logging::{init_logging, log_shutdown_info, log_startup_info, LogFormat, LoggingConfig};
pub use server::{build_router, Server};
pub use session::{Session, SessionId, SessionStore};
