//! Server error type

use shelf_core::ConfigError;
use std::io;
use std::net::SocketAddr;
use thiserror::Error;

pub type HttpResult<T> = Result<T, HttpError>;

/// Failures of the web front end.
///
/// Rejected submissions are not errors here: they re-render the form.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid server address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),

    #[error("Resource not found: {path}")]
    NotFound { path: String },
}

impl HttpError {
    pub fn invalid_address(address: impl Into<String>, reason: impl ToString) -> Self {
        HttpError::InvalidAddress {
            address: address.into(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        HttpError::NotFound { path: path.into() }
    }

    /// Stable machine-readable code for JSON bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            HttpError::Config(_) | HttpError::InvalidAddress { .. } => "CONFIGURATION_ERROR",
            HttpError::Bind { .. } => "SERVER_STARTUP_FAILED",
            HttpError::Serve(_) => "INTERNAL_ERROR",
            HttpError::NotFound { .. } => "RESOURCE_NOT_FOUND",
        }
    }
}
