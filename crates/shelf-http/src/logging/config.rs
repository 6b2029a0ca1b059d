//! # Structured Logging
//!
//! `tracing-subscriber` setup with compact, pretty or JSON output, picked
//! per environment. `RUST_LOG` always wins over the configured filter.

use serde_json::{Map, Value};
use shelf_core::Environment;
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the stdout layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Default level for every target not named in `directives`
    pub level: String,
    /// Per-target overrides such as `tower_http=warn`
    pub directives: Vec<String>,
    /// `(name, version)` reported when logging starts
    pub service: Option<(String, String)>,
    /// Extra fields reported when logging starts
    pub fields: Map<String, Value>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            level: "info".to_string(),
            directives: Vec::new(),
            service: None,
            fields: Map::new(),
        }
    }
}

impl LoggingConfig {
    /// JSON lines, quiet HTTP internals
    pub fn production() -> Self {
        Self {
            format: LogFormat::Json,
            directives: vec!["tower_http=warn".to_string(), "axum=warn".to_string()],
            ..Self::default()
        }
        .with_field("env", "production")
    }

    /// Pretty output with request traces
    pub fn development() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: "debug".to_string(),
            directives: vec!["tower_http=debug".to_string(), "axum=info".to_string()],
            ..Self::default()
        }
        .with_field("env", "development")
    }

    /// Errors only
    pub fn test() -> Self {
        Self {
            level: "error".to_string(),
            ..Self::default()
        }
        .with_field("env", "test")
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Testing => Self::test(),
            Environment::Production => Self::production(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_service(mut self, name: &str, version: &str) -> Self {
        self.service = Some((name.to_string(), version.to_string()));
        self
    }

    /// Replace the default level; per-target directives are kept
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// The filter used when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        std::iter::once(self.level.as_str())
            .chain(self.directives.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = config.filter_directive();
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&directive))?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(Layer::new().with_writer(io::stdout).json())
            .try_init()?,
        LogFormat::Pretty => registry
            .with(Layer::new().with_writer(io::stdout).pretty())
            .try_init()?,
        LogFormat::Compact => registry
            .with(Layer::new().with_writer(io::stdout).compact())
            .try_init()?,
    }

    let (service, version) = config.service.unwrap_or_default();
    let fields = Value::Object(config.fields);
    tracing::info!(
        target: "shelf::logging",
        filter = %directive,
        format = ?config.format,
        service = %service,
        version = %version,
        fields = %fields,
        "structured logging initialized"
    );
    Ok(())
}

pub fn log_startup_info(service_name: &str, service_version: &str, bind_address: &str) {
    tracing::info!(
        target: "shelf::startup",
        service = service_name,
        version = service_version,
        address = bind_address,
        pid = std::process::id(),
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        "application startup"
    );
}

pub fn log_shutdown_info(service_name: &str) {
    tracing::info!(target: "shelf::shutdown", service = service_name, "application shutdown");
}
