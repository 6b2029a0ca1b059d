use crate::config::{ConfigError, ConfigSource};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

/// A configuration section loaded from the process environment
pub trait AppConfigTrait: Sized {
    fn from_env() -> Result<Self, ConfigError>;

    fn validate(&self) -> Result<(), ConfigError>;

    /// Field name to origin, logged at startup
    fn config_sources(&self) -> HashMap<String, ConfigSource>;
}

pub const ENV_ENVIRONMENT: &str = "SHELF_ENV";
pub const ENV_HOST: &str = "SHELF_HOST";
pub const ENV_PORT: &str = "SHELF_PORT";
pub const ENV_LOG_LEVEL: &str = "SHELF_LOG_LEVEL";

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Deployment environment, selects presets for listening and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        }
    }

    pub fn is_testing(&self) -> bool {
        matches!(self, Environment::Testing)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Full names or the short `dev`/`test`/`prod`, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::invalid_value(
                "environment",
                s,
                "development, testing or production",
            )),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-level settings: where to listen and how loudly to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            environment: Environment::Development,
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }

    /// Any free port, quieter logs
    pub fn testing() -> Self {
        Self {
            environment: Environment::Testing,
            port: 0,
            log_level: "warn".to_string(),
            ..Self::new()
        }
    }

    /// All interfaces on 8080
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::new(),
            Environment::Testing => Self::testing(),
            Environment::Production => Self::production(),
        }
    }

    /// `host:port` as handed to the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfigTrait for AppConfig {
    /// `SHELF_ENV` picks the preset, the other variables override it
    fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var(ENV_ENVIRONMENT) {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Development,
        };
        let mut config = Self::for_environment(environment);

        if let Ok(host) = env::var(ENV_HOST) {
            config.host = host;
        }
        if let Ok(port) = env::var(ENV_PORT) {
            config.port = port.trim().parse().map_err(|_| {
                ConfigError::invalid_value("port", port.clone(), "valid port number (0-65535)")
            })?;
        }
        if let Ok(level) = env::var(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_ascii_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::missing_required(
                "host",
                format!("set {} to an interface address", ENV_HOST),
            ));
        }

        // Port 0 asks the OS for a free port, which only makes sense under test
        if !self.environment.is_testing() && self.port == 0 {
            return Err(ConfigError::invalid_value(
                "port",
                self.port.to_string(),
                "port between 1 and 65535",
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::invalid_value(
                "log_level",
                self.log_level.clone(),
                format!("one of: {}", VALID_LOG_LEVELS.join(", ")),
            ));
        }

        Ok(())
    }

    fn config_sources(&self) -> HashMap<String, ConfigSource> {
        let preset = Self::for_environment(self.environment);
        [
            ("environment", ENV_ENVIRONMENT, Environment::Development.to_string()),
            ("host", ENV_HOST, preset.host),
            ("port", ENV_PORT, preset.port.to_string()),
            ("log_level", ENV_LOG_LEVEL, preset.log_level),
        ]
        .into_iter()
        .map(|(field, var, default)| (field.to_string(), ConfigSource::resolve(var, default)))
        .collect()
    }
}
