//! HTTP server configuration
//!
//! Loaded from `HTTP_*` environment variables through the same
//! [`AppConfigTrait`] contract as the application config.

use super::defaults::HttpDefaults;
use serde::{Deserialize, Serialize};
use shelf_core::{AppConfigTrait, ConfigError, ConfigSource};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_REQUEST_TIMEOUT: &str = "HTTP_REQUEST_TIMEOUT";
pub const ENV_MAX_REQUEST_SIZE: &str = "HTTP_MAX_REQUEST_SIZE";
pub const ENV_ENABLE_TRACING: &str = "HTTP_ENABLE_TRACING";
pub const ENV_HEALTH_CHECK_PATH: &str = "HTTP_HEALTH_CHECK_PATH";
pub const ENV_SESSION_COOKIE: &str = "HTTP_SESSION_COOKIE";
pub const ENV_SESSION_IDLE_TIMEOUT: &str = "HTTP_SESSION_IDLE_TIMEOUT";
pub const ENV_MAX_SESSIONS: &str = "HTTP_MAX_SESSIONS";

/// HTTP server specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes
    pub max_request_size: usize,
    /// Enable request tracing
    pub enable_tracing: bool,
    /// Health check endpoint path
    pub health_check_path: String,
    /// Name of the cookie carrying the session id
    pub session_cookie_name: String,
    /// Seconds a session may sit unused before it is dropped
    pub session_idle_timeout_secs: u64,
    /// Live sessions kept at most; the least recently used go first
    pub max_sessions: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: HttpDefaults::REQUEST_TIMEOUT_SECS,
            max_request_size: HttpDefaults::MAX_REQUEST_SIZE,
            enable_tracing: HttpDefaults::ENABLE_TRACING,
            health_check_path: HttpDefaults::HEALTH_CHECK_PATH.to_string(),
            session_cookie_name: HttpDefaults::SESSION_COOKIE_NAME.to_string(),
            session_idle_timeout_secs: HttpDefaults::SESSION_IDLE_TIMEOUT_SECS,
            max_sessions: HttpDefaults::MAX_SESSIONS,
        }
    }
}

impl AppConfigTrait for HttpConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::validation_failed(
                "Request timeout must be greater than 0",
            ));
        }

        if self.max_request_size == 0 {
            return Err(ConfigError::validation_failed(
                "Maximum request size must be greater than 0",
            ));
        }

        if self.health_check_path.is_empty() || !self.health_check_path.starts_with('/') {
            return Err(ConfigError::validation_failed(
                "Health check path must be non-empty and start with '/'",
            ));
        }

        if HttpDefaults::RESERVED_PATHS.contains(&self.health_check_path.as_str()) {
            return Err(ConfigError::invalid_value(
                "health_check_path",
                self.health_check_path.clone(),
                format!("path other than {}", HttpDefaults::RESERVED_PATHS.join(" and ")),
            ));
        }

        if self.session_idle_timeout_secs == 0 {
            return Err(ConfigError::validation_failed(
                "Session idle timeout must be greater than 0",
            ));
        }

        if self.max_sessions == 0 {
            return Err(ConfigError::validation_failed(
                "Maximum session count must be greater than 0",
            ));
        }

        let cookie_ok = !self.session_cookie_name.is_empty()
            && self
                .session_cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !cookie_ok {
            return Err(ConfigError::invalid_value(
                "session_cookie_name",
                self.session_cookie_name.clone(),
                "letters, digits, '_' or '-'",
            ));
        }

        Ok(())
    }

    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = HttpConfig {
            request_timeout_secs: parse_env(
                ENV_REQUEST_TIMEOUT,
                "request_timeout_secs",
                defaults.request_timeout_secs,
                "valid number of seconds",
            )?,
            max_request_size: parse_env(
                ENV_MAX_REQUEST_SIZE,
                "max_request_size",
                defaults.max_request_size,
                "valid number of bytes",
            )?,
            enable_tracing: parse_env(
                ENV_ENABLE_TRACING,
                "enable_tracing",
                defaults.enable_tracing,
                "true or false",
            )?,
            health_check_path: env::var(ENV_HEALTH_CHECK_PATH)
                .unwrap_or(defaults.health_check_path),
            session_cookie_name: env::var(ENV_SESSION_COOKIE)
                .unwrap_or(defaults.session_cookie_name),
            session_idle_timeout_secs: parse_env(
                ENV_SESSION_IDLE_TIMEOUT,
                "session_idle_timeout_secs",
                defaults.session_idle_timeout_secs,
                "valid number of seconds",
            )?,
            max_sessions: parse_env(
                ENV_MAX_SESSIONS,
                "max_sessions",
                defaults.max_sessions,
                "valid session count",
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    fn config_sources(&self) -> HashMap<String, ConfigSource> {
        let mut sources = HashMap::new();
        sources.insert(
            "request_timeout_secs".to_string(),
            ConfigSource::resolve(
                ENV_REQUEST_TIMEOUT,
                HttpDefaults::REQUEST_TIMEOUT_SECS.to_string(),
            ),
        );
        sources.insert(
            "max_request_size".to_string(),
            ConfigSource::resolve(
                ENV_MAX_REQUEST_SIZE,
                HttpDefaults::MAX_REQUEST_SIZE.to_string(),
            ),
        );
        sources.insert(
            "enable_tracing".to_string(),
            ConfigSource::resolve(ENV_ENABLE_TRACING, HttpDefaults::ENABLE_TRACING.to_string()),
        );
        sources.insert(
            "health_check_path".to_string(),
            ConfigSource::resolve(ENV_HEALTH_CHECK_PATH, HttpDefaults::HEALTH_CHECK_PATH),
        );
        sources.insert(
            "session_cookie_name".to_string(),
            ConfigSource::resolve(ENV_SESSION_COOKIE, HttpDefaults::SESSION_COOKIE_NAME),
        );
        sources.insert(
            "session_idle_timeout_secs".to_string(),
            ConfigSource::resolve(
                ENV_SESSION_IDLE_TIMEOUT,
                HttpDefaults::SESSION_IDLE_TIMEOUT_SECS.to_string(),
            ),
        );
        sources.insert(
            "max_sessions".to_string(),
            ConfigSource::resolve(ENV_MAX_SESSIONS, HttpDefaults::MAX_SESSIONS.to_string()),
        );
        sources
    }
}

impl HttpConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }
}

fn parse_env<T: FromStr>(
    var: &str,
    field: &str,
    default: T,
    expected: &str,
) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::invalid_value(field, value.clone(), expected)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            ENV_REQUEST_TIMEOUT,
            ENV_MAX_REQUEST_SIZE,
            ENV_ENABLE_TRACING,
            ENV_HEALTH_CHECK_PATH,
            ENV_SESSION_COOKIE,
            ENV_SESSION_IDLE_TIMEOUT,
            ENV_MAX_SESSIONS,
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = HttpConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.session_cookie_name, "shelf_session");
    }

    #[test]
    fn test_validation_failures() {
        let bad_timeout = HttpConfig {
            request_timeout_secs: 0,
            ..HttpConfig::default()
        };
        assert!(bad_timeout.validate().is_err());

        let bad_path = HttpConfig {
            health_check_path: "health".to_string(),
            ..HttpConfig::default()
        };
        assert!(bad_path.validate().is_err());

        let bad_cookie = HttpConfig {
            session_cookie_name: "my session".to_string(),
            ..HttpConfig::default()
        };
        assert!(matches!(
            bad_cookie.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_health_path_cannot_shadow_builtin_routes() {
        for path in ["/", "/api/resources"] {
            let config = HttpConfig {
                health_check_path: path.to_string(),
                ..HttpConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid { ref field, .. }) if field == "health_check_path"),
                "{} accepted",
                path
            );
        }

        let nested = HttpConfig {
            health_check_path: "/api/health".to_string(),
            ..HttpConfig::default()
        };
        assert!(nested.validate().is_ok());
    }

    #[test]
    fn test_session_limits_must_be_positive() {
        let no_idle = HttpConfig {
            session_idle_timeout_secs: 0,
            ..HttpConfig::default()
        };
        assert!(no_idle.validate().is_err());

        let no_sessions = HttpConfig {
            max_sessions: 0,
            ..HttpConfig::default()
        };
        assert!(no_sessions.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var(ENV_REQUEST_TIMEOUT, "5");
        env::set_var(ENV_ENABLE_TRACING, "false");
        env::set_var(ENV_HEALTH_CHECK_PATH, "/status");
        env::set_var(ENV_MAX_SESSIONS, "50");

        let config = HttpConfig::from_env().unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert!(!config.enable_tracing);
        assert_eq!(config.health_check_path, "/status");
        assert_eq!(config.max_request_size, HttpDefaults::MAX_REQUEST_SIZE);
        assert_eq!(config.max_sessions, 50);
        assert_eq!(config.session_idle_timeout(), Duration::from_secs(24 * 60));

        let sources = config.config_sources();
        assert!(sources["request_timeout_secs"].is_env_var());
        assert!(sources["max_request_size"].is_default());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        clear_env();
        env::set_var(ENV_MAX_REQUEST_SIZE, "lots");

        let err = HttpConfig::from_env().unwrap_err();
        assert_eq!(
            err,
            ConfigError::invalid_value("max_request_size", "lots", "valid number of bytes")
        );

        clear_env();
    }
}
