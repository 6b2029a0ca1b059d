use std::fmt;

/// Where a configuration value came from, reported at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Overridden by the named environment variable
    EnvVar(String),
    /// Built-in default, kept for display
    Default(String),
}

impl ConfigSource {
    /// `EnvVar(var)` when `var` is set in the process environment, otherwise
    /// `Default(default)`
    pub fn resolve(var: &str, default: impl Into<String>) -> Self {
        match std::env::var_os(var) {
            Some(_) => ConfigSource::EnvVar(var.to_string()),
            None => ConfigSource::Default(default.into()),
        }
    }

    pub fn is_env_var(&self) -> bool {
        matches!(self, ConfigSource::EnvVar(_))
    }

    pub fn is_default(&self) -> bool {
        !self.is_env_var()
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::EnvVar(var) => write!(f, "env ${}", var),
            ConfigSource::Default(value) => write!(f, "default ({})", value),
        }
    }
}
