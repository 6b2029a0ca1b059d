use thiserror::Error;

/// Why a configuration could not be loaded or was refused
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be set: {hint}")]
    Missing { field: String, hint: String },

    #[error("{field} = '{value}', expected {expected}")]
    Invalid {
        field: String,
        value: String,
        expected: String,
    },

    #[error("inconsistent configuration: {reason}")]
    Rejected { reason: String },
}

impl ConfigError {
    pub fn missing_required(field: impl Into<String>, hint: impl Into<String>) -> Self {
        ConfigError::Missing {
            field: field.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn validation_failed(reason: impl Into<String>) -> Self {
        ConfigError::Rejected {
            reason: reason.into(),
        }
    }

    /// The offending field, when the error concerns a single one
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Missing { field, .. } | ConfigError::Invalid { field, .. } => Some(field),
            ConfigError::Rejected { .. } => None,
        }
    }
}
