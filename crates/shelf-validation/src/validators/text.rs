//! Text field validator

use crate::error::{ValidationError, ValidationResult};
use crate::predicates::{is_valid_text, DEFAULT_MAX_TEXT_LENGTH};
use crate::traits::ValidationRule;

/// Requires visible content and bounds the raw length
#[derive(Debug, Clone)]
pub struct TextValidator {
    /// Maximum length in characters (inclusive)
    pub max_length: usize,
    /// Custom error message
    pub message: Option<String>,
}

impl TextValidator {
    pub fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_TEXT_LENGTH,
            message: None,
        }
    }

    /// Set maximum length constraint
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn error(&self, field: &str, default: String, code: &str) -> ValidationError {
        let message = self.message.clone().unwrap_or(default);
        ValidationError::with_code(field, message, code)
    }
}

impl Default for TextValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<str> for TextValidator {
    fn check(&self, field: &str, value: &str) -> ValidationResult<()> {
        if is_valid_text(value, self.max_length) {
            return Ok(());
        }

        let error = if value.trim().is_empty() {
            self.error(field, format!("{} is required", field), "text_empty")
        } else {
            self.error(
                field,
                format!("{} must be at most {} characters long", field, self.max_length),
                "text_too_long",
            )
        };
        Err(error.into())
    }

    fn rule_name(&self) -> &'static str {
        "text"
    }
}
