//! Numeric value validators

use crate::error::{ValidationError, ValidationResult};
use crate::predicates::is_in_range;
use crate::traits::ValidationRule;

/// Inclusive `[min, max]` bound on a number
#[derive(Debug, Clone)]
pub struct RangeValidator {
    /// Minimum value (inclusive)
    pub min: f64,
    /// Maximum value (inclusive)
    pub max: f64,
}

impl RangeValidator {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl ValidationRule<f64> for RangeValidator {
    fn check(&self, field: &str, value: &f64) -> ValidationResult<()> {
        if is_in_range(*value, self.min, self.max) {
            return Ok(());
        }

        Err(ValidationError::with_code(
            field,
            format!("{} must be between {} and {}", field, self.min, self.max),
            "out_of_range",
        )
        .into())
    }

    fn rule_name(&self) -> &'static str {
        "range"
    }
}

/// Requires a finite number and nothing else: zero and negatives pass.
#[derive(Debug, Clone, Default)]
pub struct NumericValidator;

impl NumericValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule<f64> for NumericValidator {
    fn check(&self, field: &str, value: &f64) -> ValidationResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::with_code(
                field,
                format!("{} must be a numeric value", field),
                "not_numeric",
            )
            .into())
        }
    }

    fn rule_name(&self) -> &'static str {
        "numeric"
    }
}
