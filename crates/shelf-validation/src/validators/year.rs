//! Publication year validator

use crate::error::{ValidationError, ValidationResult};
use crate::predicates::{current_year, is_valid_year_at, MIN_YEAR};
use crate::traits::ValidationRule;

/// Accepts years from [`MIN_YEAR`] up to the current calendar year.
///
/// Unless pinned with [`YearValidator::current_year`], the upper bound is
/// read from the clock each time a value is checked.
#[derive(Debug, Clone, Default)]
pub struct YearValidator {
    pinned_year: Option<i64>,
}

impl YearValidator {
    pub fn new() -> Self {
        Self { pinned_year: None }
    }

    /// Fix the upper bound instead of reading the clock
    pub fn current_year(mut self, year: i64) -> Self {
        self.pinned_year = Some(year);
        self
    }

    /// Upper bound in effect right now
    pub fn max_year(&self) -> i64 {
        self.pinned_year.unwrap_or_else(current_year)
    }
}

impl ValidationRule<i64> for YearValidator {
    fn check(&self, field: &str, value: &i64) -> ValidationResult<()> {
        let max = self.max_year();
        if is_valid_year_at(*value, max) {
            Ok(())
        } else {
            Err(ValidationError::with_code(
                field,
                format!("{} must be between {} and {}", field, MIN_YEAR, max),
                "year_out_of_range",
            )
            .into())
        }
    }

    fn rule_name(&self) -> &'static str {
        "year"
    }
}
