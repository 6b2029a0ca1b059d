//! # shelf-validation
//!
//! Field validation for resource submissions. The predicates in
//! [`predicates`] are the plain yes/no checks; the rule objects in
//! [`validators`] wrap them and describe *why* a value was refused.

pub mod error;
pub mod predicates;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use error::{ValidationError, ValidationErrors, ValidationResult};
pub use predicates::{
    current_year, is_in_range, is_valid_text, is_valid_year, is_valid_year_at,
    DEFAULT_MAX_TEXT_LENGTH, MIN_YEAR,
};
pub use traits::ValidationRule;

// Built-in validators
pub use validators::{
    numeric::{NumericValidator, RangeValidator},
    text::TextValidator,
    year::YearValidator,
};
