//! Core validation trait

use crate::error::ValidationResult;

/// A single constraint over one field value.
///
/// `T` is the already-coerced value type (`str`, `i64`, `f64`).
pub trait ValidationRule<T: ?Sized> {
    /// Validate a value, naming `field` in any error
    fn check(&self, field: &str, value: &T) -> ValidationResult<()>;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str;

    /// Boolean view of [`check`](Self::check)
    fn is_valid(&self, value: &T) -> bool {
        self.check(self.rule_name(), value).is_ok()
    }
}
