//! Plain predicate checks. Each returns `false` for an invalid value and
//! never panics or errors.

use chrono::Datelike;

/// Default upper bound on text field length, in characters.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 100;

/// Earliest publication year accepted.
pub const MIN_YEAR: i64 = 1500;

/// True iff the trimmed text is non-empty and the raw text is at most
/// `max_length` characters long.
pub fn is_valid_text(s: &str, max_length: usize) -> bool {
    !s.trim().is_empty() && s.chars().count() <= max_length
}

/// The local calendar year, read from the clock on every call.
pub fn current_year() -> i64 {
    i64::from(chrono::Local::now().year())
}

/// True iff `MIN_YEAR <= year <= current_year()`.
///
/// The upper bound moves with the wall clock: a year rejected today is
/// accepted once the calendar reaches it.
pub fn is_valid_year(year: i64) -> bool {
    is_valid_year_at(year, current_year())
}

/// Same as [`is_valid_year`] with the current year supplied by the caller.
pub fn is_valid_year_at(year: i64, current_year: i64) -> bool {
    (MIN_YEAR..=current_year).contains(&year)
}

/// True iff `min <= n <= max`. NaN is never in range.
pub fn is_in_range(n: f64, min: f64, max: f64) -> bool {
    min <= n && n <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_requires_visible_content() {
        assert!(is_valid_text("Dune", DEFAULT_MAX_TEXT_LENGTH));
        assert!(is_valid_text("  Dune  ", DEFAULT_MAX_TEXT_LENGTH));
        assert!(!is_valid_text("", DEFAULT_MAX_TEXT_LENGTH));
        assert!(!is_valid_text("   \t\n", DEFAULT_MAX_TEXT_LENGTH));
    }

    #[test]
    fn test_text_length_limit_counts_raw_characters() {
        let exact = "a".repeat(100);
        let over = "a".repeat(101);
        assert!(is_valid_text(&exact, 100));
        assert!(!is_valid_text(&over, 100));

        // Padding counts toward the limit even though it is trimmed for emptiness
        let padded = format!(" {} ", "a".repeat(99));
        assert!(!is_valid_text(&padded, 100));

        // Multi-byte characters count once
        let accents = "é".repeat(100);
        assert!(is_valid_text(&accents, 100));
    }

    #[test]
    fn test_year_boundaries() {
        assert!(is_valid_year_at(1500, 2024));
        assert!(!is_valid_year_at(1499, 2024));
        assert!(is_valid_year_at(2024, 2024));
        assert!(!is_valid_year_at(2025, 2024));
        assert!(!is_valid_year_at(0, 2024));
        assert!(!is_valid_year_at(-1965, 2024));
    }

    #[test]
    fn test_year_uses_wall_clock() {
        let now = current_year();
        assert!(is_valid_year(now));
        assert!(!is_valid_year(now + 1));
        assert!(is_valid_year(MIN_YEAR));
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(is_in_range(1.0, 1.0, 100.0));
        assert!(is_in_range(100.0, 1.0, 100.0));
        assert!(is_in_range(2.5, 1.0, 100.0));
        assert!(!is_in_range(0.99, 1.0, 100.0));
        assert!(!is_in_range(100.01, 1.0, 100.0));
        assert!(!is_in_range(f64::NAN, 1.0, 100.0));
        assert!(!is_in_range(f64::INFINITY, 1.0, 100.0));
    }
}
