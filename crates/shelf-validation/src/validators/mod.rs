//! Built-in validators

pub mod numeric;
pub mod text;
pub mod year;

pub use numeric::{NumericValidator, RangeValidator};
pub use text::TextValidator;
pub use year::YearValidator;
