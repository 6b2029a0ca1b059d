//! Raw submitted fields and their coercion to typed values

use serde_json::Value;
use std::collections::HashMap;

pub const FIELD_KIND: &str = "itemType";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_AUTHOR: &str = "author";
pub const FIELD_YEAR: &str = "year";
pub const FIELD_SIZE: &str = "size";
pub const FIELD_PAGES: &str = "pages";

/// Field name to untyped value, exactly as submitted, in submission order.
///
/// A field submitted twice keeps its first position and its last value.
/// Accessors never fail: a missing or unusable value coerces to the empty
/// string or zero, and validation decides what to make of that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSubmission {
    fields: HashMap<String, Value>,
    order: Vec<String>,
}

impl RawSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        if !self.fields.contains_key(&field) {
            self.order.push(field.clone());
        }
        self.fields.insert(field, value.into());
    }

    /// Fields in the order they were first submitted
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.order
            .iter()
            .filter_map(|field| self.fields.get_key_value(field))
            .map(|(field, value)| (field.as_str(), value))
    }

    /// Build from decoded form pairs; every value is text
    pub fn from_form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect()
    }

    /// Build from a JSON object. Anything else yields an empty submission.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => Self::new(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field as text. Numbers render as their decimal form.
    pub fn text(&self, field: &str) -> String {
        match self.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(true)) => "1".to_string(),
            _ => String::new(),
        }
    }

    /// Field as an integer. Fractions truncate toward zero.
    pub fn integer(&self, field: &str) -> i64 {
        match self.get(field) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(truncate))
                .unwrap_or(0),
            Some(Value::String(s)) => parse_integer(s),
            Some(Value::Bool(b)) => i64::from(*b),
            _ => 0,
        }
    }

    /// Field as a float. Non-finite input coerces to zero.
    pub fn float(&self, field: &str) -> f64 {
        match self.get(field) {
            Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
            Some(Value::String(s)) => parse_float(s),
            Some(Value::Bool(b)) => f64::from(u8::from(*b)),
            _ => 0.0,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for RawSubmission {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut raw = Self::new();
        for (field, value) in iter {
            raw.insert(field, value);
        }
        raw
    }
}

fn truncate(f: f64) -> Option<i64> {
    // `as` saturates, so out-of-range magnitudes pin to i64::MIN/MAX
    f.is_finite().then(|| f.trunc() as i64)
}

fn parse_integer(s: &str) -> i64 {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        .unwrap_or(0)
}

fn parse_float(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let raw = RawSubmission::new();
        assert_eq!(raw.text(FIELD_TITLE), "");
        assert_eq!(raw.integer(FIELD_YEAR), 0);
        assert_eq!(raw.float(FIELD_SIZE), 0.0);
        assert_eq!(raw.integer(FIELD_PAGES), 0);
    }

    #[test]
    fn test_form_values_coerce() {
        let raw = RawSubmission::from_form([
            ("title", "Dune"),
            ("year", " 1965 "),
            ("size", "2.5"),
            ("pages", "412.9"),
        ]);
        assert_eq!(raw.text(FIELD_TITLE), "Dune");
        assert_eq!(raw.integer(FIELD_YEAR), 1965);
        assert_eq!(raw.float(FIELD_SIZE), 2.5);
        assert_eq!(raw.integer(FIELD_PAGES), 412);
    }

    #[test]
    fn test_unparseable_numbers_become_zero() {
        let raw = RawSubmission::from_form([
            ("year", "nineteen"),
            ("size", "NaN"),
            ("pages", ""),
        ]);
        assert_eq!(raw.integer(FIELD_YEAR), 0);
        assert_eq!(raw.float(FIELD_SIZE), 0.0);
        assert_eq!(raw.integer(FIELD_PAGES), 0);

        let inf = RawSubmission::new().with("size", "inf");
        assert_eq!(inf.float(FIELD_SIZE), 0.0);
    }

    #[test]
    fn test_json_values_coerce() {
        let raw = RawSubmission::from_json(json!({
            "title": 1984,
            "year": 1965.7,
            "size": 2.5,
            "pages": -3,
            "author": null,
        }));
        assert_eq!(raw.text(FIELD_TITLE), "1984");
        assert_eq!(raw.text(FIELD_AUTHOR), "");
        assert_eq!(raw.integer(FIELD_YEAR), 1965);
        assert_eq!(raw.float(FIELD_SIZE), 2.5);
        assert_eq!(raw.integer(FIELD_PAGES), -3);
        assert_eq!(raw.len(), 5);
    }

    #[test]
    fn test_non_object_json_is_empty() {
        assert!(RawSubmission::from_json(json!(["title", "Dune"])).is_empty());
    }

    #[test]
    fn test_fields_keep_submission_order() {
        let raw = RawSubmission::from_form([
            ("itemType", "audio"),
            ("title", "Dune"),
            ("year", "1965"),
            ("itemType", "digital"),
        ]);

        let fields: Vec<_> = raw.iter().map(|(name, _)| name).collect();
        assert_eq!(fields, vec!["itemType", "title", "year"]);
        assert_eq!(raw.text(FIELD_KIND), "digital");
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn test_negative_fraction_truncates_toward_zero() {
        let raw = RawSubmission::new().with("pages", "-2.7");
        assert_eq!(raw.integer(FIELD_PAGES), -2);
    }
}
