use std::fmt;

use serde_json::{Number, Value};

/// The JSON type of a value, as reported back to the quiz author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(n) if is_integer_literal(n) => JsonKind::Integer,
            Value::Number(_) => JsonKind::Float,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Float => "float",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

/// Whether `n` was written without a fraction or exponent.
///
/// Relies on serde_json keeping the literal text, so `-0` and integers wider
/// than 64 bits still count as integers.
pub(crate) fn is_integer_literal(n: &Number) -> bool {
    !n.to_string().contains(['.', 'e', 'E'])
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Boolean);
        assert_eq!(JsonKind::of(&json!(3)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(-3)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Float);
        assert_eq!(JsonKind::of(&json!("a")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_integer_literals_beyond_64_bits() {
        let negative_zero: Value = serde_json::from_str("-0").unwrap();
        let huge: Value = serde_json::from_str("18446744073709551616").unwrap();
        let exponent: Value = serde_json::from_str("1e2").unwrap();

        assert_eq!(JsonKind::of(&negative_zero), JsonKind::Integer);
        assert_eq!(JsonKind::of(&huge), JsonKind::Integer);
        assert_eq!(JsonKind::of(&exponent), JsonKind::Float);
    }

    #[test]
    fn test_whole_float_is_not_integer() {
        let value: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(JsonKind::of(&value), JsonKind::Float);
    }
}
