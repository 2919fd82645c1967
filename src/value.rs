//! Value shape inference

use serde_json::Value as Json;
use tracing::debug;

/// Shape of a configuration value after inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Sequence(Vec<String>),
}

impl Value {
    /// Infer the shape of a raw INI value.
    ///
    /// A value whose trimmed form starts with `[` or `"` is decoded as a JSON
    /// literal: an array becomes a [`Value::Sequence`], a string becomes a
    /// [`Value::Scalar`] holding the decoded text. Anything that fails to
    /// decode is kept verbatim as a scalar.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !(trimmed.starts_with('[') || trimmed.starts_with('"')) {
            return Value::Scalar(raw.to_string());
        }

        match serde_json::from_str::<Json>(trimmed) {
            Ok(Json::Array(items)) => Value::Sequence(items.into_iter().map(stringify).collect()),
            Ok(Json::String(s)) => Value::Scalar(s),
            Ok(other) => Value::Scalar(other.to_string()),
            Err(e) => {
                debug!(value = raw, error = %e, "not a JSON literal, keeping as scalar");
                Value::Scalar(raw.to_string())
            }
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }
}

/// Strings stay as-is; any other element becomes its compact JSON text.
fn stringify(item: Json) -> String {
    match item {
        Json::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scalar() {
        assert_eq!(Value::infer("localhost"), Value::Scalar("localhost".into()));
    }

    #[test]
    fn test_string_array() {
        assert_eq!(
            Value::infer(r#"["a", "b c"]"#),
            Value::Sequence(vec!["a".into(), "b c".into()])
        );
    }

    #[test]
    fn test_number_array() {
        assert_eq!(
            Value::infer("[5432, 5433]"),
            Value::Sequence(vec!["5432".into(), "5433".into()])
        );
    }

    #[test]
    fn test_large_integers_keep_their_digits() {
        assert_eq!(
            Value::infer("[12345678901234567890123, 18446744073709551616, -99999999999999999999]"),
            Value::Sequence(vec![
                "12345678901234567890123".into(),
                "18446744073709551616".into(),
                "-99999999999999999999".into(),
            ])
        );
    }

    #[test]
    fn test_mixed_array_elements_stringified() {
        assert_eq!(
            Value::infer(r#"[true, null, 1.5, [1, 2], {"k": "v"}, "s"]"#),
            Value::Sequence(vec![
                "true".into(),
                "null".into(),
                "1.5".into(),
                "[1,2]".into(),
                r#"{"k":"v"}"#.into(),
                "s".into(),
            ])
        );
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(Value::infer("[]"), Value::Sequence(vec![]));
    }

    #[test]
    fn test_json_string_is_decoded() {
        assert_eq!(
            Value::infer(r#""tab\there \"quoted\"""#),
            Value::Scalar("tab\there \"quoted\"".into())
        );
    }

    #[test]
    fn test_leading_whitespace_before_literal() {
        assert_eq!(
            Value::infer("  [\"x\"]  "),
            Value::Sequence(vec!["x".into()])
        );
    }

    #[test]
    fn test_invalid_json_falls_back_to_raw() {
        assert_eq!(
            Value::infer("[not valid json"),
            Value::Scalar("[not valid json".into())
        );
        assert_eq!(
            Value::infer(r#""unterminated"#),
            Value::Scalar(r#""unterminated"#.into())
        );
    }

    #[test]
    fn test_fallback_keeps_untrimmed_raw() {
        assert_eq!(Value::infer(" [oops "), Value::Scalar(" [oops ".into()));
    }

    #[test]
    fn test_other_json_shapes_not_detected() {
        // Only `[` and `"` prefixes are probed
        assert_eq!(Value::infer("123"), Value::Scalar("123".into()));
        assert_eq!(Value::infer("true"), Value::Scalar("true".into()));
        assert_eq!(Value::infer(r#"{"a": 1}"#), Value::Scalar(r#"{"a": 1}"#.into()));
    }

    #[test]
    fn test_is_sequence() {
        assert!(Value::infer("[1]").is_sequence());
        assert!(!Value::infer("1").is_sequence());
    }
}
