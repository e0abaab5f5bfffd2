//! Enum text parsing
//!
//! Turns comma-separated text into typed literals. Coercion is best effort:
//! a token that does not fit the field's type is kept as a string.

use crate::schema::JsonType;
use serde_json::Value;

/// Parse comma-separated enum text into literals typed by `field_type`
///
/// Tokens are trimmed and empty tokens dropped; order is preserved.
pub fn parse_enum_values(text: &str, field_type: Option<JsonType>) -> Vec<Value> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| coerce_literal(token, field_type))
        .collect()
}

/// Coerce one trimmed token
pub fn coerce_literal(token: &str, field_type: Option<JsonType>) -> Value {
    match field_type {
        Some(t) if t.is_numeric() => coerce_number(token),
        Some(JsonType::Boolean) => coerce_bool(token),
        _ => Value::String(token.to_string()),
    }
}

fn coerce_number(token: &str) -> Value {
    let parsed = parse_radix(token).or_else(|| token.parse::<f64>().ok());
    match parsed {
        Some(n) if n.is_finite() => {
            number_value(n).unwrap_or_else(|| Value::String(token.to_string()))
        }
        _ => Value::String(token.to_string()),
    }
}

/// Unsigned `0x`, `0b` and `0o` literals
fn parse_radix(token: &str) -> Option<f64> {
    let radix = match token.get(..2)? {
        "0x" | "0X" => 16,
        "0b" | "0B" => 2,
        "0o" | "0O" => 8,
        _ => return None,
    };
    let digits = &token[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u128::from_str_radix(digits, radix).ok().map(|v| v as f64)
}

/// Integral values print as plain integers (`2`, not `2.0` or `1e+16`)
///
/// `f64` display gives the shortest round-trip digits padded with zeros,
/// the same text a JavaScript number prints. Integers past `u64` keep
/// exponent form.
fn number_value(n: f64) -> Option<Value> {
    if n.fract() == 0.0 {
        let digits = format!("{n}");
        if let Ok(i) = digits.parse::<i64>() {
            return Some(Value::from(i));
        }
        if let Ok(u) = digits.parse::<u64>() {
            return Some(Value::from(u));
        }
    }
    serde_json::Number::from_f64(n).map(Value::Number)
}

fn coerce_bool(token: &str) -> Value {
    match token.to_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_number_enum_mixed_coercion() {
        let values = parse_enum_values("1, 2, x", Some(JsonType::Number));
        assert_eq!(values, vec![json!(1), json!(2), json!("x")]);
    }

    #[test]
    fn test_boolean_enum_case_insensitive() {
        let values = parse_enum_values("True, false, maybe", Some(JsonType::Boolean));
        assert_eq!(values, vec![json!(true), json!(false), json!("maybe")]);
    }

    #[test]
    fn test_string_enum_keeps_tokens() {
        let values = parse_enum_values(" red ,green,  blue", Some(JsonType::String));
        assert_eq!(values, vec![json!("red"), json!("green"), json!("blue")]);
    }

    #[test]
    fn test_untyped_enum_keeps_strings() {
        let values = parse_enum_values("1, true", None);
        assert_eq!(values, vec![json!("1"), json!("true")]);
    }

    #[test]
    fn test_empty_tokens_dropped() {
        assert!(parse_enum_values("", Some(JsonType::String)).is_empty());
        assert!(parse_enum_values(" , ,  ", Some(JsonType::Integer)).is_empty());
        assert_eq!(
            parse_enum_values("a,,b,", None),
            vec![json!("a"), json!("b")]
        );
    }

    #[test_case("3", json!(3); "integer")]
    #[test_case("-7", json!(-7); "negative")]
    #[test_case("2.0", json!(2); "integral float")]
    #[test_case("1.5", json!(1.5); "fraction")]
    #[test_case("1e3", json!(1000); "exponent")]
    #[test_case("1e16", json!(10_000_000_000_000_000_i64); "large exponent")]
    #[test_case("12345678901234567890", json!(12_345_678_901_234_567_000_u64); "beyond i64")]
    #[test_case("-0", json!(0); "negative zero")]
    #[test_case("0x1F", json!(31); "hex")]
    #[test_case("0X1f", json!(31); "hex upper prefix")]
    #[test_case("0b101", json!(5); "binary")]
    #[test_case("0o17", json!(15); "octal")]
    #[test_case("0x", json!("0x"); "bare prefix stays text")]
    #[test_case("0x+1", json!("0x+1"); "signed radix stays text")]
    #[test_case("-0x1F", json!("-0x1F"); "negative radix stays text")]
    #[test_case("inf", json!("inf"); "infinity stays text")]
    #[test_case("NaN", json!("NaN"); "nan stays text")]
    #[test_case("12abc", json!("12abc"); "garbage stays text")]
    fn test_coerce_number(token: &str, expected: Value) {
        assert_eq!(coerce_literal(token, Some(JsonType::Integer)), expected);
    }

    #[test]
    fn test_object_type_keeps_strings() {
        assert_eq!(coerce_literal("1", Some(JsonType::Object)), json!("1"));
    }
}
