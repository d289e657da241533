//! Source value classification and loose numeric coercion.
//!
//! Sources are `serde_json::Value`s; an absent value (a missing key, or an
//! explicitly absent root) is `None`.

use serde_json::Value;

/// Structural category of a source value.
///
/// Only used to drive container checks in the matcher. Booleans have no
/// dedicated category and land in [`ValueKind::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Undefined,
    Number,
    String,
    Object,
    Array,
    None,
}

impl ValueKind {
    /// Classifies a possibly absent source value.
    pub fn of(source: Option<&Value>) -> Self {
        match source {
            Some(Value::Array(_)) => ValueKind::Array,
            Some(Value::Null) => ValueKind::Null,
            None => ValueKind::Undefined,
            Some(Value::Object(_)) => ValueKind::Object,
            Some(Value::String(_)) => ValueKind::String,
            Some(Value::Number(_)) => ValueKind::Number,
            Some(Value::Bool(_)) => ValueKind::None,
        }
    }
}

/// Returns true if `source` satisfies the `Number` marker.
///
/// The empty string and null are rejected outright; everything else is
/// accepted when its numeric coercion is not NaN.
pub fn is_loose_number(source: Option<&Value>) -> bool {
    match source {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) if s.is_empty() => false,
        Some(value) => !to_number(value).is_nan(),
    }
}

/// Coerces a value to a number the way a script engine's `ToNumber` does.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(_) | Value::Object(_) => string_to_number(&to_text(value)),
    }
}

/// Renders a value as the text used for numeric coercion.
///
/// Arrays join their elements with `,` (null elements render empty), keyed
/// objects render as `[object Object]`.
fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(u)) => u.to_string(),
            _ => format_number(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(to_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Parses numeric text: decimal literals, signed `Infinity`, and unsigned
/// `0x`/`0o`/`0b` integers. Surrounding whitespace is ignored and blank text
/// is zero. Returns NaN for anything else.
pub fn string_to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let prefixes = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    for (prefix, radix) in prefixes {
        if let Some(digits) = text.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    if is_decimal_literal(text) {
        text.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` with at least one
/// mantissa digit. Rejects the `inf`/`nan` spellings `str::parse` accepts.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Formats a number the way it prints in error messages: integral values
/// without a fractional part, `-0` as `0`, spelled-out infinities, and
/// exponent notation (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_containers_and_scalars() {
        assert_eq!(ValueKind::of(Some(&json!([1]))), ValueKind::Array);
        assert_eq!(ValueKind::of(Some(&json!({}))), ValueKind::Object);
        assert_eq!(ValueKind::of(Some(&json!(null))), ValueKind::Null);
        assert_eq!(ValueKind::of(None), ValueKind::Undefined);
        assert_eq!(ValueKind::of(Some(&json!("x"))), ValueKind::String);
        assert_eq!(ValueKind::of(Some(&json!(3))), ValueKind::Number);
        assert_eq!(ValueKind::of(Some(&json!(true))), ValueKind::None);
    }

    #[test]
    fn test_decimal_strings() {
        assert_eq!(string_to_number("10"), 10.0);
        assert_eq!(string_to_number("  -3.5e2 "), -350.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("5."), 5.0);
        assert_eq!(string_to_number("   "), 0.0);
    }

    #[test]
    fn test_prefixed_and_infinite_strings() {
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("-0x10").is_nan());
        assert!(string_to_number("0x").is_nan());
    }

    #[test]
    fn test_rejected_strings() {
        let rejected = [
            "not a number",
            "NaN",
            "inf",
            "infinity",
            "1_000",
            "1e",
            ".",
            "+",
            "1.2.3",
        ];
        for text in rejected {
            assert!(string_to_number(text).is_nan(), "{text} should be NaN");
        }
    }

    #[test]
    fn test_array_coercion() {
        assert_eq!(to_number(&json!([])), 0.0);
        assert_eq!(to_number(&json!(["5"])), 5.0);
        assert_eq!(to_number(&json!([[7]])), 7.0);
        assert_eq!(to_number(&json!([null])), 0.0);
        assert!(to_number(&json!([1, 2])).is_nan());
        assert!(to_number(&json!({"a": 1})).is_nan());
    }

    #[test]
    fn test_loose_number_predicate() {
        assert!(is_loose_number(Some(&json!(10))));
        assert!(is_loose_number(Some(&json!("10"))));
        assert!(is_loose_number(Some(&json!(true))));
        assert!(!is_loose_number(Some(&json!(""))));
        assert!(!is_loose_number(Some(&json!(null))));
        assert!(!is_loose_number(None));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}
