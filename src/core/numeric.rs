//! Tolerant coercion of raw dataset values into `f64`.
//!
//! Chart data arrives loosely typed. Nothing here fails: values that cannot be
//! read as numbers become NaN and flow through the fit unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Reads a value as a float, parsing strings by their longest numeric prefix.
///
/// `"12.5px"` reads as `12.5`, `"  -3e2"` as `-300.0`, `"Infinity"` as
/// positive infinity. Booleans, arrays, objects, `null` and strings without a
/// numeric prefix read as NaN.
#[must_use]
pub fn parse_float(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_float_prefix(text),
        _ => f64::NAN,
    }
}

/// Parses the longest leading float literal of `text` after leading
/// whitespace, ignoring any trailing characters.
///
/// Returns NaN when no digits lead the string.
#[must_use]
pub fn parse_float_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - integer_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        digits += cursor - fraction_start;
        if digits > 0 {
            end = cursor;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Reads a value as epoch milliseconds.
///
/// Numbers are taken as epoch milliseconds already. Strings are accepted as
/// RFC 3339, as a naive date-time (interpreted as UTC) or as a bare
/// `YYYY-MM-DD` date at UTC midnight.
#[must_use]
pub fn parse_epoch_millis(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_datetime_millis(text.trim()).unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn parse_datetime_millis(text: &str) -> Option<f64> {
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time.timestamp_millis() as f64);
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(text, format) {
            return Some(time.and_utc().timestamp_millis() as f64);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|time| time.and_utc().timestamp_millis() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefix_parsing_matches_loose_float_rules() {
        assert_eq!(parse_float_prefix("12.5px"), 12.5);
        assert_eq!(parse_float_prefix("  -3e2"), -300.0);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("7."), 7.0);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix("-.").is_nan());
        assert!(parse_float_prefix("").is_nan());
    }

    #[test]
    fn non_scalar_values_are_nan() {
        assert!(parse_float(&json!(null)).is_nan());
        assert!(parse_float(&json!(true)).is_nan());
        assert!(parse_float(&json!({"y": 1})).is_nan());
        assert_eq!(parse_float(&json!(4)), 4.0);
    }

    #[test]
    fn dates_parse_to_epoch_millis() {
        assert_eq!(parse_epoch_millis(&json!("1970-01-02")), 86_400_000.0);
        assert_eq!(parse_epoch_millis(&json!("1970-01-01T00:00:01Z")), 1_000.0);
        assert_eq!(
            parse_epoch_millis(&json!("1970-01-01T00:00:01.500")),
            1_500.0
        );
        assert_eq!(parse_epoch_millis(&json!(1_234)), 1_234.0);
        assert!(parse_epoch_millis(&json!("yesterday")).is_nan());
    }
}
