//! Safe access into record objects.
//!
//! Records are untyped [`serde_json::Value`] objects. Field access walks a
//! dotted path and returns `None` on any missing intermediate, which the rest
//! of the engine treats as a null/empty cell. Nothing here panics.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Resolve a dotted path (`"a.b.c"`) against a record.
///
/// Returns `None` when any intermediate key is missing or a non-object is
/// traversed. A `Value::Null` leaf is returned as `Some(&Null)`; callers that
/// want "missing or null" should match both.
#[must_use]
pub fn field_value<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for key in path.split('.') {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

/// String cast used by search, filtering, and sorting.
///
/// Strings pass through without quotes; null becomes empty; everything else
/// uses its JSON rendering.
#[must_use]
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Numeric coercion for number filters.
///
/// `None` plays the role of NaN: comparisons against it never match.
#[must_use]
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Normalize a date-ish value to an ISO `YYYY-MM-DD` string.
///
/// Accepts ISO dates, ISO datetimes (with or without offset), and RFC 2822
/// datetimes. Anything unparseable yields `None`, which formats as an empty
/// string downstream.
#[must_use]
pub fn iso_date(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim(),
        _ => return None,
    };
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date().format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date().format("%Y-%m-%d").to_string());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return Some(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    None
}

/// True when a cell should count as absent: missing path, JSON null, or an
/// empty string.
#[must_use]
pub fn is_null_or_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_value_flat() {
        let rec = json!({"name": "Ada"});
        assert_eq!(field_value(&rec, "name"), Some(&json!("Ada")));
    }

    #[test]
    fn field_value_nested() {
        let rec = json!({"user": {"address": {"city": "Oslo"}}});
        assert_eq!(field_value(&rec, "user.address.city"), Some(&json!("Oslo")));
    }

    #[test]
    fn field_value_missing_intermediate() {
        let rec = json!({"user": {"name": "Ada"}});
        assert_eq!(field_value(&rec, "user.address.city"), None);
    }

    #[test]
    fn field_value_through_non_object() {
        let rec = json!({"user": 42});
        assert_eq!(field_value(&rec, "user.name"), None);
    }

    #[test]
    fn value_to_string_casts() {
        assert_eq!(value_to_string(&json!("x")), "x");
        assert_eq!(value_to_string(&json!(12)), "12");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&Value::Null), "");
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(numeric_value(&json!(3.5)), Some(3.5));
        assert_eq!(numeric_value(&json!("42")), Some(42.0));
        assert_eq!(numeric_value(&json!(" 7 ")), Some(7.0));
        assert_eq!(numeric_value(&json!(true)), Some(1.0));
        assert_eq!(numeric_value(&json!("abc")), None);
        assert_eq!(numeric_value(&Value::Null), None);
    }

    #[test]
    fn iso_date_plain() {
        assert_eq!(iso_date(&json!("2024-03-07")), Some("2024-03-07".into()));
    }

    #[test]
    fn iso_date_datetime_variants() {
        assert_eq!(
            iso_date(&json!("2024-03-07T10:30:00Z")),
            Some("2024-03-07".into())
        );
        assert_eq!(
            iso_date(&json!("2024-03-07T10:30:00")),
            Some("2024-03-07".into())
        );
        assert_eq!(
            iso_date(&json!("2024-03-07 10:30:00")),
            Some("2024-03-07".into())
        );
        assert_eq!(iso_date(&json!("2024/03/07")), Some("2024-03-07".into()));
    }

    #[test]
    fn iso_date_garbage_is_none() {
        assert_eq!(iso_date(&json!("not a date")), None);
        assert_eq!(iso_date(&json!("")), None);
        assert_eq!(iso_date(&json!(42)), None);
        assert_eq!(iso_date(&Value::Null), None);
    }

    #[test]
    fn null_or_empty_detection() {
        assert!(is_null_or_empty(None));
        assert!(is_null_or_empty(Some(&Value::Null)));
        assert!(is_null_or_empty(Some(&json!(""))));
        assert!(!is_null_or_empty(Some(&json!("x"))));
        assert!(!is_null_or_empty(Some(&json!(0))));
        assert!(!is_null_or_empty(Some(&json!(false))));
    }
}
