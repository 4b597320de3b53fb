// File: crates/metrics-core/src/record.rs
// Summary: Timestamp/value field extraction from raw JSON records.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Extract a UTC instant from `record[field]`.
///
/// Accepts RFC 3339 strings, bare `YYYY-MM-DDTHH:MM:SS[.f]` strings, and
/// epoch-millisecond numbers. Anything else (missing field, wrong type,
/// unparsable text) is `None`; the record is then excluded from bucketing.
pub fn timestamp_field(record: &Value, field: &str) -> Option<DateTime<Utc>> {
    match record.get(field)? {
        Value::String(s) => parse_instant(s),
        Value::Number(n) => n.as_i64().and_then(millis_to_utc),
        _ => None,
    }
}

/// Parse a timestamp string: RFC 3339 first, then an offset-less ISO form
/// (taken as UTC), then bare epoch-millisecond digits.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    s.parse::<i64>().ok().and_then(millis_to_utc)
}

/// Extract a numeric contribution from `record[field]`. Missing fields and
/// non-numeric data contribute 0 rather than erroring.
pub fn value_field(record: &Value, field: &str) -> f64 {
    match record.get(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn millis_to_utc(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}
