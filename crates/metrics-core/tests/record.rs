// File: crates/metrics-core/tests/record.rs
// Purpose: Validate JSON field extraction and its degradation rules.

use chrono::{TimeZone, Utc};
use metrics_core::record::{parse_instant, timestamp_field, value_field};
use serde_json::json;

#[test]
fn rfc3339_strings_parse_to_utc() {
    let rec = json!({ "createdAt": "2025-03-15T10:20:30+02:00" });
    let ts = timestamp_field(&rec, "createdAt").expect("parsable");
    assert_eq!(ts, Utc.with_ymd_and_hms(2025, 3, 15, 8, 20, 30).unwrap());
}

#[test]
fn epoch_millis_numbers_parse() {
    let rec = json!({ "createdAt": 1_742_034_030_000i64 });
    let ts = timestamp_field(&rec, "createdAt").expect("parsable");
    assert_eq!(ts.timestamp_millis(), 1_742_034_030_000);
}

#[test]
fn offsetless_iso_strings_are_taken_as_utc() {
    let ts = parse_instant("2025-03-15T10:20:30.500").expect("parsable");
    assert_eq!(ts.date_naive(), Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap().date_naive());
}

#[test]
fn garbage_timestamps_are_none() {
    for rec in [
        json!({}),
        json!({ "createdAt": null }),
        json!({ "createdAt": "not a date" }),
        json!({ "createdAt": true }),
        json!({ "createdAt": [1, 2] }),
    ] {
        assert!(timestamp_field(&rec, "createdAt").is_none(), "{rec}");
    }
}

#[test]
fn value_field_defaults_to_zero() {
    assert_eq!(value_field(&json!({}), "amount"), 0.0);
    assert_eq!(value_field(&json!({ "amount": null }), "amount"), 0.0);
    assert_eq!(value_field(&json!({ "amount": "oops" }), "amount"), 0.0);
    assert_eq!(value_field(&json!({ "amount": 12.5 }), "amount"), 12.5);
    assert_eq!(value_field(&json!({ "amount": "7.25" }), "amount"), 7.25);
}
