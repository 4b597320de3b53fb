// File: crates/metrics-core/src/aggregate.rs
// Summary: Buckets timestamped records into a trailing window of UTC days.

use std::collections::HashMap;

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::series::DayBucket;

/// Build the trailing `day_count`-day series ending on `now`'s UTC date,
/// oldest day first.
///
/// Records with no parsable timestamp, or whose day falls outside the
/// window, are skipped silently. Non-finite value contributions count as 0.
/// The output always has exactly `day_count` buckets; days without records
/// stay at `count = 0, value = 0.0`. `day_count == 0` yields an empty series.
pub fn build_daily_series<T>(
    records: &[T],
    timestamp_of: impl Fn(&T) -> Option<DateTime<Utc>>,
    value_of: impl Fn(&T) -> f64,
    day_count: usize,
    now: DateTime<Utc>,
) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = anchor_days(now.date_naive(), day_count)
        .into_iter()
        .map(DayBucket::empty)
        .collect();

    let index: HashMap<NaiveDate, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, b)| (b.date, i))
        .collect();

    for record in records {
        let day = match timestamp_of(record) {
            Some(ts) => ts.date_naive(),
            None => continue,
        };
        if let Some(&slot) = index.get(&day) {
            let v = value_of(record);
            buckets[slot].count += 1;
            buckets[slot].value += if v.is_finite() { v } else { 0.0 };
        }
    }

    buckets
}

/// As [`build_daily_series`], with the real clock supplied at the call site.
pub fn build_daily_series_now<T>(
    records: &[T],
    timestamp_of: impl Fn(&T) -> Option<DateTime<Utc>>,
    value_of: impl Fn(&T) -> f64,
    day_count: usize,
) -> Vec<DayBucket> {
    build_daily_series(records, timestamp_of, value_of, day_count, Utc::now())
}

/// Anchor days of the window, oldest first, ending on `today` inclusive.
fn anchor_days(today: NaiveDate, day_count: usize) -> Vec<NaiveDate> {
    (0..day_count)
        .rev()
        .map(|back| today.checked_sub_days(Days::new(back as u64)).unwrap_or(today))
        .collect()
}
