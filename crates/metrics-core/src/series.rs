// File: crates/metrics-core/src/series.rs
// Summary: Daily bucket model, plottable field selection, totals helpers.

use chrono::{Datelike, NaiveDate};

use crate::theme::Accent;

/// One UTC calendar day of aggregated records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub count: u64,
    pub value: f64,
}

impl DayBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self { date, count: 0, value: 0.0 }
    }

    /// ISO `YYYY-MM-DD` form of the bucket day.
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Day-of-month tick text ("1".."31").
    pub fn day_label(&self) -> String {
        self.date.day().to_string()
    }
}

/// Plottable bucket fields. Lines plotted together share one value scale
/// computed from the maximum across every requested field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BucketField {
    Count,
    Value,
}

impl BucketField {
    pub fn of(self, bucket: &DayBucket) -> f64 {
        match self {
            BucketField::Count => bucket.count as f64,
            BucketField::Value => bucket.value,
        }
    }
}

/// One plotted line: which bucket field, its accent, its legend text.
#[derive(Clone, Debug)]
pub struct ChartLineSpec {
    pub field: BucketField,
    pub accent: Accent,
    pub label: String,
}

impl ChartLineSpec {
    pub fn new(field: BucketField, accent: Accent, label: impl Into<String>) -> Self {
        Self { field, accent, label: label.into() }
    }
}

/// Sum each requested field across all buckets.
pub fn totals_for(series: &[DayBucket], fields: &[BucketField]) -> Vec<f64> {
    fields
        .iter()
        .map(|f| series.iter().map(|b| f.of(b)).sum())
        .collect()
}

/// True when at least one total is non-zero. All-zero totals gate the
/// caller's "no activity" presentation state instead of a zero-filled table.
pub fn has_activity(totals: &[f64]) -> bool {
    totals.iter().any(|t| *t != 0.0)
}
