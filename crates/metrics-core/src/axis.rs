// File: crates/metrics-core/src/axis.rs
// Summary: Tick selection and plain number formatting for labels.

/// Indices that receive an axis label: every `every`-th bucket starting at
/// the oldest, so a 30-day window stays readable.
pub fn tick_indices(len: usize, every: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(every.max(1))
}

/// Plain numeric label text: integers print without a decimal point,
/// everything else with up to two decimals, trailing zeros trimmed.
/// No locale grouping.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
