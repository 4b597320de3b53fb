// File: crates/metrics-core/tests/charts.rs
// Purpose: Validate renderer geometry: scaling, degenerate inputs, themes.

use chrono::NaiveDate;
use metrics_core::{
    render_area_line, render_bars, render_ring, Accent, BarSpec, BucketField, ChartLineSpec,
    DayBucket, Paint,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).expect("valid day")
}

fn bucket(d: u32, count: u64, value: f64) -> DayBucket {
    DayBucket { date: day(d), count, value }
}

// Insets::default() is (16, 16, 12, 24) on a 640-wide canvas; height 220
// puts the baseline at y = 196.

#[test]
fn single_point_series_sits_at_left_inset() {
    let series = vec![bucket(1, 3, 9.0)];
    let lines = vec![ChartLineSpec::new(BucketField::Count, Accent::Indigo, "Payments")];
    let geom = render_area_line(&series, &lines, 220.0, false);

    let stroke = geom
        .shapes
        .iter()
        .filter(|s| s.stroke.is_some() && s.fill.is_none())
        .last()
        .expect("line stroke present");
    assert!(stroke.d.starts_with("M 16.00 "), "got {}", stroke.d);
}

#[test]
fn lines_share_one_scale_from_the_field_maximum() {
    // counts peak at 6, values at 12; both scale against 12.
    let series: Vec<DayBucket> = (0..7).map(|i| bucket(i + 1, i as u64, i as f64 * 2.0)).collect();
    let lines = vec![
        ChartLineSpec::new(BucketField::Count, Accent::Emerald, "Payments"),
        ChartLineSpec::new(BucketField::Value, Accent::Indigo, "Revenue"),
    ];
    let geom = render_area_line(&series, &lines, 220.0, true);

    let strokes: Vec<&str> = geom
        .shapes
        .iter()
        .filter(|s| s.stroke.is_some() && s.fill.is_none() && s.stroke_width > 1.0)
        .map(|s| s.d.as_str())
        .collect();
    assert_eq!(strokes.len(), 2);
    // count=6 maps to mid-plot, value=12 to the top inset, at the last slot
    assert!(strokes[0].ends_with("L 624.00 104.00"), "got {}", strokes[0]);
    assert!(strokes[1].ends_with("L 624.00 12.00"), "got {}", strokes[1]);
}

#[test]
fn zero_maximum_keeps_all_points_on_the_baseline() {
    let series: Vec<DayBucket> = (1..=4).map(|d| bucket(d, 0, 0.0)).collect();
    let lines = vec![ChartLineSpec::new(BucketField::Value, Accent::Sky, "Revenue")];
    let geom = render_area_line(&series, &lines, 220.0, false);

    let stroke = geom
        .shapes
        .iter()
        .filter(|s| s.stroke.is_some() && s.stroke_width > 1.0)
        .last()
        .expect("line stroke present");
    assert_eq!(stroke.d, "M 16.00 196.00 L 218.67 196.00 L 421.33 196.00 L 624.00 196.00");
}

#[test]
fn only_the_first_line_is_filled() {
    let series: Vec<DayBucket> = (1..=5).map(|d| bucket(d, d as u64, d as f64)).collect();
    let lines = vec![
        ChartLineSpec::new(BucketField::Value, Accent::Indigo, "Revenue"),
        ChartLineSpec::new(BucketField::Count, Accent::Emerald, "Payments"),
    ];
    let geom = render_area_line(&series, &lines, 220.0, false);

    let fills = geom.shapes.iter().filter(|s| s.fill.is_some()).count();
    assert_eq!(fills, 1);
    assert_eq!(geom.legend.len(), 2);
    assert_eq!(geom.legend[0].color, Accent::Indigo.primary());
}

#[test]
fn ticks_are_sparse_day_of_month_labels() {
    let series: Vec<DayBucket> = (1..=7).map(|d| bucket(d, 0, 0.0)).collect();
    let lines = vec![ChartLineSpec::new(BucketField::Count, Accent::Indigo, "Payments")];
    let geom = render_area_line(&series, &lines, 220.0, false);

    let texts: Vec<&str> = geom.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "4", "7"]);
}

#[test]
fn empty_ring_has_track_but_no_arc() {
    let geom = render_ring(0.0, 0.0, 120.0, 12.0, Accent::Indigo, true);
    assert_eq!(geom.shapes.len(), 1, "track only, no divide-by-zero arc");
    assert!(geom
        .shapes
        .iter()
        .all(|s| !matches!(s.stroke, Some(Paint::Gradient(_, _)))));
    assert_eq!(geom.labels[0].text, "0");
    assert_eq!(geom.labels[1].text, "of 0 active");
}

#[test]
fn quarter_ring_arc_starts_at_twelve_oclock() {
    let geom = render_ring(4.0, 1.0, 120.0, 12.0, Accent::Emerald, false);
    assert_eq!(geom.shapes.len(), 2);
    let arc = &geom.shapes[1];
    assert!(matches!(arc.stroke, Some(Paint::Gradient(_, _))));
    assert_eq!(arc.d, "M 60.00 6.00 A 54.00 54.00 0 0 1 114.00 60.00");
}

#[test]
fn complete_ring_closes_the_full_circle() {
    let geom = render_ring(5.0, 5.0, 120.0, 12.0, Accent::Indigo, false);
    let arc = &geom.shapes[1];
    assert_eq!(arc.d.matches('A').count(), 2, "full turn needs two arc segments");
    assert!(arc.d.ends_with('Z'));
    assert_eq!(geom.labels[1].text, "of 5 active");
}

#[test]
fn zero_bars_render_flat_not_nan() {
    let bars = vec![
        BarSpec::new("Spam", 0.0, Accent::Rose),
        BarSpec::new("Fake profile", 0.0, Accent::Amber),
    ];
    let geom = render_bars(&bars, true);
    // tracks only; the 1-floor on the maximum suppresses 0/0 fills
    assert_eq!(geom.shapes.len(), 2);
    for shape in &geom.shapes {
        assert!(!shape.d.contains("NaN"), "got {}", shape.d);
    }
}

#[test]
fn bars_scale_against_the_set_maximum_in_input_order() {
    let bars = vec![
        BarSpec::new("Harassment", 3.0, Accent::Rose),
        BarSpec::new("Spam", 6.0, Accent::Amber),
    ];
    let geom = render_bars(&bars, false);

    // track, fill, track, fill
    assert_eq!(geom.shapes.len(), 4);
    assert_eq!(geom.shapes[1].d, "M 118.00 13.00 L 351.00 13.00");

    let labels: Vec<&str> = geom.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(labels, vec!["Harassment", "3", "Spam", "6"]);
}
