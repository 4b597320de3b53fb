// File: crates/metrics-core/src/chart.rs
// Summary: Area/line, ring, and bar geometry builders over the virtual canvas.

use crate::axis::{format_value, tick_indices};
use crate::geometry::{Anchor, LegendEntry, LineCap, Paint, PathShape, PlotGeometry, TextLabel};
use crate::grid::row_positions;
use crate::path::PathBuilder;
use crate::scale::{SlotScale, ValueScale};
use crate::series::{ChartLineSpec, DayBucket};
use crate::theme::{Accent, Palette, RING_GRADIENT_END};
use crate::types::{Insets, BAR_ROW_GAP, BAR_ROW_HEIGHT, WIDTH};

/// Grid rows drawn behind the line chart.
const GRID_ROWS: usize = 4;
/// Every n-th bucket gets a day-of-month tick.
const TICK_EVERY: usize = 3;
/// Label font sizes, in virtual units.
const TICK_SIZE: f32 = 9.0;
const BAR_LABEL_SIZE: f32 = 10.0;
/// Bar-list column widths for the left labels and right values.
const BAR_LABEL_COL: f32 = 110.0;
const BAR_VALUE_COL: f32 = 48.0;

/// One entry of a proportional bar list.
#[derive(Clone, Debug)]
pub struct BarSpec {
    pub label: String,
    pub value: f64,
    pub accent: Accent,
}

impl BarSpec {
    pub fn new(label: impl Into<String>, value: f64, accent: Accent) -> Self {
        Self { label: label.into(), value, accent }
    }
}

/// Plot `series` as connected polylines on a fixed-width virtual canvas of
/// the given `height`. All line specs share one vertical scale computed from
/// the maximum across every requested field; the first spec also gets a
/// filled area down to the baseline, later specs are stroke-only.
pub fn render_area_line(
    series: &[DayBucket],
    lines: &[ChartLineSpec],
    height: f32,
    dark: bool,
) -> PlotGeometry {
    let palette = Palette::for_mode(dark);
    let insets = Insets::default();
    let mut geom = PlotGeometry::new(WIDTH, height);

    let left = insets.left;
    let right = WIDTH - insets.right;
    let top = insets.top;
    let bottom = height - insets.bottom;

    for y in row_positions(top, bottom, GRID_ROWS) {
        let mut row = PathBuilder::new();
        row.move_to(left, y).line_to(right, y);
        geom.shapes.push(PathShape::stroked(row.finish(), Paint::Solid(palette.grid), 1.0));
    }

    if series.is_empty() || lines.is_empty() {
        return geom;
    }

    let max = lines
        .iter()
        .flat_map(|l| series.iter().map(move |b| l.field.of(b)))
        .fold(0.0f64, f64::max);
    let ys = ValueScale::new(top, bottom, max);
    let xs = SlotScale::new(left, right, series.len());

    for (li, line) in lines.iter().enumerate() {
        let pts: Vec<(f32, f32)> = series
            .iter()
            .enumerate()
            .map(|(i, b)| (xs.to_px(i), ys.to_px(line.field.of(b))))
            .collect();

        // Only the first line is filled; stacking later fills would make the
        // overlap ambiguous.
        if li == 0 {
            let mut area = PathBuilder::new();
            area.move_to(pts[0].0, bottom);
            for &(x, y) in &pts {
                area.line_to(x, y);
            }
            area.line_to(pts[pts.len() - 1].0, bottom).close();
            geom.shapes.push(PathShape::filled(area.finish(), Paint::Solid(line.accent.soft())));
        }

        let mut stroke = PathBuilder::new();
        stroke.move_to(pts[0].0, pts[0].1);
        for &(x, y) in pts.iter().skip(1) {
            stroke.line_to(x, y);
        }
        geom.shapes.push(
            PathShape::stroked(stroke.finish(), Paint::Solid(line.accent.primary()), 2.0)
                .with_cap(LineCap::Round),
        );

        geom.legend.push(LegendEntry { label: line.label.clone(), color: line.accent.primary() });
    }

    for i in tick_indices(series.len(), TICK_EVERY) {
        geom.labels.push(TextLabel {
            x: xs.to_px(i),
            y: bottom + 14.0,
            text: series[i].day_label(),
            color: palette.axis_label,
            size: TICK_SIZE,
            anchor: Anchor::Middle,
        });
    }

    geom
}

/// Progress ring: a soft full track plus a gradient arc covering
/// `value / total` of the turn, starting at 12 o'clock and running
/// clockwise. `total <= 0` leaves the ring empty; it never divides by zero.
///
/// Precondition: `value <= total`. Overshoot is not clamped here; the caller
/// owns that invariant and debug builds flag a violation.
pub fn render_ring(
    total: f64,
    value: f64,
    size: f32,
    stroke_width: f32,
    accent: Accent,
    dark: bool,
) -> PlotGeometry {
    debug_assert!(total <= 0.0 || value <= total, "ring value exceeds total");

    let palette = Palette::for_mode(dark);
    let mut geom = PlotGeometry::new(size, size);

    let c = size * 0.5;
    let radius = (size - stroke_width) * 0.5;

    geom.shapes.push(PathShape::stroked(
        circle_path(c, c, radius),
        Paint::Solid(palette.track),
        stroke_width,
    ));

    let fraction = if total <= 0.0 { 0.0 } else { value / total };
    if fraction > 0.0 {
        let sweep = fraction * 360.0;
        let d = if sweep >= 360.0 {
            circle_path(c, c, radius)
        } else {
            arc_path(c, c, radius, sweep as f32)
        };
        geom.shapes.push(
            PathShape::stroked(d, Paint::Gradient(accent.primary(), RING_GRADIENT_END), stroke_width)
                .with_cap(LineCap::Round),
        );
    }

    geom.labels.push(TextLabel {
        x: c,
        y: c,
        text: format_value(value),
        color: palette.value_label,
        size: size * 0.18,
        anchor: Anchor::Middle,
    });
    geom.labels.push(TextLabel {
        x: c,
        y: c + size * 0.13,
        text: format!("of {} active", format_value(total)),
        color: palette.caption,
        size: size * 0.08,
        anchor: Anchor::Middle,
    });

    geom
}

/// Horizontal proportional bars in input order: per entry a soft full-width
/// track, a fill sized against the set maximum (floored at 1 so an all-zero
/// set renders flat instead of NaN), a left label, and a right value.
pub fn render_bars(bars: &[BarSpec], dark: bool) -> PlotGeometry {
    let palette = Palette::for_mode(dark);
    let row = BAR_ROW_HEIGHT + BAR_ROW_GAP;
    let mut geom = PlotGeometry::new(WIDTH, bars.len() as f32 * row);

    let max = bars.iter().map(|b| b.value).fold(0.0f64, f64::max).max(1.0);

    let left = BAR_LABEL_COL + 8.0;
    let right = WIDTH - BAR_VALUE_COL - 8.0;
    let usable = right - left;

    for (i, bar) in bars.iter().enumerate() {
        let y = BAR_ROW_GAP * 0.5 + i as f32 * row + BAR_ROW_HEIGHT * 0.5;

        let mut track = PathBuilder::new();
        track.move_to(left, y).line_to(right, y);
        geom.shapes.push(
            PathShape::stroked(track.finish(), Paint::Solid(palette.track), BAR_ROW_HEIGHT)
                .with_cap(LineCap::Round),
        );

        let len = ((bar.value / max) as f32) * usable;
        if len > 0.0 {
            let mut fill = PathBuilder::new();
            fill.move_to(left, y).line_to(left + len, y);
            geom.shapes.push(
                PathShape::stroked(fill.finish(), Paint::Solid(bar.accent.primary()), BAR_ROW_HEIGHT)
                    .with_cap(LineCap::Round),
            );
        }

        geom.labels.push(TextLabel {
            x: 0.0,
            y: y + BAR_LABEL_SIZE * 0.35,
            text: bar.label.clone(),
            color: palette.axis_label,
            size: BAR_LABEL_SIZE,
            anchor: Anchor::Start,
        });
        geom.labels.push(TextLabel {
            x: WIDTH,
            y: y + BAR_LABEL_SIZE * 0.35,
            text: format_value(bar.value),
            color: palette.value_label,
            size: BAR_LABEL_SIZE,
            anchor: Anchor::End,
        });
    }

    geom
}

// ---- helpers ----------------------------------------------------------------

fn circle_path(cx: f32, cy: f32, r: f32) -> String {
    let mut p = PathBuilder::new();
    p.move_to(cx, cy - r)
        .arc_to(r, false, true, cx, cy + r)
        .arc_to(r, false, true, cx, cy - r)
        .close();
    p.finish()
}

/// Arc from 12 o'clock, `sweep` degrees clockwise. Caller keeps sweep < 360.
fn arc_path(cx: f32, cy: f32, r: f32, sweep: f32) -> String {
    let theta = sweep.to_radians();
    let (x, y) = (cx + r * theta.sin(), cy - r * theta.cos());
    let mut p = PathBuilder::new();
    p.move_to(cx, cy - r).arc_to(r, sweep > 180.0, true, x, y);
    p.finish()
}
