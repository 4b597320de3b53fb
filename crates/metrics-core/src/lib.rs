// File: crates/metrics-core/src/lib.rs
// Summary: Core library entry point; exports the series builder and chart geometry API.

pub mod aggregate;
pub mod series;
pub mod record;
pub mod chart;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod path;
pub mod theme;
pub mod color;

pub use aggregate::{build_daily_series, build_daily_series_now};
pub use series::{has_activity, totals_for, BucketField, ChartLineSpec, DayBucket};
pub use chart::{render_area_line, render_bars, render_ring, BarSpec};
pub use geometry::{Anchor, LegendEntry, LineCap, Paint, PathShape, PlotGeometry, TextLabel};
pub use theme::{Accent, Palette};
pub use color::Color;
