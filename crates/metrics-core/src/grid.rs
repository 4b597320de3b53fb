// File: crates/metrics-core/src/grid.rs
// Summary: Grid row layout helper.

/// Y positions of `rows` horizontal grid lines spanning [top, bottom]:
/// first row on the top inset, last on the baseline. Fewer than two rows
/// collapse to the baseline alone.
pub fn row_positions(top: f32, bottom: f32, rows: usize) -> Vec<f32> {
    if rows < 2 {
        return vec![bottom];
    }
    let step = (bottom - top) / (rows as f32 - 1.0);
    (0..rows).map(|i| top + step * i as f32).collect()
}
