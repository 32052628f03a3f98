// File: crates/chart-core/src/series.rs
// Summary: Measured point model tagged by series, and its display-space transform.

use crate::axis::ScaleKind;

/// Series index; selects a palette color cyclically.
pub type SeriesId = usize;

/// One measured (input size, elapsed seconds) pair, in raw data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub series: SeriesId,
}

impl Point {
    pub const fn new(x: f64, y: f64, series: SeriesId) -> Self {
        Self { x, y, series }
    }

    /// Map into display space (log10 on logarithmic axes). The result is
    /// never stored; it is recomputed on every render.
    #[inline]
    pub fn transform(&self, x_scale: ScaleKind, y_scale: ScaleKind) -> Point {
        Point { x: x_scale.apply(self.x), y: y_scale.apply(self.y), series: self.series }
    }
}
