// File: crates/timekeeper/src/sink.rs
// Summary: The narrow chart interface the driver reports through.

use chart_core::{ChartError, ChartHandle, SeriesId};

/// Receiver of measurement results. Calls return once the point is committed.
pub trait ChartSink: Clone + Send + 'static {
    fn reset(&self) -> Result<(), ChartError>;
    fn add_point(&self, x: f64, y: f64, series: SeriesId) -> Result<(), ChartError>;
}

impl ChartSink for ChartHandle {
    fn reset(&self) -> Result<(), ChartError> {
        ChartHandle::reset(self)
    }

    fn add_point(&self, x: f64, y: f64, series: SeriesId) -> Result<(), ChartError> {
        ChartHandle::add_point(self, x, y, series)
    }
}
