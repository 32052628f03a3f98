// File: crates/chart-core/src/error.rs
// Summary: Error type for chart mutations and render-thread hand-off.

use thiserror::Error;

use crate::axis::AxisId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("{axis} value {value} is not finite")]
    NonFinite { axis: AxisId, value: f64 },

    /// Log10 of this value would be -inf or NaN.
    #[error("{axis} value {value} is not positive but the {axis} axis is logarithmic")]
    NonPositiveOnLogAxis { axis: AxisId, value: f64 },

    #[error("point palette is empty")]
    EmptyPalette,

    #[error("chart host is no longer running")]
    HostClosed,
}
