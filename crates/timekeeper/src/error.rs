// File: crates/timekeeper/src/error.rs
// Summary: Ways a measurement run ends early.

use chart_core::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("chart unavailable: {0}")]
    Chart(#[from] ChartError),

    /// The step function would loop forever.
    #[error("step({from}) = {to} does not grow the input size")]
    StepNotIncreasing { from: usize, to: usize },

    #[error("failed to spawn measurement thread: {0}")]
    Spawn(#[from] std::io::Error),
}
