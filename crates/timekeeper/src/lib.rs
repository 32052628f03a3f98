// File: crates/timekeeper/src/lib.rs
// Summary: Measurement driver entry point; input specs, the trial loop, and the demo workloads.

pub mod input;
pub mod sink;
pub mod driver;
pub mod error;
pub mod workloads;

pub use input::{block, Block, InputSpec};
pub use sink::ChartSink;
pub use driver::{run_trials, RunSummary, Timekeeper};
pub use error::MeasureError;
