// File: crates/timekeeper/src/driver.rs
// Summary: Trial loop (generate input, time each block, report a point) and its background runner.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

use chart_core::ChartError;
use log::{debug, info, warn};

use crate::error::MeasureError;
use crate::input::{Block, InputSpec};
use crate::sink::ChartSink;

/// Counts of one completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Input sizes generated.
    pub sizes: usize,
    /// Points the chart accepted.
    pub points: usize,
    /// Points the chart rejected (e.g. a zero duration on a log axis).
    pub rejected: usize,
}

/// Run every trial of `input` x `blocks` on the calling thread.
///
/// Resets the sink first, then for each size builds one input and times each
/// block against it in order, reporting `(size, seconds, block index)`.
/// A point the chart rejects is logged and skipped; a closed chart ends the run.
pub fn run_trials<T, S>(sink: &S, input: &InputSpec<T>, blocks: &[Block<T>]) -> Result<RunSummary, MeasureError>
where
    S: ChartSink,
{
    sink.reset()?;

    let mut summary = RunSummary::default();
    let mut size = input.min_size();
    while size <= input.max_size() {
        let data = input.make(size);
        summary.sizes += 1;

        for (series, block) in blocks.iter().enumerate() {
            let started = Instant::now();
            block(&data);
            let elapsed = started.elapsed().as_secs_f64();
            debug!("size {size} series {series}: {elapsed:.9}s");

            match sink.add_point(size as f64, elapsed, series) {
                Ok(()) => summary.points += 1,
                Err(ChartError::HostClosed) => return Err(ChartError::HostClosed.into()),
                Err(e) => {
                    warn!("dropping trial (size {size}, series {series}): {e}");
                    summary.rejected += 1;
                }
            }
        }

        if size == input.max_size() {
            break;
        }
        let next = input.next_size(size);
        if next <= size {
            return Err(MeasureError::StepNotIncreasing { from: size, to: next });
        }
        size = next;
    }
    Ok(summary)
}

/// Starts measurement runs on background threads, reporting into a chart sink.
pub struct Timekeeper<S: ChartSink> {
    sink: S,
    runs: AtomicUsize,
}

impl<S: ChartSink> Timekeeper<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, runs: AtomicUsize::new(0) }
    }

    /// Start a run on a new thread and return immediately.
    ///
    /// Results show up in the sink as they are measured. The run cannot be
    /// cancelled; a panicking block ends it without affecting the chart owner.
    pub fn measure<T>(&self, input: InputSpec<T>, blocks: Vec<Block<T>>) -> Result<(), MeasureError>
    where
        T: 'static,
    {
        let run = self.runs.fetch_add(1, Ordering::Relaxed);
        let sink = self.sink.clone();
        thread::Builder::new()
            .name(format!("timekeeper-run-{run}"))
            .spawn(move || {
                info!(
                    "run {run}: sizes {}..={} with {} block(s)",
                    input.min_size(),
                    input.max_size(),
                    blocks.len()
                );
                match run_trials(&sink, &input, &blocks) {
                    Ok(s) => info!(
                        "run {run} finished: {} sizes, {} points, {} rejected",
                        s.sizes, s.points, s.rejected
                    ),
                    Err(e) => warn!("run {run} stopped: {e}"),
                }
            })?;
        Ok(())
    }

    /// Single-block form of [`Timekeeper::measure`]; results go to series 0.
    pub fn measure_one<T>(&self, input: InputSpec<T>, block: Block<T>) -> Result<(), MeasureError>
    where
        T: 'static,
    {
        self.measure(input, vec![block])
    }
}
