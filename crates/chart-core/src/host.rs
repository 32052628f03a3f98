// File: crates/chart-core/src/host.rs
// Summary: Render-thread ownership of a Chart; other threads mutate it through blocking request/reply messages.
// Notes:
// - `ChartHost` lives on the thread that draws. It is the only code that touches the `Chart`.
// - `ChartHandle` is cheap to clone and `Send`; each call enqueues one op and waits for the
//   host to apply it, so a caller never has two mutations in flight.

use std::sync::mpsc::{self, Receiver, Sender, SyncSender, TryRecvError};
use std::sync::Arc;

use log::trace;

use crate::chart::Chart;
use crate::error::ChartError;
use crate::series::{Point, SeriesId};

/// Mutation requested from another thread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartOp {
    Reset,
    AddPoint(Point),
}

struct Request {
    op: ChartOp,
    reply: SyncSender<Result<(), ChartError>>,
}

/// Called after a request is enqueued so an event loop can wake up and pump.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ChartHandle {
    tx: Sender<Request>,
    waker: Option<Waker>,
}

impl ChartHandle {
    /// Clear the chart; returns once the render thread has done it.
    pub fn reset(&self) -> Result<(), ChartError> {
        self.call(ChartOp::Reset)
    }

    /// Append a point; returns once the render thread has applied (or rejected) it.
    pub fn add_point(&self, x: f64, y: f64, series: SeriesId) -> Result<(), ChartError> {
        self.call(ChartOp::AddPoint(Point::new(x, y, series)))
    }

    pub fn call(&self, op: ChartOp) -> Result<(), ChartError> {
        let (reply, rx) = mpsc::sync_channel(1);
        self.tx.send(Request { op, reply }).map_err(|_| ChartError::HostClosed)?;
        if let Some(wake) = &self.waker {
            wake();
        }
        rx.recv().map_err(|_| ChartError::HostClosed)?
    }
}

pub struct ChartHost {
    chart: Chart,
    rx: Receiver<Request>,
}

impl ChartHost {
    /// Host for `chart` plus its first handle. Pump with [`ChartHost::pump`] or
    /// [`ChartHost::serve_until_disconnected`].
    pub fn new(chart: Chart) -> (Self, ChartHandle) {
        Self::build(chart, None)
    }

    /// Like [`ChartHost::new`], running `waker` after every enqueued request.
    pub fn with_waker(chart: Chart, waker: impl Fn() + Send + Sync + 'static) -> (Self, ChartHandle) {
        Self::build(chart, Some(Arc::new(waker)))
    }

    fn build(chart: Chart, waker: Option<Waker>) -> (Self, ChartHandle) {
        let (tx, rx) = mpsc::channel();
        (Self { chart, rx }, ChartHandle { tx, waker })
    }

    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn chart_mut(&mut self) -> &mut Chart { &mut self.chart }
    pub fn into_chart(self) -> Chart { self.chart }

    /// Apply every queued request without blocking. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(req) => {
                    self.apply(req);
                    applied += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return applied,
            }
        }
    }

    /// Block applying requests until every handle has been dropped.
    pub fn serve_until_disconnected(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(req) = self.rx.recv() {
            self.apply(req);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, req: Request) {
        trace!("chart op {:?}", req.op);
        let result = match req.op {
            ChartOp::Reset => {
                self.chart.reset();
                Ok(())
            }
            ChartOp::AddPoint(p) => self.chart.push(p),
        };
        // The caller may have given up waiting; nothing to do then.
        let _ = req.reply.send(result);
    }
}
