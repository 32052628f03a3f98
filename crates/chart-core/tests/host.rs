// File: crates/chart-core/tests/host.rs
// Purpose: Cross-thread mutation goes through the render-thread host with a blocking round trip.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use chart_core::{AxisId, Chart, ChartError, ChartHost, ChartOp, Point, ScaleKind};

#[test]
fn points_from_worker_arrive_in_order() {
    let (mut host, handle) = ChartHost::new(Chart::new());
    let worker = thread::spawn(move || {
        handle.reset().unwrap();
        for i in 0..50 {
            handle.add_point(i as f64, (i * 2) as f64, i % 3).unwrap();
        }
    });

    let applied = host.serve_until_disconnected();
    worker.join().unwrap();

    assert_eq!(applied, 51);
    let pts = host.chart().points();
    assert_eq!(pts.len(), 50);
    assert!(pts.iter().enumerate().all(|(i, p)| *p == Point::new(i as f64, (i * 2) as f64, i % 3)));
    assert!(host.chart_mut().take_needs_display());
}

#[test]
fn rejection_is_reported_to_the_caller() {
    let mut chart = Chart::new();
    chart.set_y_scale(ScaleKind::Log10).unwrap();
    let (mut host, handle) = ChartHost::new(chart);

    let worker = thread::spawn(move || {
        let zero = handle.add_point(4.0, 0.0, 0);
        let ok = handle.add_point(4.0, 1e-3, 0);
        (zero, ok)
    });
    host.serve_until_disconnected();
    let (zero, ok) = worker.join().unwrap();

    assert_eq!(zero, Err(ChartError::NonPositiveOnLogAxis { axis: AxisId::Y, value: 0.0 }));
    assert_eq!(ok, Ok(()));
    assert_eq!(host.into_chart().len(), 1);
}

#[test]
fn dropped_host_closes_handles() {
    let (host, handle) = ChartHost::new(Chart::new());
    drop(host);
    assert_eq!(handle.reset(), Err(ChartError::HostClosed));
    assert_eq!(handle.call(ChartOp::AddPoint(Point::new(1.0, 1.0, 0))), Err(ChartError::HostClosed));
}

#[test]
fn pump_is_non_blocking() {
    let wakes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&wakes);
    let (mut host, handle) = ChartHost::with_waker(Chart::new(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(host.pump(), 0);

    let worker = thread::spawn(move || {
        handle.add_point(1.0, 2.0, 0).unwrap();
        handle.add_point(2.0, 3.0, 1).unwrap();
    });
    while host.chart().len() < 2 {
        host.pump();
        thread::yield_now();
    }
    worker.join().unwrap();

    assert_eq!(wakes.load(Ordering::SeqCst), 2);
    assert_eq!(host.pump(), 0);
}
