// File: crates/chart-core/tests/render_ops.rs
// Purpose: Frame structure: empty/reset frames, draw order, palette cycling, and redraw determinism.

use chart_core::{Chart, ChartConfig, DrawOp, RecordingSurface, RectF, ScaleKind, Theme};
use skia_safe::Color;

fn frame(chart: &Chart) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    chart.render(&mut surface, RectF::from_size(300, 300));
    surface
}

#[test]
fn empty_chart_only_clears_canvas() {
    let chart = Chart::new();
    let surface = frame(&chart);
    assert_eq!(
        surface.ops,
        vec![DrawOp::FillRect { rect: RectF::from_size(300, 300), color: Color::BLACK }]
    );
}

#[test]
fn reset_returns_to_blank_frame() {
    let mut chart = Chart::new();
    for i in 1..=5 {
        chart.add_point(i as f64, (i * i) as f64).unwrap();
    }
    assert_eq!(frame(&chart).ellipses().count(), 5);

    chart.reset();
    assert!(chart.is_empty());
    let surface = frame(&chart);
    assert_eq!(
        surface.ops,
        vec![DrawOp::FillRect { rect: RectF::from_size(300, 300), color: Color::BLACK }]
    );
}

#[test]
fn draw_order_is_canvas_frame_points() {
    let mut chart = Chart::new();
    chart.add_point(1.0, 1.0).unwrap();
    chart.add_point(2.0, 3.0).unwrap();
    let surface = frame(&chart);

    assert!(matches!(surface.ops[0], DrawOp::FillRect { .. }));
    assert_eq!(
        surface.ops[1],
        DrawOp::StrokeRect { rect: RectF::from_xywh(40.0, 40.0, 220.0, 220.0), color: Color::RED }
    );
    assert!(surface.ops[2..].iter().all(|op| matches!(op, DrawOp::FillEllipse { .. })));
}

#[test]
fn series_colors_cycle_over_palette() {
    let palette = vec![Color::from_rgb(1, 0, 0), Color::from_rgb(0, 2, 0), Color::from_rgb(0, 0, 3)];
    let theme = Theme { name: "test", canvas: Color::WHITE, axis: Color::BLACK, points: palette.clone() };
    let mut chart = Chart::with_config(ChartConfig { theme, ..ChartConfig::default() }).unwrap();
    for series in 0..5 {
        chart.add_series_point(series as f64, 1.0 + series as f64, series).unwrap();
    }

    let colors: Vec<Color> = frame(&chart).ellipses().map(|(_, c)| *c).collect();
    assert_eq!(colors, vec![palette[0], palette[1], palette[2], palette[0], palette[1]]);
}

#[test]
fn points_keep_insertion_order() {
    let mut chart = Chart::new();
    chart.add_point(3.0, 1.0).unwrap();
    chart.add_point(1.0, 2.0).unwrap();
    chart.add_point(2.0, 3.0).unwrap();
    let xs: Vec<f32> = frame(&chart).ellipses().map(|(r, _)| r.x + 1.0).collect();
    assert_eq!(xs, vec![259.0, 40.0, 149.5]);
}

#[test]
fn log_transform_and_redraw_are_stable() {
    let mut chart = Chart::new();
    chart.set_x_scale(ScaleKind::Log10).unwrap();
    chart.set_y_scale(ScaleKind::Log10).unwrap();
    for (x, y) in [(1.0, 1e-6), (16.0, 3e-5), (1024.0, 2e-3)] {
        chart.add_point(x, y).unwrap();
    }

    let display = chart.display_points();
    assert!((display[1].x - 16f64.log10()).abs() < 1e-12);
    assert!((display[1].y - 3e-5f64.log10()).abs() < 1e-12);
    assert_eq!(chart.points()[1].x, 16.0, "raw points are untouched");

    assert_eq!(frame(&chart).ops, frame(&chart).ops);
}

#[test]
fn mutations_request_display() {
    let mut chart = Chart::new();
    assert!(chart.take_needs_display());
    assert!(!chart.needs_display());

    chart.add_point(1.0, 1.0).unwrap();
    assert!(chart.take_needs_display());

    chart.reset();
    assert!(chart.take_needs_display());
    assert!(!chart.take_needs_display());
}
