// File: crates/chart-core/tests/png_pixels.rs
// Purpose: PNG output decodes to the same pixels as the RGBA readback, and rendering is repeatable.

use chart_core::{Chart, RenderOptions, ScaleKind};

fn log_log_chart() -> Chart {
    let mut chart = Chart::new();
    chart.set_x_scale(ScaleKind::Log10).unwrap();
    chart.set_y_scale(ScaleKind::Log10).unwrap();
    for (i, size) in [1.0, 4.0, 16.0, 64.0, 256.0, 1024.0].into_iter().enumerate() {
        chart.add_series_point(size, 1e-6 * size, 0).unwrap();
        chart.add_series_point(size, 1e-6 * size * (i as f64 + 1.0), 1).unwrap();
    }
    chart
}

#[test]
fn png_matches_rgba_readback() {
    let chart = log_log_chart();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let decoded = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    let (rgba, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba render");

    assert_eq!(decoded.dimensions(), (w, h));
    // Every pixel is opaque, so premultiplied and straight alpha agree.
    assert!(rgba.chunks_exact(4).all(|p| p[3] == 255));
    assert_eq!(decoded.as_raw(), &rgba);
}

#[test]
fn rendering_is_repeatable() {
    let chart = log_log_chart();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (first, ..) = chart.render_to_rgba8(&opts).expect("first render");
    let (second, ..) = chart.render_to_rgba8(&opts).expect("second render");
    assert_eq!(first, second);
    // Gridlines and markers drew something beyond the black canvas.
    assert!(first.chunks_exact(4).any(|p| p != [0, 0, 0, 255]));
}
