// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, canvas fill, and marker pixels.

use chart_core::{Chart, RenderOptions};

fn opts(width: i32, height: i32) -> RenderOptions {
    RenderOptions { width, height, draw_labels: false }
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let chart = Chart::new();
    let (px, w, h, stride) = chart.render_to_rgba8(&opts(64, 48)).expect("rgba render");
    assert_eq!((w, h), (64, 48));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Empty chart: every pixel is the opaque black canvas.
    assert!(px.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn markers_use_series_colors_at_mapped_pixels() {
    let mut chart = Chart::new();
    chart.add_series_point(1.0, 100.0, 0).unwrap(); // top-left of the plot rect
    chart.add_series_point(10.0, 1.0, 1).unwrap(); // bottom-right

    let (px, _, _, stride) = chart.render_to_rgba8(&opts(300, 300)).expect("rgba render");
    assert_eq!(pixel(&px, stride, 40, 40), [0, 255, 0, 255]);
    assert_eq!(pixel(&px, stride, 259, 259), [0, 0, 255, 255]);
    // Label margin stays canvas colored.
    assert_eq!(pixel(&px, stride, 10, 150), [0, 0, 0, 255]);
}

#[test]
fn invalid_size_is_an_error() {
    assert!(Chart::new().render_to_rgba8(&opts(0, 10)).is_err());
}
