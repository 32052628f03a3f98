// File: crates/chart-core/benches/render_bench.rs
// Summary: Frame cost of a growing point set, recorded and rasterized.

use anyhow::Result;
use chart_core::{Chart, RecordingSurface, RectF, RenderOptions, ScaleKind};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new();
    ch.set_x_scale(ScaleKind::Log10).expect("empty chart");
    ch.set_y_scale(ScaleKind::Log10).expect("empty chart");
    for i in 1..=n {
        let x = i as f64;
        let y = 1e-7 * x * (1.0 + (x * 0.01).sin().abs());
        ch.add_series_point(x, y, i % 2).expect("positive point");
    }
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &[1_000usize, 20_000usize] {
        let ch = build_chart(n);
        group.bench_function(format!("record_{n}"), |b| {
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                ch.render(&mut surface, RectF::from_size(800, 500));
                black_box(surface.ops.len());
            });
        });
        group.bench_function(format!("rgba_{n}"), |b| {
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false };
            b.iter(|| -> Result<()> {
                let frame = ch.render_to_rgba8(&opts)?;
                black_box(frame);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
