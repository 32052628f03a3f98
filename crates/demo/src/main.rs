// File: crates/demo/src/main.rs
// Summary: Headless run: time squaring vs sorting over growing shuffled inputs, serve the chart on
// the main thread until the run finishes, then write a PNG snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{theme, Chart, ChartConfig, ChartHost, RenderOptions, ScaleKind};
use clap::Parser;
use log::info;
use timekeeper::{workloads, Timekeeper};

/// Benchmark two workloads and save the resulting time-vs-size chart.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// smallest input size
    #[clap(long, default_value_t = 1)]
    min_size: usize,

    /// largest input size (inclusive)
    #[clap(long, default_value_t = 1_000_000)]
    max_size: usize,

    /// multiply the input size by this much each step (must be at least 2)
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(2..))]
    factor: u64,

    /// plot input size on a linear axis instead of log10
    #[clap(long)]
    linear_x: bool,

    /// plot elapsed time on a linear axis instead of log10
    #[clap(long)]
    linear_y: bool,

    /// color theme (classic, dark, light, solarized-dark, high-contrast-dark)
    #[clap(long, default_value = "classic")]
    theme: String,

    /// point marker diameter in pixels
    #[clap(long, default_value_t = 3)]
    point_size: u32,

    /// output image width
    #[clap(long, default_value_t = 600)]
    width: i32,

    /// output image height
    #[clap(long, default_value_t = 600)]
    height: i32,

    /// skip gridline labels
    #[clap(long)]
    no_labels: bool,

    /// where to write the PNG
    #[clap(short, long, default_value = "target/out/perfchart.png")]
    out: PathBuf,
}

fn scale(linear: bool) -> ScaleKind {
    if linear { ScaleKind::Linear } else { ScaleKind::Log10 }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let chart = Chart::with_config(ChartConfig {
        x_scale: scale(cli.linear_x),
        y_scale: scale(cli.linear_y),
        theme: theme::find(&cli.theme),
        point_size: cli.point_size,
    })
    .context("invalid chart configuration")?;

    let (mut host, handle) = ChartHost::new(chart);
    let keeper = Timekeeper::new(handle);
    keeper
        .measure(
            workloads::shuffled_input(cli.min_size, cli.max_size, cli.factor as usize),
            workloads::standard_blocks(),
        )
        .context("starting measurement")?;
    drop(keeper);

    let applied = host.serve_until_disconnected();
    let chart = host.into_chart();
    info!("run complete: {applied} chart updates, {} points", chart.len());

    for p in chart.points() {
        println!(
            "{:>10} {:<6} {:.9}s",
            p.x,
            workloads::STANDARD_NAMES.get(p.series).copied().unwrap_or("?"),
            p.y
        );
    }

    let opts = RenderOptions { width: cli.width, height: cli.height, draw_labels: !cli.no_labels };
    chart
        .render_to_png(&opts, &cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;
    println!("Wrote {}", cli.out.display());
    Ok(())
}
