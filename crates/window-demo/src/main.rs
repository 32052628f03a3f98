// File: crates/window-demo/src/main.rs
// Summary: Live benchmark window. A background run times the standard workloads while the event loop
// owns the chart, applies each point as it arrives, and blits the rendered RGBA frame via softbuffer.

use std::num::NonZeroU32;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use chart_core::{theme, Chart, ChartConfig, ChartHost, RenderOptions, ScaleKind};
use clap::Parser;
use log::{debug, error, info};
use timekeeper::{workloads, Timekeeper};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

/// Watch squaring vs sorting timings plotted live against input size.
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

    /// initial window width (logical pixels)
    #[clap(long, default_value_t = 600.0)]
    width: f64,

    /// initial window height (logical pixels)
    #[clap(long, default_value_t = 600.0)]
    height: f64,

    /// skip gridline labels
    #[clap(long)]
    no_labels: bool,
}

/// Wakes the event loop: chart requests are queued.
#[derive(Debug, Clone, Copy)]
struct ChartWake;

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

    let event_loop = EventLoopBuilder::<ChartWake>::with_user_event().build();
    let proxy = Mutex::new(event_loop.create_proxy());
    let (mut host, handle) = ChartHost::with_waker(chart, move || {
        if let Ok(proxy) = proxy.lock() {
            // Fails only once the loop has exited.
            let _ = proxy.send_event(ChartWake);
        }
    });

    let window = WindowBuilder::new()
        .with_title("perfchart")
        .with_inner_size(winit::dpi::LogicalSize::new(cli.width, cli.height))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    Timekeeper::new(handle)
        .measure(
            workloads::shuffled_input(cli.min_size, cli.max_size, cli.factor as usize),
            workloads::standard_blocks(),
        )
        .context("starting measurement")?;

    let draw_labels = !cli.no_labels;
    let mut size = window.inner_size();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::UserEvent(ChartWake) => {
                let applied = host.pump();
                debug!("applied {applied} chart update(s)");
                if host.chart_mut().take_needs_display() {
                    window.set_title(&format!("perfchart: {} points", host.chart().len()));
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&host, &mut surface, size, draw_labels) {
                    error!("present failed: {e:#}");
                }
            }
            Event::LoopDestroyed => {
                info!("window closed with {} points", host.chart().len());
            }
            _ => {}
        }
    });
}

/// Render the chart at the window size and copy it into the softbuffer frame.
fn present(
    host: &ChartHost,
    surface: &mut softbuffer::Surface,
    size: PhysicalSize<u32>,
    draw_labels: bool,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(()); // minimized
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

    let opts = RenderOptions { width: w.get() as i32, height: h.get() as i32, draw_labels };
    let (rgba, _, _, _) = host.chart().render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    // softbuffer pixels are 0RGB.
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
