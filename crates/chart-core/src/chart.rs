// File: crates/chart-core/src/chart.rs
// Summary: Chart state (points + display config), the frame rendering algorithm, and the Skia raster pipeline.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{AxisId, ScaleKind};
use crate::error::ChartError;
use crate::geometry::RectF;
use crate::grid::{decade_label, interior_decades};
use crate::raster::SkiaSurface;
use crate::scale::{DataBounds, PlotMapping};
use crate::series::{Point, SeriesId};
use crate::surface::{Dash, DrawSurface, TextAlign, TextStyle};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{
    Insets, BODY_PADDING, GRID_DASH, GRID_DASH_PHASE, HEIGHT, LABEL_FONT_SIZE, LABEL_PADDING,
    LABEL_WIDTH, POINT_SIZE, WIDTH,
};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Draw gridline labels. Off gives output that does not depend on system fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, draw_labels: true }
    }
}

/// Display configuration of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    pub theme: Theme,
    /// Point marker diameter in pixels.
    pub point_size: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            theme: Theme::classic(),
            point_size: POINT_SIZE,
        }
    }
}

/// Accumulated measurement points and how to draw them.
///
/// Every accepted point is finite and strictly positive on any logarithmic
/// axis, so the display transform never produces non-finite coordinates.
#[derive(Clone, Debug)]
pub struct Chart {
    config: ChartConfig,
    points: Vec<Point>,
    needs_display: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self { config: ChartConfig::default(), points: Vec::new(), needs_display: true }
    }

    pub fn with_config(config: ChartConfig) -> Result<Self, ChartError> {
        config.theme.validate()?;
        Ok(Self { config, points: Vec::new(), needs_display: true })
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Switch the x axis scale. Fails, leaving the chart unchanged, if a stored
    /// point cannot be shown on the new scale.
    pub fn set_x_scale(&mut self, kind: ScaleKind) -> Result<(), ChartError> {
        for p in &self.points {
            kind.validate(AxisId::X, p.x)?;
        }
        self.config.x_scale = kind;
        self.needs_display = true;
        Ok(())
    }

    /// Switch the y axis scale; see [`Chart::set_x_scale`].
    pub fn set_y_scale(&mut self, kind: ScaleKind) -> Result<(), ChartError> {
        for p in &self.points {
            kind.validate(AxisId::Y, p.y)?;
        }
        self.config.y_scale = kind;
        self.needs_display = true;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ChartError> {
        theme.validate()?;
        self.config.theme = theme;
        self.needs_display = true;
        Ok(())
    }

    pub fn set_point_size(&mut self, size: u32) {
        self.config.point_size = size;
        self.needs_display = true;
    }

    /// Drop every point.
    pub fn reset(&mut self) {
        self.points.clear();
        self.needs_display = true;
    }

    /// Append a point to series 0.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<(), ChartError> {
        self.push(Point::new(x, y, 0))
    }

    pub fn add_series_point(&mut self, x: f64, y: f64, series: SeriesId) -> Result<(), ChartError> {
        self.push(Point::new(x, y, series))
    }

    pub fn push(&mut self, point: Point) -> Result<(), ChartError> {
        self.config.x_scale.validate(AxisId::X, point.x)?;
        self.config.y_scale.validate(AxisId::Y, point.y)?;
        self.points.push(point);
        self.needs_display = true;
        Ok(())
    }

    /// Whether state changed since the last [`Chart::take_needs_display`].
    pub fn needs_display(&self) -> bool { self.needs_display }

    /// Read and clear the redraw request.
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    /// Points in display space, in insertion order.
    pub fn display_points(&self) -> Vec<Point> {
        let (xs, ys) = (self.config.x_scale, self.config.y_scale);
        self.points.iter().map(|p| p.transform(xs, ys)).collect()
    }

    /// Draw the current state into `bounds` on `surface`.
    pub fn render(&self, surface: &mut dyn DrawSurface, bounds: RectF) {
        let theme = &self.config.theme;
        surface.fill_rect(bounds, theme.canvas);

        let points = self.display_points();
        let Some(data) = DataBounds::from_points(&points) else {
            return;
        };

        let plot = bounds.inset(&Insets::default());
        let map = PlotMapping::new(plot, data);

        surface.stroke_rect(plot, theme.axis);
        self.draw_log_grid(surface, &map);

        let size = self.config.point_size as f32;
        let offset = (size - 1.0) / 2.0;
        for p in &points {
            let origin = map.to_px(p.x, p.y).offset(-offset, -offset);
            surface.fill_ellipse(RectF::square(origin, size), theme.point_color(p.series));
        }
    }

    fn draw_log_grid(&self, surface: &mut dyn DrawSurface, map: &PlotMapping) {
        let axis = self.config.theme.axis;
        let dash = Dash { intervals: GRID_DASH, phase: GRID_DASH_PHASE };
        let b = map.bounds;

        if self.config.x_scale.is_log() {
            let style = TextStyle { size: LABEL_FONT_SIZE, color: axis, align: TextAlign::Center };
            for k in interior_decades(b.x_min, b.x_max) {
                let bottom = map.to_px(k as f64, b.y_min);
                let top = map.to_px(k as f64, b.y_max);
                surface.dashed_line(bottom, top, dash, axis);
                let origin = bottom.offset(-LABEL_WIDTH / 2.0, LABEL_PADDING);
                surface.draw_text(&decade_label(k), RectF::square(origin, LABEL_WIDTH), &style);
            }
        }

        if self.config.y_scale.is_log() {
            let style = TextStyle { size: LABEL_FONT_SIZE, color: axis, align: TextAlign::Right };
            for k in interior_decades(b.y_min, b.y_max) {
                let left = map.to_px(b.x_min, k as f64);
                let right = map.to_px(b.x_max, k as f64);
                surface.dashed_line(left, right, dash, axis);
                let origin = left.offset(-BODY_PADDING, -LABEL_FONT_SIZE / 2.0);
                surface.draw_text(&decade_label(k), RectF::square(origin, LABEL_WIDTH), &style);
            }
        }
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        {
            let shaper = opts.draw_labels.then(TextShaper::new);
            let mut target = SkiaSurface::new(surface.canvas(), shaper.as_ref());
            self.render(&mut target, RectF::from_size(opts.width, opts.height));
        }
        Ok(surface)
    }

    /// Render to tightly packed, unpremultiplied RGBA8 pixels.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = info.min_row_bytes();
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}
