// File: crates/chart-core/src/raster.rs
// Summary: DrawSurface implementation over a Skia canvas.

use skia_safe as skia;

use crate::geometry::{PointF, RectF};
use crate::surface::{Dash, DrawSurface, TextStyle};
use crate::text::TextShaper;

/// Draws onto a borrowed Skia canvas. Text is skipped when no shaper is given,
/// which keeps raster output independent of installed fonts.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    text: Option<&'a TextShaper>,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: Option<&'a TextShaper>) -> Self {
        Self { canvas, text }
    }
}

fn to_sk(rect: RectF) -> skia::Rect {
    skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

fn paint(color: skia::Color, style: skia::paint::Style) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_color(color);
    p.set_anti_alias(true);
    p.set_style(style);
    p.set_stroke_width(1.0);
    p
}

impl DrawSurface for SkiaSurface<'_> {
    fn fill_rect(&mut self, rect: RectF, color: skia::Color) {
        self.canvas.draw_rect(to_sk(rect), &paint(color, skia::paint::Style::Fill));
    }

    fn stroke_rect(&mut self, rect: RectF, color: skia::Color) {
        self.canvas.draw_rect(to_sk(rect), &paint(color, skia::paint::Style::Stroke));
    }

    fn dashed_line(&mut self, from: PointF, to: PointF, dash: Dash, color: skia::Color) {
        let mut p = paint(color, skia::paint::Style::Stroke);
        p.set_path_effect(skia::PathEffect::dash(&dash.intervals, dash.phase));
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &p);
    }

    fn fill_ellipse(&mut self, rect: RectF, color: skia::Color) {
        self.canvas.draw_oval(to_sk(rect), &paint(color, skia::paint::Style::Fill));
    }

    fn draw_text(&mut self, text: &str, rect: RectF, style: &TextStyle) {
        if let Some(shaper) = self.text {
            shaper.draw_in(self.canvas, text, rect, style);
        }
    }
}
