// File: crates/chart-core/src/surface.rs
// Summary: Display-surface contract the renderer draws through, plus a recording implementation.

use skia_safe as skia;

use crate::geometry::{PointF, RectF};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: skia::Color,
    pub align: TextAlign,
}

/// On/off dash lengths and starting phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub intervals: [f32; 2],
    pub phase: f32,
}

/// 2D drawing operations the chart needs from a host surface.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: RectF, color: skia::Color);
    /// One-pixel outline.
    fn stroke_rect(&mut self, rect: RectF, color: skia::Color);
    fn dashed_line(&mut self, from: PointF, to: PointF, dash: Dash, color: skia::Color);
    /// Filled ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: RectF, color: skia::Color);
    /// Draw `text` laid out inside `rect`, aligned horizontally per `style`.
    fn draw_text(&mut self, text: &str, rect: RectF, style: &TextStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect { rect: RectF, color: skia::Color },
    StrokeRect { rect: RectF, color: skia::Color },
    DashedLine { from: PointF, to: PointF, dash: Dash, color: skia::Color },
    FillEllipse { rect: RectF, color: skia::Color },
    Text { text: String, rect: RectF, style: TextStyle },
}

/// Surface that keeps every call as a `DrawOp`; used for inspecting frames without a raster backend.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ellipses(&self) -> impl Iterator<Item = (&RectF, &skia::Color)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillEllipse { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn dashed_lines(&self) -> impl Iterator<Item = (&PointF, &PointF)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::DashedLine { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &RectF, &TextStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, rect, style } => Some((text.as_str(), rect, style)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: RectF, color: skia::Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }
    fn stroke_rect(&mut self, rect: RectF, color: skia::Color) {
        self.ops.push(DrawOp::StrokeRect { rect, color });
    }
    fn dashed_line(&mut self, from: PointF, to: PointF, dash: Dash, color: skia::Color) {
        self.ops.push(DrawOp::DashedLine { from, to, dash, color });
    }
    fn fill_ellipse(&mut self, rect: RectF, color: skia::Color) {
        self.ops.push(DrawOp::FillEllipse { rect, color });
    }
    fn draw_text(&mut self, text: &str, rect: RectF, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_owned(), rect, style: *style });
    }
}
