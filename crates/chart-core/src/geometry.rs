// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Pixel-space point (x right, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned pixel rectangle stored as origin + size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
    /// Rectangle at the origin covering a `width` x `height` surface.
    pub fn from_size(width: i32, height: i32) -> Self {
        Self::from_xywh(0.0, 0.0, width as f32, height as f32)
    }
    pub fn right(&self) -> f32 { self.x + self.width }
    pub fn bottom(&self) -> f32 { self.y + self.height }

    /// Shrink by `insets` on each side. Width and height never go below zero.
    pub fn inset(&self, insets: &Insets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.hsum()).max(0.0),
            height: (self.height - insets.vsum()).max(0.0),
        }
    }

    /// Square of side `size` whose origin is `origin`.
    pub fn square(origin: PointF, size: f32) -> Self {
        Self::from_xywh(origin.x, origin.y, size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_uniform_padding() {
        let r = RectF::from_size(300, 300).inset(&Insets::uniform(40.0));
        assert_eq!(r, RectF::from_xywh(40.0, 40.0, 220.0, 220.0));
        assert_eq!(r.right(), 260.0);
        assert_eq!(r.bottom(), 260.0);
    }

    #[test]
    fn inset_clamps_to_empty() {
        let r = RectF::from_size(50, 30).inset(&Insets::uniform(40.0));
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }
}
