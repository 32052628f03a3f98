// File: crates/chart-core/src/scale.rs
// Summary: Display-space data bounds and the linear data -> pixel mapping onto the plot rectangle.

use crate::geometry::{PointF, RectF};
use crate::series::Point;

/// Min/max of display-space points on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// `None` for an empty set.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut b = Self { x_min: first.x, x_max: first.x, y_min: first.y, y_max: first.y };
        for p in iter {
            b.x_min = b.x_min.min(p.x);
            b.x_max = b.x_max.max(p.x);
            b.y_min = b.y_min.min(p.y);
            b.y_max = b.y_max.max(p.y);
        }
        Some(b)
    }
}

/// Maps display-space coordinates onto a plot rectangle, y inverted.
///
/// The scale uses `extent - 1` so that the minimum lands on the first pixel
/// and the maximum on the last pixel inside the rectangle. An axis whose
/// bounds collapse to one value maps every coordinate to its origin edge:
/// left for x, bottom for y.
#[derive(Clone, Copy, Debug)]
pub struct PlotMapping {
    pub rect: RectF,
    pub bounds: DataBounds,
    x_scale: f64,
    y_scale: f64,
}

impl PlotMapping {
    pub fn new(rect: RectF, bounds: DataBounds) -> Self {
        Self {
            rect,
            bounds,
            x_scale: px_per_unit(rect.width, bounds.x_min, bounds.x_max),
            y_scale: px_per_unit(rect.height, bounds.y_min, bounds.y_max),
        }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        self.rect.x + ((x - self.bounds.x_min) * self.x_scale) as f32
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        self.rect.y + (self.rect.height - 1.0).max(0.0) - ((y - self.bounds.y_min) * self.y_scale) as f32
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> PointF {
        PointF::new(self.to_px_x(x), self.to_px_y(y))
    }
}

fn px_per_unit(extent: f32, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span > 0.0 {
        (extent as f64 - 1.0).max(0.0) / span
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_empty_set() {
        assert_eq!(DataBounds::from_points(std::iter::empty::<&Point>()), None);
    }

    #[test]
    fn bounds_cover_all_points() {
        let pts = [Point::new(3.0, -1.0, 0), Point::new(-2.0, 5.0, 1), Point::new(0.5, 0.0, 0)];
        let b = DataBounds::from_points(&pts).expect("non-empty");
        assert_eq!(b, DataBounds { x_min: -2.0, x_max: 3.0, y_min: -1.0, y_max: 5.0 });
    }
}
