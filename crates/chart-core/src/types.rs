// File: crates/chart-core/src/types.rs
// Summary: Shared constants (surface size, paddings, label metrics) and plot insets.

/// Default surface width in pixels.
pub const WIDTH: i32 = 300;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;

/// Space reserved on every side of the plot rectangle for axis labels.
pub const BODY_PADDING: f32 = 40.0;
/// Gap between a gridline end and its label box.
pub const LABEL_PADDING: f32 = 4.0;
/// Width (and height) of a gridline label box.
pub const LABEL_WIDTH: f32 = BODY_PADDING - LABEL_PADDING;
/// Font size of gridline labels, in pixels.
pub const LABEL_FONT_SIZE: f32 = 12.0;

/// Default point marker diameter, in pixels.
pub const POINT_SIZE: u32 = 3;

/// Dash pattern of log gridlines: on/off lengths and phase.
pub const GRID_DASH: [f32; 2] = [5.0, 5.0];
pub const GRID_DASH_PHASE: f32 = 5.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    /// Same margin on all four sides.
    pub const fn uniform(v: f32) -> Self {
        Self { left: v, right: v, top: v, bottom: v }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(BODY_PADDING)
    }
}
