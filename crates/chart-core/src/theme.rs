// File: crates/chart-core/src/theme.rs
// Summary: Canvas/axis colors and the cyclic per-series point palette, with named presets.

use skia_safe as skia;

use crate::error::ChartError;
use crate::series::SeriesId;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub canvas: skia::Color,
    pub axis: skia::Color,
    /// Point colors, selected by `series % len`. Never empty once accepted by a chart.
    pub points: Vec<skia::Color>,
}

impl Theme {
    /// Black canvas, red axis, green/blue/magenta points.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            canvas: skia::Color::BLACK,
            axis: skia::Color::RED,
            points: vec![skia::Color::GREEN, skia::Color::BLUE, skia::Color::MAGENTA],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            canvas: skia::Color::from_argb(255, 18, 18, 20),
            axis: skia::Color::from_argb(255, 180, 180, 190),
            points: vec![
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 255, 230, 70),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            canvas: skia::Color::from_argb(255, 250, 250, 252),
            axis: skia::Color::from_argb(255, 60, 60, 70),
            points: vec![
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 200, 60, 60),
            ],
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            canvas: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            axis: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),   // base1
            points: vec![
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
                skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                skia::Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            canvas: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            points: vec![
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
            ],
        }
    }

    /// Color of `series`, wrapping around the palette.
    ///
    /// Panics on an empty palette; charts reject such themes up front.
    #[inline]
    pub fn point_color(&self, series: SeriesId) -> skia::Color {
        self.points[series % self.points.len()]
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        if self.points.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::classic(),
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
