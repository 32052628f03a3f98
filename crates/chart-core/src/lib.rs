// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the point chart, its drawing contract, and the render-thread host.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod surface;
pub mod raster;
pub mod host;
pub mod error;

pub use chart::{Chart, ChartConfig, RenderOptions};
pub use series::{Point, SeriesId};
pub use axis::{AxisId, ScaleKind};
pub use geometry::{PointF, RectF};
pub use scale::{DataBounds, PlotMapping};
pub use theme::Theme;
pub use text::TextShaper;
pub use surface::{Dash, DrawOp, DrawSurface, RecordingSurface, TextAlign, TextStyle};
pub use raster::SkiaSurface;
pub use host::{ChartHandle, ChartHost, ChartOp};
pub use error::ChartError;
