// File: crates/engagement-core/src/lib.rs
// Summary: Core library entry point; exports the chart pipelines, scales, statistics and renderers.

pub mod axis;
pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod group;
pub mod page;
pub mod render;
pub mod scale;
pub mod scene;
pub mod stats;
pub mod text;
pub mod types;

pub use axis::{Axis, Orient, Tick, TickSource};
pub use charts::{BarPlot, BoxPlot, ChartKind, LinePlot};
pub use color::Rgba;
pub use config::{BarPlotConfig, BoxPlotConfig, ChartsConfig, LinePlotConfig};
pub use data::{coerce_numeric, load_csv, CoercionPolicy, Record, Value};
pub use error::{ChartError, Result};
pub use geometry::{natural_curve, PathCmd, PathData, Point, RectF};
pub use group::{distinct, Groups};
pub use render::RenderOptions;
pub use scale::{BandScale, LinearScale, OrdinalScale};
pub use scene::{Scene, Shape};
pub use stats::QuartileSummary;
pub use text::TextShaper;
pub use types::{Frame, Margin};
