// File: crates/engagement-core/src/charts/lineplot.rs
// Summary: Time-series pipeline: band-centred x, zero-based y, natural spline path.

use tracing::{debug, warn};

use crate::axis::Axis;
use crate::config::LinePlotConfig;
use crate::data::Record;
use crate::error::{ChartError, Result};
use crate::geometry::{natural_curve, PathData, Point};
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, Scene, Shape, Stroke, TextStyle};
use crate::stats;

#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    pub category: String,
    pub value: f64,
    pub at: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePlot {
    pub x: BandScale,
    pub y: LinearScale,
    /// Input order, one per record with a numeric value.
    pub points: Vec<LinePoint>,
    pub path: PathData,
}

impl LinePlot {
    pub fn build(records: &[Record], config: &LinePlotConfig) -> Result<Self> {
        let pairs = super::keyed_values(records, &config.category_field, &config.value_field)?;
        let max = stats::max(pairs.iter().map(|&(_, v)| v))
            .ok_or(ChartError::EmptyDomain { what: "line chart value scale" })?;
        let f = config.frame;
        let x = BandScale::new(pairs.iter().map(|&(k, _)| k), (0.0, f.width)).padding(config.padding);
        let y = LinearScale::new((0.0, max), (f.height, 0.0)).nice();

        let mut points = Vec::with_capacity(pairs.len());
        for (category, value) in pairs {
            if value.is_nan() {
                warn!(category, "point without a numeric value skipped");
                continue;
            }
            let Some(cx) = x.center(category) else { continue };
            points.push(LinePoint { category: category.to_string(), value, at: Point::new(cx, y.apply(value)) });
        }
        let at: Vec<Point> = points.iter().map(|p| p.at).collect();
        let path = natural_curve(&at);
        debug!(points = points.len(), y_domain = ?y.domain(), "line chart built");
        Ok(Self { x, y, points, path })
    }

    pub fn scene(&self, config: &LinePlotConfig) -> Scene {
        let f = config.frame;
        let mut scene = Scene::new(&config.mount, f);
        let t = &config.titles;
        Axis::bottom(&self.x, f.height)
            .with_label_rotation(config.tick_rotation, Anchor::End)
            .draw_into(&mut scene);
        Axis::left(&self.y).with_label_size(config.y_tick_size).draw_into(&mut scene);
        scene.x_title(&t.x, t.x_lift, TextStyle::sized(t.size));
        scene.y_title(&t.y, t.y_inset, TextStyle::sized(t.y_size).bold(t.y_bold));

        scene.push(Shape::Path {
            path: self.path.clone(),
            fill: None,
            stroke: Some(Stroke::new(config.stroke, config.stroke_width)),
        });
        scene
    }
}
