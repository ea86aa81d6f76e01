// File: crates/engagement-core/src/charts/boxplot.rs
// Summary: Box plot pipeline: group values by category, summarize quartiles, map to boxes.

use tracing::debug;

use crate::axis::Axis;
use crate::config::BoxPlotConfig;
use crate::data::Record;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, RectF};
use crate::group::Groups;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Scene, Stroke, TextStyle};
use crate::stats::{self, QuartileSummary};

/// Pixel geometry of one box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxGeometry {
    /// Vertical segment from min to max at the band center.
    pub whisker: (Point, Point),
    /// q3 at the top edge, q1 at the bottom edge, full band width.
    pub body: RectF,
    pub median: (Point, Point),
}

/// Lay out `summary` in the band starting at `x` with width `bandwidth`.
pub fn box_geometry(summary: &QuartileSummary, x: f64, bandwidth: f64, y: &LinearScale) -> BoxGeometry {
    let cx = x + bandwidth / 2.0;
    let (y_q1, y_q3, y_med) = (y.apply(summary.q1), y.apply(summary.q3), y.apply(summary.median));
    BoxGeometry {
        whisker: (Point::new(cx, y.apply(summary.min)), Point::new(cx, y.apply(summary.max))),
        body: RectF::from_xywh(x, y_q3, bandwidth, y_q1 - y_q3),
        median: (Point::new(x, y_med), Point::new(x + bandwidth, y_med)),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoxGroup {
    pub category: String,
    pub summary: QuartileSummary,
    pub geometry: BoxGeometry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoxPlot {
    pub x: BandScale,
    pub y: LinearScale,
    pub groups: Vec<BoxGroup>,
}

impl BoxPlot {
    pub fn build(records: &[Record], config: &BoxPlotConfig) -> Result<Self> {
        let pairs = super::keyed_values(records, &config.category_field, &config.value_field)?;
        let (lo, hi) = stats::extent(pairs.iter().map(|&(_, v)| v))
            .ok_or(ChartError::EmptyDomain { what: "box plot value scale" })?;
        let f = config.frame;
        let x = BandScale::new(pairs.iter().map(|&(k, _)| k), (0.0, f.width)).padding(config.padding);
        let y = LinearScale::new((lo, hi), (f.height, 0.0)).nice();

        let by_category: Groups<f64> = pairs.into_iter().collect();
        let mut groups = Vec::with_capacity(by_category.len());
        for (category, summary) in by_category.rollup(QuartileSummary::from_values) {
            let (Some(summary), Some(left)) = (summary, x.position(&category)) else {
                debug!(%category, "no numeric values; box skipped");
                continue;
            };
            let geometry = box_geometry(&summary, left, x.bandwidth(), &y);
            groups.push(BoxGroup { category, summary, geometry });
        }
        debug!(groups = groups.len(), y_domain = ?y.domain(), "box plot built");
        Ok(Self { x, y, groups })
    }

    pub fn scene(&self, config: &BoxPlotConfig) -> Scene {
        let f = config.frame;
        let mut scene = Scene::new(&config.mount, f);
        let t = &config.titles;
        Axis::bottom(&self.x, f.height).draw_into(&mut scene);
        scene.x_title(&t.x, t.x_lift, TextStyle::sized(t.size));
        Axis::left(&self.y).draw_into(&mut scene);
        scene.y_title(&t.y, t.y_inset, TextStyle::sized(t.y_size).bold(t.y_bold));

        let stroke = Stroke::new(config.stroke, 1.0);
        for g in &self.groups {
            let b = &g.geometry;
            scene.line(b.whisker.0, b.whisker.1, stroke);
            scene.rect(b.body, Some(config.box_fill), Some(stroke));
            scene.line(b.median.0, b.median.1, stroke);
        }
        scene
    }
}
