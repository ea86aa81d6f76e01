// File: crates/engagement-core/src/charts/barplot.rs
// Summary: Grouped bar chart pipeline: nested band scales, zero-based value scale, palette legend.

use tracing::{debug, warn};

use crate::axis::Axis;
use crate::color::Rgba;
use crate::config::BarPlotConfig;
use crate::data::Record;
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::scale::{BandScale, LinearScale, OrdinalScale};
use crate::scene::{Baseline, Scene, TextLabel, TextStyle};
use crate::stats;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub category: String,
    pub group: String,
    pub value: f64,
    pub rect: RectF,
    pub fill: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarPlot {
    /// Categories across the plot.
    pub x0: BandScale,
    /// Groups inside one category band, over `[0, x0.bandwidth()]`.
    pub x1: BandScale,
    pub y: LinearScale,
    pub color: OrdinalScale<Rgba>,
    pub bars: Vec<Bar>,
}

impl BarPlot {
    pub fn build(records: &[Record], config: &BarPlotConfig) -> Result<Self> {
        let mut rows = Vec::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            let category = r.category(&config.category_field, i + 1)?;
            let group = r.category(&config.group_field, i + 1)?;
            rows.push((category, group, r.number(&config.value_field).unwrap_or(f64::NAN)));
        }
        let max = stats::max(rows.iter().map(|&(_, _, v)| v))
            .ok_or(ChartError::EmptyDomain { what: "bar chart value scale" })?;

        let f = config.frame;
        let x0 = BandScale::new(rows.iter().map(|&(c, _, _)| c), (0.0, f.width)).padding(config.padding);
        let x1 = BandScale::new(rows.iter().map(|&(_, g, _)| g), (0.0, x0.bandwidth())).padding(config.group_padding);
        let y = LinearScale::new((0.0, max), (f.height, 0.0)).nice();
        let color = OrdinalScale::new(x1.domain(), config.palette.clone());

        let mut bars = Vec::with_capacity(rows.len());
        for (category, group, value) in rows {
            if value.is_nan() {
                warn!(category, group, "bar without a numeric value skipped");
                continue;
            }
            let (Some(slot), Some(offset)) = (x0.position(category), x1.position(group)) else { continue };
            let top = y.apply(value);
            bars.push(Bar {
                category: category.to_string(),
                group: group.to_string(),
                value,
                rect: RectF::from_xywh(slot + offset, top, x1.bandwidth(), f.height - top),
                fill: color.get(group).copied().unwrap_or(Rgba::BLACK),
            });
        }
        debug!(bars = bars.len(), categories = x0.domain().len(), groups = x1.domain().len(), "bar chart built");
        Ok(Self { x0, x1, y, color, bars })
    }

    /// Legend rows in group order: name and swatch color.
    pub fn legend(&self) -> Vec<(&str, Rgba)> {
        self.color
            .domain()
            .iter()
            .map(|g| (g.as_str(), self.color.get(g).copied().unwrap_or(Rgba::BLACK)))
            .collect()
    }

    pub fn scene(&self, config: &BarPlotConfig) -> Scene {
        let f = config.frame;
        let mut scene = Scene::new(&config.mount, f);
        let t = &config.titles;
        Axis::bottom(&self.x0, f.height).draw_into(&mut scene);
        scene.x_title(&t.x, t.x_lift, TextStyle::sized(t.size));
        Axis::left(&self.y).draw_into(&mut scene);
        scene.y_title(&t.y, t.y_inset, TextStyle::sized(t.y_size).bold(t.y_bold));

        for b in &self.bars {
            scene.rect(b.rect, Some(b.fill), None);
        }

        let l = &config.legend;
        let (lx, ly) = (f.width + l.x_gap, l.y);
        for (i, (name, fill)) in self.legend().into_iter().enumerate() {
            let row = i as f64 * l.row_height;
            scene.rect(RectF::from_xywh(lx, ly + row, l.swatch, l.swatch), Some(fill), None);
            let style = TextStyle::sized(l.font_size).baseline(Baseline::Middle);
            scene.label(TextLabel::at(name, lx + l.text_x, ly + row + l.text_dy, style));
        }
        scene
    }
}
