// File: crates/engagement-core/src/axis.rs
// Summary: Bottom/left axis guides (domain line, tick marks, tick labels) built from scales.

use crate::color::Rgba;
use crate::geometry::{PathData, Point};
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, Baseline, Scene, Shape, Stroke, TextLabel, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Something an axis can be drawn for.
pub trait TickSource {
    fn tick_marks(&self) -> Vec<Tick>;
    fn pixel_range(&self) -> (f64, f64);
}

impl TickSource for BandScale {
    fn tick_marks(&self) -> Vec<Tick> {
        self.domain()
            .iter()
            .filter_map(|k| self.center(k).map(|position| Tick { position, label: k.clone() }))
            .collect()
    }
    fn pixel_range(&self) -> (f64, f64) { self.range() }
}

impl TickSource for LinearScale {
    fn tick_marks(&self) -> Vec<Tick> {
        let fmt = self.tick_format(10);
        self.ticks(10)
            .into_iter()
            .map(|v| Tick { position: self.apply(v), label: fmt.format(v) })
            .collect()
    }
    fn pixel_range(&self) -> (f64, f64) { self.range() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Axis line position across the axis: y for bottom axes, x for left ones.
    pub offset: f64,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    pub label_size: f64,
    pub label_rotate: f64,
    pub label_anchor: Option<Anchor>,
    pub color: Rgba,
}

impl Axis {
    pub fn new(orient: Orient, scale: &impl TickSource, offset: f64) -> Self {
        Self {
            orient,
            offset,
            range: scale.pixel_range(),
            ticks: scale.tick_marks(),
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            label_size: 10.0,
            label_rotate: 0.0,
            label_anchor: None,
            color: Rgba::BLACK,
        }
    }

    pub fn bottom(scale: &impl TickSource, y: f64) -> Self { Self::new(Orient::Bottom, scale, y) }

    pub fn left(scale: &impl TickSource) -> Self { Self::new(Orient::Left, scale, 0.0) }

    /// Rotate tick labels about their tick and override their anchor.
    pub fn with_label_rotation(mut self, degrees: f64, anchor: Anchor) -> Self {
        self.label_rotate = degrees;
        self.label_anchor = Some(anchor);
        self
    }

    pub fn with_label_size(mut self, size: f64) -> Self {
        self.label_size = size;
        self
    }

    /// Append the axis line, tick marks and tick labels to `scene`.
    pub fn draw_into(&self, scene: &mut Scene) {
        let stroke = Stroke::new(self.color, 1.0);
        let k = self.direction();
        let (r0, r1) = self.range;
        let o = self.tick_size_outer * k;
        let mut domain = PathData::new();
        match self.orient {
            Orient::Bottom => {
                let y = self.offset;
                domain
                    .move_to(Point::new(r0, y + o))
                    .line_to(Point::new(r0, y))
                    .line_to(Point::new(r1, y))
                    .line_to(Point::new(r1, y + o));
            }
            Orient::Left => {
                let x = self.offset;
                domain
                    .move_to(Point::new(x + o, r0))
                    .line_to(Point::new(x, r0))
                    .line_to(Point::new(x, r1))
                    .line_to(Point::new(x + o, r1));
            }
        }
        scene.push(Shape::Path { path: domain, fill: None, stroke: Some(stroke) });

        let inner = self.tick_size_inner * k;
        let spacing = (self.tick_size_inner.max(0.0) + self.tick_padding) * k;
        for t in &self.ticks {
            let (tick_origin, tick_end, text_offset, anchor, baseline) = match self.orient {
                Orient::Bottom => (
                    Point::new(t.position, self.offset),
                    Point::new(t.position, self.offset + inner),
                    Point::new(0.0, spacing),
                    Anchor::Middle,
                    Baseline::Hanging,
                ),
                Orient::Left => (
                    Point::new(self.offset, t.position),
                    Point::new(self.offset + inner, t.position),
                    Point::new(spacing, 0.0),
                    Anchor::End,
                    Baseline::Middle,
                ),
            };
            scene.line(tick_origin, tick_end, stroke);
            let style = TextStyle {
                size: self.label_size,
                anchor: self.label_anchor.unwrap_or(anchor),
                baseline,
                bold: false,
                color: self.color,
            };
            let label = TextLabel::at(t.label.clone(), text_offset.x, text_offset.y, style)
                .rotated(tick_origin, self.label_rotate);
            scene.label(label);
        }
    }

    fn direction(&self) -> f64 {
        match self.orient {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        }
    }
}
