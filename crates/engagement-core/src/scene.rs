// File: crates/engagement-core/src/scene.rs
// Summary: Renderer-agnostic description of one chart: frame, shapes and text labels.

use crate::color::Rgba;
use crate::geometry::{PathData, Point, RectF};
use crate::types::Frame;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self { Self { color, width } }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point, stroke: Stroke },
    Rect { rect: RectF, fill: Option<Rgba>, stroke: Option<Stroke> },
    Path { path: PathData, fill: Option<Rgba>, stroke: Option<Stroke> },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Vertical placement of text relative to its `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Baseline {
    #[default]
    Alphabetic,
    /// `y` is the vertical middle of the glyphs.
    Middle,
    /// `y` is just above the glyph tops.
    Hanging,
}

impl Baseline {
    /// Shift from `y` to the alphabetic baseline, in ems.
    pub fn shift_em(&self) -> f64 {
        match self {
            Baseline::Alphabetic => 0.0,
            Baseline::Middle => 0.32,
            Baseline::Hanging => 0.71,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub anchor: Anchor,
    pub baseline: Baseline,
    pub bold: bool,
    pub color: Rgba,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { size: 16.0, anchor: Anchor::Start, baseline: Baseline::Alphabetic, bold: false, color: Rgba::BLACK }
    }
}

impl TextStyle {
    pub fn sized(size: f64) -> Self { Self { size, ..Self::default() } }
    pub fn anchor(mut self, anchor: Anchor) -> Self { self.anchor = anchor; self }
    pub fn baseline(mut self, baseline: Baseline) -> Self { self.baseline = baseline; self }
    pub fn bold(mut self, bold: bool) -> Self { self.bold = bold; self }
}

/// Text drawn at `offset` after translating to `origin` and rotating by
/// `rotate` degrees (clockwise, screen coordinates).
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub origin: Point,
    pub offset: Point,
    pub rotate: f64,
    pub style: TextStyle,
}

impl TextLabel {
    pub fn at(text: impl Into<String>, x: f64, y: f64, style: TextStyle) -> Self {
        Self { text: text.into(), origin: Point::new(0.0, 0.0), offset: Point::new(x, y), rotate: 0.0, style }
    }

    pub fn rotated(mut self, origin: Point, degrees: f64) -> Self {
        self.origin = origin;
        self.rotate = degrees;
        self
    }
}

/// Everything needed to draw one chart. Coordinates are relative to the
/// plot area; renderers translate by the frame's left/top margin.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub mount: String,
    pub frame: Frame,
    pub shapes: Vec<Shape>,
    pub labels: Vec<TextLabel>,
}

impl Scene {
    pub fn new(mount: impl Into<String>, frame: Frame) -> Self {
        Self { mount: mount.into(), frame, shapes: Vec::new(), labels: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) { self.shapes.push(shape); }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.shapes.push(Shape::Line { from, to, stroke });
    }

    pub fn rect(&mut self, rect: RectF, fill: Option<Rgba>, stroke: Option<Stroke>) {
        self.shapes.push(Shape::Rect { rect, fill, stroke });
    }

    pub fn label(&mut self, label: TextLabel) { self.labels.push(label); }

    /// Horizontal axis title centred under the plot, `lift` px above the bottom edge.
    pub fn x_title(&mut self, text: &str, lift: f64, style: TextStyle) {
        let f = self.frame;
        self.label(TextLabel::at(text, f.width / 2.0, f.height + f.margin.bottom - lift, style.anchor(Anchor::Middle)));
    }

    /// Vertical axis title rotated a quarter turn, `inset` px from the left edge.
    pub fn y_title(&mut self, text: &str, inset: f64, style: TextStyle) {
        let f = self.frame;
        let label = TextLabel::at(text, -f.height / 2.0, -f.margin.left + inset, style.anchor(Anchor::Middle))
            .rotated(Point::new(0.0, 0.0), -90.0);
        self.label(label);
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectF> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }
}
