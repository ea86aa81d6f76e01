// File: crates/engagement-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; handles anchors and baselines for scene labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::scene::{Anchor, TextStyle as LabelStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that `(x, y)` is its anchor point on the line given by `style.baseline`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle) {
        let size = style.size as f32;
        let c = style.color;
        let p = self.layout(text, size, skia::Color::from_argb(c.a, c.r, c.g, c.b), style.bold);
        let dx = match style.anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => -p.longest_line() / 2.0,
            Anchor::End => -p.longest_line(),
        };
        let baseline = y + style.baseline.shift_em() as f32 * size;
        // Paragraph draws from top-left; step back from the baseline by its ascent
        p.paint(canvas, (x + dx, baseline - p.alphabetic_baseline()));
    }
}
