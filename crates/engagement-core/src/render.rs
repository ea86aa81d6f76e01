// File: crates/engagement-core/src/render.rs
// Summary: Scene rendering through Skia: SVG canvas for vector output, CPU raster surface for PNG.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::color::Rgba;
use crate::error::{ChartError, Result};
use crate::geometry::PathCmd;
use crate::scene::{Scene, Shape, Stroke};
use crate::text::TextShaper;

pub struct RenderOptions {
    pub background: Rgba,
    /// Skip text; keeps pixel snapshots independent of installed fonts.
    pub draw_labels: bool,
    /// Pixel ratio for PNG output.
    pub scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: Rgba::WHITE, draw_labels: true, scale: 1.0 }
    }
}

impl Scene {
    /// SVG document bytes.
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (w, h) = (self.frame.outer_width() as f32, self.frame.outer_height() as f32);
        let canvas = skia::svg::Canvas::new(skia::Rect::from_wh(w, h), None);
        draw_scene(&canvas, self, opts);
        let data = canvas.end();
        debug!(mount = %self.mount, bytes = data.as_bytes().len(), "rendered svg");
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts)?;
        write_output(output_svg_path.as_ref(), &bytes)
    }

    /// PNG bytes at `opts.scale` pixels per unit.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let s = opts.scale.max(0.1);
        let w = (self.frame.outer_width() as f32 * s).ceil() as i32;
        let h = (self.frame.outer_height() as f32 * s).ceil() as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
            .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.scale((s, s));
        draw_scene(canvas, self, opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Render("encode PNG failed".into()))?;
        debug!(mount = %self.mount, width = w, height = h, "rendered png");
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn stroke_paint(s: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width as f32);
    paint.set_color(color(s.color));
    paint
}

fn draw_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
    if !opts.background.is_transparent() {
        canvas.draw_color(color(opts.background), skia::BlendMode::Src);
    }
    canvas.save();
    canvas.translate((scene.frame.margin.left as f32, scene.frame.margin.top as f32));

    for shape in &scene.shapes {
        draw_shape(canvas, shape);
    }

    if opts.draw_labels {
        let shaper = TextShaper::new();
        for label in &scene.labels {
            canvas.save();
            canvas.translate((label.origin.x as f32, label.origin.y as f32));
            if label.rotate != 0.0 {
                canvas.rotate(label.rotate as f32, None);
            }
            shaper.draw(canvas, &label.text, label.offset.x as f32, label.offset.y as f32, &label.style);
            canvas.restore();
        }
    }
    canvas.restore();
}

fn draw_shape(canvas: &skia::Canvas, shape: &Shape) {
    match shape {
        Shape::Line { from, to, stroke } => {
            canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &stroke_paint(stroke));
        }
        Shape::Rect { rect, fill, stroke } => {
            if !rect.is_finite() {
                return;
            }
            let r = skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32);
            if let Some(f) = fill {
                canvas.draw_rect(r, &fill_paint(*f));
            }
            if let Some(s) = stroke {
                canvas.draw_rect(r, &stroke_paint(s));
            }
        }
        Shape::Path { path, fill, stroke } => {
            let mut p = skia::Path::new();
            for cmd in path.commands() {
                match *cmd {
                    PathCmd::MoveTo(a) => { p.move_to((a.x as f32, a.y as f32)); }
                    PathCmd::LineTo(a) => { p.line_to((a.x as f32, a.y as f32)); }
                    PathCmd::CubicTo(c1, c2, e) => {
                        p.cubic_to((c1.x as f32, c1.y as f32), (c2.x as f32, c2.y as f32), (e.x as f32, e.y as f32));
                    }
                    PathCmd::Close => { p.close(); }
                }
            }
            if let Some(f) = fill {
                canvas.draw_path(&p, &fill_paint(*f));
            }
            if let Some(s) = stroke {
                canvas.draw_path(&p, &stroke_paint(s));
            }
        }
    }
}
