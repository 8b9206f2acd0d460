// File: crates/chart-render-skia/src/raster.rs
// Summary: Headless PNG rendering of a scene tree using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::scene::{Anchor, Group, LineNode, Node, PathCmd, PathNode, Scene, Stroke, TextNode};
use skia_safe as skia;

use crate::text::{to_skia, TextShaper};

#[derive(Default)]
pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Rasterize `scene` and return encoded PNG bytes.
    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let (w, h) = (scene.width.ceil() as i32, scene.height.ceil() as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(scene.background));
        self.draw_node(canvas, &scene.root);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Rasterize `scene` to a PNG file, creating parent directories.
    pub fn render_png(&self, scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn draw_node(&self, canvas: &skia::Canvas, node: &Node) {
        match node {
            Node::Group(g) => self.draw_group(canvas, g),
            Node::Path(p) => draw_path(canvas, p),
            Node::Line(l) => draw_line(canvas, l),
            Node::Text(t) => self.draw_text(canvas, t),
        }
    }

    fn draw_group(&self, canvas: &skia::Canvas, g: &Group) {
        canvas.save();
        canvas.translate((g.translate.x, g.translate.y));
        for child in &g.children {
            self.draw_node(canvas, child);
        }
        canvas.restore();
    }

    fn draw_text(&self, canvas: &skia::Canvas, t: &TextNode) {
        let s = &t.style;
        canvas.save();
        if s.rotate_deg != 0.0 {
            canvas.rotate(s.rotate_deg, None);
        }
        let width = self.shaper.measure_width(&t.content, s.size, s.weight);
        let x = match s.anchor {
            Anchor::Start => t.pos.x,
            Anchor::Middle => t.pos.x - width / 2.0,
            Anchor::End => t.pos.x - width,
        };
        let y = t.pos.y + s.dy_em * s.size;
        self.shaper.draw_left(canvas, &t.content, x, y, s.size, s.color, s.weight);
        canvas.restore();
    }
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(to_skia(stroke.color));
    paint
}

fn draw_path(canvas: &skia::Canvas, p: &PathNode) {
    let mut path = skia::Path::new();
    for cmd in &p.cmds {
        match cmd {
            PathCmd::MoveTo(pt) => { path.move_to((pt.x, pt.y)); }
            PathCmd::LineTo(pt) => { path.line_to((pt.x, pt.y)); }
            PathCmd::Close => { path.close(); }
        }
    }
    if let Some(fill) = p.fill {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(fill));
        canvas.draw_path(&path, &paint);
    }
    canvas.draw_path(&path, &stroke_paint(&p.stroke));
}

fn draw_line(canvas: &skia::Canvas, l: &LineNode) {
    canvas.draw_line((l.from.x, l.from.y), (l.to.x, l.to.y), &stroke_paint(&l.stroke));
}
