// File: crates/chart-core/src/svg.rs
// Summary: Serialize a scene tree into a standalone SVG document.

use crate::geometry::Point;
use crate::scene::{Anchor, FontWeight, Group, LineNode, Node, PathCmd, PathNode, Scene, Stroke, TextNode};
use crate::theme::{Color, Theme};

pub fn to_svg_string(scene: &Scene, theme: &Theme) -> String {
    let (w, h) = (num(scene.width), num(scene.height));
    let mut out = String::with_capacity(4096);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    out.push_str(&format!(
        "  <style>text {{ font-family: {}; }} .title {{ font-size: {}px; font-weight: bold; }} .axis-label {{ font-size: {}px; }}</style>\n",
        theme.font_family,
        num(theme.title_size),
        num(theme.axis_label_size),
    ));
    out.push_str(&format!("  <rect width=\"100%\" height=\"100%\"{}/>\n", paint("fill", scene.background)));
    write_node(&mut out, &scene.root, 1);
    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Group(g) => write_group(out, g, depth),
        Node::Path(p) => out.push_str(&format!("{pad}{}\n", path(p))),
        Node::Line(l) => out.push_str(&format!("{pad}{}\n", line(l))),
        Node::Text(t) => out.push_str(&format!("{pad}{}\n", text(t))),
    }
}

fn write_group(out: &mut String, g: &Group, depth: usize) {
    let pad = "  ".repeat(depth);
    let mut attrs = String::new();
    if g.translate != Point::ORIGIN {
        attrs.push_str(&format!(" transform=\"translate({},{})\"", num(g.translate.x), num(g.translate.y)));
    }
    if let Some(class) = &g.class {
        attrs.push_str(&format!(" class=\"{}\"", escape(class)));
    }
    out.push_str(&format!("{pad}<g{attrs}>\n"));
    for child in &g.children {
        write_node(out, child, depth + 1);
    }
    out.push_str(&format!("{pad}</g>\n"));
}

fn path(p: &PathNode) -> String {
    let mut d = String::new();
    for cmd in &p.cmds {
        match cmd {
            PathCmd::MoveTo(pt) => d.push_str(&format!("M{},{}", num(pt.x), num(pt.y))),
            PathCmd::LineTo(pt) => d.push_str(&format!("L{},{}", num(pt.x), num(pt.y))),
            PathCmd::Close => d.push('Z'),
        }
    }
    let fill = match p.fill {
        Some(c) => paint("fill", c),
        None => " fill=\"none\"".to_string(),
    };
    format!("<path d=\"{d}\"{fill}{}/>", stroke(&p.stroke))
}

fn line(l: &LineNode) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
        num(l.from.x),
        num(l.from.y),
        num(l.to.x),
        num(l.to.y),
        stroke(&l.stroke)
    )
}

fn text(t: &TextNode) -> String {
    let s = &t.style;
    let mut attrs = format!(" x=\"{}\" y=\"{}\"", num(t.pos.x), num(t.pos.y));
    if s.dy_em != 0.0 {
        attrs.push_str(&format!(" dy=\"{}em\"", num(s.dy_em)));
    }
    if s.rotate_deg != 0.0 {
        attrs.push_str(&format!(" transform=\"rotate({})\"", num(s.rotate_deg)));
    }
    if let Some(class) = &t.class {
        attrs.push_str(&format!(" class=\"{}\"", escape(class)));
    }
    attrs.push_str(&format!(" font-size=\"{}\"", num(s.size)));
    if s.weight == FontWeight::Bold {
        attrs.push_str(" font-weight=\"bold\"");
    }
    let anchor = match s.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    attrs.push_str(&format!(" text-anchor=\"{anchor}\"{}", paint("fill", s.color)));
    format!("<text{attrs}>{}</text>", escape(&t.content))
}

fn stroke(s: &Stroke) -> String {
    format!("{} stroke-width=\"{}\"", paint("stroke", s.color), num(s.width))
}

/// `name="#rrggbb"` plus `name-opacity` when translucent.
fn paint(name: &str, c: Color) -> String {
    if c.a == 255 {
        format!(" {name}=\"{}\"", c.to_hex())
    } else {
        format!(" {name}=\"{}\" {name}-opacity=\"{}\"", c.to_hex(), num(c.opacity()))
    }
}

/// Up to two decimals, trailing zeros dropped.
fn num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
