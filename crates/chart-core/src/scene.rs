// File: crates/chart-core/src/scene.rs
// Summary: Immutable tree of draw commands handed to a rendering backend.
// Notes:
// - Coordinates are pixels relative to the enclosing group's translation.
// - Backends (SVG writer, Skia rasterizer) walk the tree; nothing mutates it
//   once `Chart::build_scene` returns.

use crate::geometry::Point;
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub root: Node,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Path(PathNode),
    Line(LineNode),
    Text(TextNode),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub translate: Point,
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(translate: Point, children: Vec<Node>) -> Self {
        Self { translate, class: None, children }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub cmds: Vec<PathCmd>,
    pub stroke: Stroke,
    pub fill: Option<Color>,
}

impl PathNode {
    /// Open polyline through `points`. A lone point becomes `M p Z` so
    /// backends still emit a (degenerate) path.
    pub fn polyline(points: &[Point], stroke: Stroke) -> Self {
        let mut cmds = Vec::with_capacity(points.len() + 1);
        for (i, &p) in points.iter().enumerate() {
            cmds.push(if i == 0 { PathCmd::MoveTo(p) } else { PathCmd::LineTo(p) });
        }
        if points.len() == 1 {
            cmds.push(PathCmd::Close);
        }
        Self { cmds, stroke, fill: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineNode {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub anchor: Anchor,
    pub color: Color,
    /// Rotation in degrees about the group origin, applied before `pos`.
    pub rotate_deg: f32,
    /// Baseline shift in em units.
    pub dy_em: f32,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self { size, weight: FontWeight::Normal, anchor: Anchor::Start, color, rotate_deg: 0.0, dy_em: 0.0 }
    }
    pub fn anchor(mut self, anchor: Anchor) -> Self { self.anchor = anchor; self }
    pub fn bold(mut self) -> Self { self.weight = FontWeight::Bold; self }
    pub fn rotate(mut self, deg: f32) -> Self { self.rotate_deg = deg; self }
    pub fn dy(mut self, em: f32) -> Self { self.dy_em = em; self }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub pos: Point,
    pub content: String,
    pub style: TextStyle,
    pub class: Option<String>,
}

impl Scene {
    /// Leaf nodes paired with the absolute translation of their parent group.
    pub fn leaves(&self) -> Vec<(Point, &Node)> {
        fn walk<'a>(node: &'a Node, offset: Point, out: &mut Vec<(Point, &'a Node)>) {
            match node {
                Node::Group(g) => {
                    for child in &g.children {
                        walk(child, offset + g.translate, out);
                    }
                }
                leaf => out.push((offset, leaf)),
            }
        }
        let mut out = Vec::new();
        walk(&self.root, Point::ORIGIN, &mut out);
        out
    }

    /// All text nodes in document order.
    pub fn texts(&self) -> Vec<&TextNode> {
        self.leaves()
            .into_iter()
            .filter_map(|(_, n)| match n { Node::Text(t) => Some(t), _ => None })
            .collect()
    }

    /// All path nodes in document order.
    pub fn paths(&self) -> Vec<&PathNode> {
        self.leaves()
            .into_iter()
            .filter_map(|(_, n)| match n { Node::Path(p) => Some(p), _ => None })
            .collect()
    }
}
