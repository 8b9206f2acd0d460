// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick layout.

use crate::format::TickFormat;
use crate::geometry::Point;
use crate::scale::LinearScale;
use crate::scene::{Anchor, Group, LineNode, Node, PathCmd, PathNode, Stroke, TextNode, TextStyle};
use crate::theme::Theme;

/// Tick mark length and label distance from the axis line, in pixels.
pub const TICK_SIZE: f32 = 6.0;
pub const TICK_PADDING: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub orient: Orient,
    /// Approximate number of ticks when `tick_every` is unset.
    pub tick_count: usize,
    /// Place a tick at every multiple of this value instead.
    pub tick_every: Option<f64>,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            orient: Orient::Bottom,
            tick_count: 10,
            tick_every: None,
            format: TickFormat::Grouped,
        }
    }

    pub fn default_x() -> Self {
        let mut a = Self::new("Year", 0.0, 1.0);
        a.format = TickFormat::Integer;
        a
    }

    pub fn default_y() -> Self {
        let mut a = Self::new("Total Gross", 0.0, 1.0);
        a.orient = Orient::Left;
        a
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_tick_every(mut self, step: f64) -> Self {
        self.tick_every = Some(step);
        self
    }

    /// Scale from this axis' domain onto `range` pixels.
    pub fn scale(&self, range: (f64, f64)) -> LinearScale {
        LinearScale::new((self.min, self.max), range)
    }

    /// Tick values and the spacing used to format them.
    pub fn tick_values(&self, scale: &LinearScale) -> (Vec<f64>, f64) {
        match self.tick_every {
            Some(step) => (crate::grid::ticks_every(self.min, self.max, step), step),
            None => (scale.ticks(self.tick_count), scale.tick_step(self.tick_count)),
        }
    }

    /// Domain line, tick marks and tick labels, positioned relative to the
    /// axis origin (the caller translates the returned group).
    pub fn layout(&self, scale: &LinearScale, theme: &Theme, draw_labels: bool) -> Group {
        let stroke = Stroke { color: theme.axis_line, width: 1.0 };
        let (r0, r1) = (scale.range.0 as f32, scale.range.1 as f32);
        let (ticks, step) = self.tick_values(scale);
        let label_style = TextStyle::new(theme.tick_label_size, theme.tick_label);

        let mut children = Vec::with_capacity(ticks.len() + 1);
        let domain = match self.orient {
            Orient::Bottom => [(r0, TICK_SIZE), (r0, 0.0), (r1, 0.0), (r1, TICK_SIZE)],
            Orient::Left => [(-TICK_SIZE, r0), (0.0, r0), (0.0, r1), (-TICK_SIZE, r1)],
        };
        let mut cmds = vec![PathCmd::MoveTo(domain[0].into())];
        cmds.extend(domain[1..].iter().map(|&p| PathCmd::LineTo(p.into())));
        children.push(Node::Path(PathNode { cmds, stroke, fill: None }));

        let offset = TICK_SIZE + TICK_PADDING;
        for v in ticks {
            let px = scale.map(v) as f32;
            let (translate, tick_end, text_pos, style) = match self.orient {
                Orient::Bottom => (
                    Point::new(px, 0.0),
                    Point::new(0.0, TICK_SIZE),
                    Point::new(0.0, offset),
                    label_style.anchor(Anchor::Middle).dy(0.71),
                ),
                Orient::Left => (
                    Point::new(0.0, px),
                    Point::new(-TICK_SIZE, 0.0),
                    Point::new(-offset, 0.0),
                    label_style.anchor(Anchor::End).dy(0.32),
                ),
            };
            let mut tick = vec![Node::Line(LineNode { from: Point::ORIGIN, to: tick_end, stroke })];
            if draw_labels {
                tick.push(Node::Text(TextNode {
                    pos: text_pos,
                    content: self.format.format(v, step),
                    style,
                    class: None,
                }));
            }
            children.push(Node::Group(Group::new(translate, tick).with_class("tick")));
        }
        Group::new(Point::ORIGIN, children).with_class("axis")
    }
}
