// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and scene construction; SVG output goes through `svg`.

use std::path::Path;

use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::scene::{Anchor, Group, Node, PathNode, Scene, Stroke, TextNode, TextStyle};
use crate::series::Series;
use crate::svg;
use crate::theme::Theme;
use crate::types::ChartConfig;
use crate::view::ViewState;
use crate::Axis;

/// Stroke width of data lines, in pixels.
pub const LINE_WIDTH: f32 = 2.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub config: ChartConfig,
    pub theme: Theme,
    /// Title, axis labels and tick labels. Off gives text-free output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { config: ChartConfig::default(), theme: Theme::light(), draw_labels: true }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis domains to the data: data extent on X, `[0, max]` on Y.
    pub fn autoscale_axes(&mut self) -> Result<()> {
        let view = ViewState::from_chart(self).ok_or(ChartError::EmptySeries)?;
        view.apply_to_chart(self);
        Ok(())
    }

    /// Lay the chart out as an immutable tree of draw commands.
    pub fn build_scene(&self, opts: &RenderOptions) -> Result<Scene> {
        opts.config.validate()?;
        if self.series.iter().all(Series::is_empty) {
            return Err(ChartError::EmptySeries);
        }

        let cfg = &opts.config;
        let theme = &opts.theme;
        let (w, h) = (cfg.chart_width as f32, cfg.chart_height as f32);
        let x_scale = self.x_axis.scale((0.0, w as f64));
        let y_scale = self.y_axis.scale((h as f64, 0.0));

        let mut children = Vec::new();

        for s in &self.series {
            let points: Vec<Point> = s
                .finite_points()
                .map(|(x, y)| Point::new(x_scale.map(x) as f32, y_scale.map(y) as f32))
                .collect();
            if points.is_empty() {
                continue;
            }
            let stroke = Stroke { color: s.color.unwrap_or(theme.line_stroke), width: LINE_WIDTH };
            children.push(Node::Path(PathNode::polyline(&points, stroke)));
        }

        let mut x_group = self.x_axis.layout(&x_scale, theme, opts.draw_labels).with_class("x-axis");
        x_group.translate = Point::new(0.0, h);
        children.push(Node::Group(x_group));
        children.push(Node::Group(self.y_axis.layout(&y_scale, theme, opts.draw_labels).with_class("y-axis")));

        if opts.draw_labels {
            let title_style = TextStyle::new(theme.title_size, theme.title).anchor(Anchor::Middle).bold();
            let label_style = TextStyle::new(theme.axis_label_size, theme.axis_label).anchor(Anchor::Middle);
            children.push(text(
                Point::new(w / 2.0, -(cfg.margin_top as f32) / 2.0),
                &self.title,
                title_style,
                "title",
            ));
            children.push(text(
                Point::new(w / 2.0, h + cfg.margin_bottom as f32 - 10.0),
                &self.x_axis.label,
                label_style,
                "axis-label",
            ));
            // rotated frame: x runs up the plot, y runs right
            children.push(text(
                Point::new(-h / 2.0, -(cfg.margin_left as f32) + 20.0),
                &self.y_axis.label,
                label_style.rotate(-90.0),
                "axis-label",
            ));
        }

        let root = Group::new(Point::new(cfg.margin_left as f32, cfg.margin_top as f32), children);
        Ok(Scene {
            width: cfg.outer_width() as f32,
            height: cfg.outer_height() as f32,
            background: theme.background,
            root: Node::Group(root),
        })
    }

    pub fn to_svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let scene = self.build_scene(opts)?;
        Ok(svg::to_svg_string(&scene, &opts.theme))
    }

    /// Render the chart to an SVG file at `output_svg_path`, creating parent directories.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let doc = self.to_svg_string(opts)?;
        let path = output_svg_path.as_ref();
        let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, doc).map_err(io_err)
    }
}

fn text(pos: Point, content: &str, style: TextStyle, class: &str) -> Node {
    Node::Text(TextNode { pos, content: content.to_string(), style, class: Some(class.to_string()) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PathCmd;

    fn sample_chart() -> Chart {
        let mut chart = Chart::new().with_title("Total Gross by Year");
        chart.add_series(Series::with_data("gross", vec![(2010.0, 150.0), (2011.0, 300.0), (2012.0, 75.0)]));
        chart.autoscale_axes().unwrap();
        chart
    }

    #[test]
    fn line_spans_plot_area() {
        let scene = sample_chart().build_scene(&RenderOptions::default()).unwrap();
        let line = scene.paths()[0];
        assert_eq!(line.stroke.width, LINE_WIDTH);
        assert_eq!(line.fill, None);
        assert_eq!(line.cmds.first(), Some(&PathCmd::MoveTo(Point::new(0.0, 145.0))));
        assert_eq!(line.cmds[1], PathCmd::LineTo(Point::new(350.0, 0.0)));
        assert_eq!(line.cmds.last(), Some(&PathCmd::LineTo(Point::new(700.0, 217.5))));
    }

    #[test]
    fn labels_are_placed_from_margins() {
        let scene = sample_chart().build_scene(&RenderOptions::default()).unwrap();
        let labelled: Vec<_> = scene.texts().into_iter().filter(|t| t.class.is_some()).collect();
        assert_eq!(labelled.len(), 3);
        assert_eq!(labelled[0].content, "Total Gross by Year");
        assert_eq!(labelled[0].pos, Point::new(350.0, -25.0));
        assert_eq!(labelled[1].content, "Year");
        assert_eq!(labelled[1].pos, Point::new(350.0, 340.0));
        assert_eq!(labelled[2].content, "Total Gross");
        assert_eq!(labelled[2].pos, Point::new(-145.0, -50.0));
        assert_eq!(labelled[2].style.rotate_deg, -90.0);
    }

    #[test]
    fn root_group_is_offset_by_margins() {
        let scene = sample_chart().build_scene(&RenderOptions::default()).unwrap();
        assert_eq!((scene.width, scene.height), (800.0, 400.0));
        let Node::Group(root) = &scene.root else { panic!("root group") };
        assert_eq!(root.translate, Point::new(70.0, 50.0));
    }

    #[test]
    fn empty_chart_is_an_error() {
        let chart = Chart::new();
        assert!(matches!(chart.build_scene(&RenderOptions::default()), Err(ChartError::EmptySeries)));
        assert!(matches!(Chart::new().autoscale_axes(), Err(ChartError::EmptySeries)));
    }

    #[test]
    fn single_point_is_centered_and_closed() {
        let mut chart = Chart::new();
        chart.add_series(Series::with_data("g", vec![(2012.0, 10.0)]));
        chart.autoscale_axes().unwrap();
        let scene = chart.build_scene(&RenderOptions::default()).unwrap();
        let line = scene.paths()[0];
        assert_eq!(line.cmds, vec![PathCmd::MoveTo(Point::new(350.0, 0.0)), PathCmd::Close]);
    }

    #[test]
    fn no_labels_means_no_text() {
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
        let scene = sample_chart().build_scene(&opts).unwrap();
        assert!(scene.texts().is_empty());
    }

    #[test]
    fn series_color_overrides_theme_stroke() {
        let red = crate::theme::Color::rgb(200, 30, 30);
        let mut chart = Chart::new();
        chart.add_series(Series::with_data("g", vec![(2010.0, 1.0), (2011.0, 2.0)]).with_color(red));
        chart.add_series(Series::with_data("h", vec![(2010.0, 2.0), (2011.0, 1.0)]));
        chart.autoscale_axes().unwrap();
        let opts = RenderOptions::default();
        let scene = chart.build_scene(&opts).unwrap();
        assert_eq!(scene.paths()[0].stroke.color, red);
        assert_eq!(scene.paths()[1].stroke.color, opts.theme.line_stroke);
    }

    #[test]
    fn oversized_config_is_rejected_before_layout() {
        let config = ChartConfig { chart_width: u32::MAX, margin_left: 10, ..ChartConfig::default() };
        let opts = RenderOptions { config, ..RenderOptions::default() };
        assert!(matches!(sample_chart().build_scene(&opts), Err(ChartError::InvalidConfig(_))));
    }
}
