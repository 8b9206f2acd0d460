// File: crates/chart-core/src/series.rs
// Summary: Line series model: ordered (x, y) points and an optional stroke override.

use crate::theme::Color;

#[derive(Clone, Debug, Default)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    /// Falls back to the theme's line stroke when unset.
    pub color: Option<Color>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data_xy: Vec::new(), color: None }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, color: None }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Points with a non-finite coordinate are kept out of scales and paths.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    pub fn is_empty(&self) -> bool {
        self.finite_points().next().is_none()
    }
}
