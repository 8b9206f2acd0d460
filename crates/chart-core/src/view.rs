// File: crates/chart-core/src/view.rs
// Visible data ranges derived from the chart's series.

use crate::series::Series;
use crate::Chart;

/// X spans the extent of the data; Y starts at zero and reaches the largest value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// `None` when no series has a finite point.
    pub fn from_series(series: &[Series]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for (x, y) in s.finite_points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_max.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min: 0.0, y_max })
    }

    pub fn from_chart(chart: &Chart) -> Option<Self> {
        Self::from_series(&chart.series)
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
