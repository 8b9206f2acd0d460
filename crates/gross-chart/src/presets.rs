// File: crates/gross-chart/src/presets.rs
// Summary: Titles, axis labels and tick formats for each chart variant.

use chart_core::{Chart, ChartError, Series, TickFormat};
use movie_data::Variant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_format: TickFormat,
    /// One tick per multiple of this value instead of automatic ticks.
    pub x_tick_every: Option<f64>,
    pub y_format: TickFormat,
}

impl Preset {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::AllYears => Self {
                title: "Total Gross by Year",
                x_label: "Year",
                y_label: "Total Gross",
                x_format: TickFormat::Integer,
                x_tick_every: None,
                y_format: TickFormat::Grouped,
            },
            Variant::Since2010 => Self {
                title: "Total Gross by Year (2010 onward)",
                x_label: "Release Year",
                y_label: "Total Gross (USD)",
                x_format: TickFormat::Integer,
                x_tick_every: Some(1.0),
                y_format: TickFormat::Abbreviated,
            },
        }
    }

    /// Chart over `points` with domains fitted to the data.
    pub fn build_chart(&self, points: Vec<(f64, f64)>) -> Result<Chart, ChartError> {
        let mut chart = Chart::new().with_title(self.title);
        chart.add_series(Series::with_data("total gross", points));
        chart.autoscale_axes()?;

        chart.x_axis.label = self.x_label.to_string();
        chart.x_axis.format = self.x_format;
        chart.x_axis.tick_every = self.x_tick_every;
        chart.y_axis.label = self.y_label.to_string();
        chart.y_axis.format = self.y_format;
        Ok(chart)
    }
}
