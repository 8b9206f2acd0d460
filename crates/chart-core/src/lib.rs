// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, Orient};
pub use chart::{Chart, RenderOptions};
pub use error::ChartError;
pub use format::TickFormat;
pub use scale::LinearScale;
pub use scene::{Node, Scene};
pub use series::Series;
pub use theme::{Color, Theme};
pub use types::{ChartConfig, Insets};
pub use view::ViewState;
