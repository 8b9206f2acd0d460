// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, chart configuration).

use serde::Deserialize;

use crate::error::ChartError;

/// Default outer surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default outer surface height in pixels.
pub const HEIGHT: u32 = 400;
/// Largest outer width or height a config may describe.
pub const MAX_OUTER: u32 = 32_767;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 30, 50, 60)
    }
}

/// Layout of one chart: margins around an inner plot area of
/// `chart_width` x `chart_height` pixels.
///
/// Deserializes from a flat JSON object; absent keys keep their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl ChartConfig {
    /// Build a config from margins and the full surface size.
    pub fn with_outer_size(insets: Insets, width: u32, height: u32) -> Self {
        Self {
            margin_top: insets.top,
            margin_right: insets.right,
            margin_bottom: insets.bottom,
            margin_left: insets.left,
            chart_width: width.saturating_sub(insets.hsum()),
            chart_height: height.saturating_sub(insets.vsum()),
        }
    }

    pub fn insets(&self) -> Insets {
        Insets::new(self.margin_left, self.margin_right, self.margin_top, self.margin_bottom)
    }

    /// Saturates; `validate` rejects configs where that would matter.
    pub fn outer_width(&self) -> u32 { self.chart_width.saturating_add(self.insets().hsum()) }
    pub fn outer_height(&self) -> u32 { self.chart_height.saturating_add(self.insets().vsum()) }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(ChartError::InvalidConfig(format!(
                "plot area must be non-empty, got {}x{}",
                self.chart_width, self.chart_height
            )));
        }
        let outer = |plot: u32, a: u32, b: u32| plot.checked_add(a)?.checked_add(b).filter(|v| *v <= MAX_OUTER);
        let width = outer(self.chart_width, self.margin_left, self.margin_right);
        let height = outer(self.chart_height, self.margin_top, self.margin_bottom);
        if width.is_none() || height.is_none() {
            return Err(ChartError::InvalidConfig(format!(
                "surface larger than {MAX_OUTER}px per side: plot {}x{} with margins {:?}",
                self.chart_width,
                self.chart_height,
                self.insets()
            )));
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::with_outer_size(Insets::default(), WIDTH, HEIGHT)
    }
}
