// File: crates/chart-core/src/scale.rs
// Summary: Linear scale mapping a data domain onto a pixel range.

use crate::grid;

/// Data-space value (year, dollars, ...).
pub type Value = f64;

/// Maps `domain` linearly onto `range`. Either interval may be reversed;
/// a vertical axis usually maps `[0, max]` onto `[height, 0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain value to pixel. A degenerate domain maps everything to the
    /// middle of the range.
    #[inline]
    pub fn map(&self, v: Value) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel to domain value.
    #[inline]
    pub fn invert(&self, px: f64) -> Value {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<Value> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> Value {
        grid::tick_step(self.domain.0, self.domain.1, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_midpoint() {
        let s = LinearScale::new((2000.0, 2010.0), (0.0, 700.0));
        assert_eq!(s.map(2000.0), 0.0);
        assert_eq!(s.map(2010.0), 700.0);
        assert_eq!(s.map(2005.0), 350.0);
    }

    #[test]
    fn reversed_range_for_vertical_axis() {
        let s = LinearScale::new((0.0, 100.0), (290.0, 0.0));
        assert_eq!(s.map(0.0), 290.0);
        assert_eq!(s.map(100.0), 0.0);
        assert_eq!(s.invert(145.0), 50.0);
    }

    #[test]
    fn single_value_domain_maps_to_range_middle() {
        let s = LinearScale::new((2012.0, 2012.0), (0.0, 700.0));
        assert_eq!(s.map(2012.0), 350.0);
        assert_eq!(s.ticks(10), vec![2012.0]);
    }

    #[test]
    fn invert_undoes_map() {
        let s = LinearScale::new((1916.0, 2016.0), (0.0, 700.0));
        for v in [1916.0, 1950.0, 2016.0] {
            assert!((s.invert(s.map(v)) - v).abs() < 1e-9);
        }
    }
}
