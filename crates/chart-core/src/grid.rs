// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" 1/2/5 x 10^k steps and fixed-step ticks.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick bounds plus increment. A negative increment `-k` means the
/// step is `1/k`, which keeps fractional ticks exact when divided back out.
fn tick_increment(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_increment(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Roughly `count` nice tick values within `[start, stop]`, ascending.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if count == 0 || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }
    let Some((i1, i2, inc)) = tick_increment(lo, hi, count as f64) else { return Vec::new() };
    if i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let i = i1 + i as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect()
}

/// Spacing between the ticks that [`ticks`] would produce.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    match tick_increment(lo, hi, count as f64) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

/// Every multiple of `step` within `[start, stop]`.
pub fn ticks_every(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if !(step > 0.0) || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_over_large_totals_use_two_step() {
        let t = ticks(0.0, 2.8e9, 10);
        assert_eq!(t.len(), 15);
        assert_eq!(t[1], 2e8);
        assert_eq!(*t.last().unwrap(), 2.8e9);
        assert_eq!(tick_step(0.0, 2.8e9, 10), 2e8);
    }

    #[test]
    fn ticks_over_years_step_by_decade() {
        let t = ticks(1916.0, 2016.0, 10);
        assert_eq!(t.first(), Some(&1920.0));
        assert_eq!(t.last(), Some(&2010.0));
        assert_eq!(t.len(), 10);
    }

    #[test]
    fn narrow_year_range_ticks_every_year() {
        assert_eq!(ticks(2007.0, 2015.0, 10), (2007..=2015).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn fractional_steps_stay_exact() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(tick_step(0.0, 1.0, 5), 0.2);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(ticks(5.0, 5.0, 10), vec![5.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 10).is_empty());
        assert_eq!(ticks(10.0, 0.0, 2), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn every_step_is_inclusive() {
        assert_eq!(ticks_every(2010.0, 2016.0, 1.0).len(), 7);
        assert_eq!(ticks_every(2010.5, 2012.0, 1.0), vec![2011.0, 2012.0]);
        assert!(ticks_every(0.0, 1.0, 0.0).is_empty());
    }
}
