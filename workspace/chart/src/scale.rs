//! Linear scales and tick generation.

use serde::Serialize;

/// Margin added above and below the plotted values, in health points.
pub const VALUE_PADDING: f64 = 5.0;

/// Maps a continuous domain onto a pixel range and back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Spacing used by [`LinearScale::ticks`] for the same `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Domain spanning `values` with `pad` on both sides.
///
/// Returns `None` when there are no finite values. The result always has a
/// non-zero height, even when every value is equal and `pad` is zero.
pub fn padded_domain(values: impl IntoIterator<Item = f64>, pad: f64) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |extent: Option<(f64, f64)>, value| match extent {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })?;

    let pad = if pad.is_finite() { pad.abs() } else { 0.0 };
    let (mut low, mut high) = (min - pad, max + pad);
    if high - low <= 0.0 {
        // A fixed step vanishes next to large magnitudes
        let widen = (min.abs().max(max.abs()) * 1e-9).max(1.0);
        low = (min - widen).max(f64::MIN);
        high = (max + widen).min(f64::MAX);
    }
    Some((low, high))
}

/// Step between ticks: 1, 2 or 5 times a power of ten.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw == 0.0 || !raw.is_finite() {
        return 0.0;
    }
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    power * factor
}

pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (low, high) = if start < stop { (start, stop) } else { (stop, start) };
    let step = tick_step(low, high, count);
    if step == 0.0 {
        return vec![low];
    }

    // Fractional steps divide by the inverse to keep 0.1-style ticks exact.
    if step >= 1.0 {
        let first = (low / step).ceil() as i64;
        let last = (high / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    } else {
        let inverse = (1.0 / step).round();
        let first = (low * inverse).ceil() as i64;
        let last = (high * inverse).floor() as i64;
        (first..=last).map(|i| i as f64 / inverse).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_invert() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 680.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(10.0), 680.0);
        assert_eq!(scale.apply(5.0), 340.0);
        assert_eq!(scale.invert(340.0), 5.0);
        assert!((scale.invert(scale.apply(7.0)) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_reversed_range() {
        let scale = LinearScale::new((70.0, 90.0), (320.0, 0.0));
        assert_eq!(scale.apply(70.0), 320.0);
        assert_eq!(scale.apply(90.0), 0.0);
        assert_eq!(scale.invert(160.0), 80.0);
    }

    #[test]
    fn test_degenerate_scale_does_not_produce_nan() {
        let flat_domain = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(flat_domain.apply(5.0), 50.0);

        let flat_range = LinearScale::new((0.0, 10.0), (0.0, 0.0));
        assert_eq!(flat_range.invert(3.0), 0.0);
    }

    #[test]
    fn test_padded_domain_contains_values_strictly() {
        let values = [81.0, 79.5, 84.25, 80.0];
        let (low, high) = padded_domain(values, VALUE_PADDING).unwrap();
        assert_eq!((low, high), (74.5, 89.25));
        assert!(values.iter().all(|v| low < *v && *v < high));
    }

    #[test]
    fn test_padded_domain_for_equal_values() {
        let (low, high) = padded_domain([80.0, 80.0, 80.0], VALUE_PADDING).unwrap();
        assert!(low < 80.0 && high > 80.0);
        assert!(high - low > 0.0);

        let (low, high) = padded_domain([80.0], 0.0).unwrap();
        assert_eq!((low, high), (79.0, 81.0));
    }

    #[test]
    fn test_padded_domain_for_large_equal_values() {
        for value in [1e17, -1e17, 1e300, f64::MAX] {
            let (low, high) = padded_domain([value, value], VALUE_PADDING).unwrap();
            assert!(high - low > 0.0, "collapsed domain for {value}");
            assert!(low < value && value <= high);
        }
    }

    #[test]
    fn test_padded_domain_skips_non_finite_values() {
        assert_eq!(padded_domain([f64::NAN, 50.0], 5.0), Some((45.0, 55.0)));
        assert_eq!(padded_domain([f64::NAN], 5.0), None);
        assert_eq!(padded_domain(Vec::<f64>::new(), 5.0), None);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks(74.5, 89.25, 5), vec![76.0, 78.0, 80.0, 82.0, 84.0, 86.0, 88.0]);
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_ticks_stay_in_domain_and_are_even() {
        let scale = LinearScale::new((61.3, 97.8), (300.0, 0.0));
        let ticks = scale.ticks(5);
        let step = scale.tick_step(5);

        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| (61.3..=97.8).contains(t)));
        assert!(ticks.windows(2).all(|pair| (pair[1] - pair[0] - step).abs() < 1e-9));
    }

    #[test]
    fn test_ticks_of_single_value() {
        assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }
}
