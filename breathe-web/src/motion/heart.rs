//! Heart outline with arc-length parametrization
//!
//! The classic heart curve crowds points near the lobes when sampled
//! evenly in t. A cumulative arc-length table lets us invert length → t
//! so dots sit at equal spacing along the outline.

use std::f64::consts::TAU;
use nalgebra::Vector2;

/// Half-width of the raw curve (x spans ±16)
const CURVE_HALF_WIDTH: f64 = 16.0;

/// Default table resolution
pub const ARC_SAMPLES: usize = 1000;

/// Heart curve point at parameter `t` (radians), y pointing down,
/// scaled so x spans [-1, 1]
pub fn heart_point(t: f64) -> Vector2<f64> {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vector2::new(x, y) / CURVE_HALF_WIDTH
}

/// Cumulative arc length sampled over t ∈ [0, 2π]
pub struct ArcLengthTable {
    params: Vec<f64>,
    lengths: Vec<f64>,
    /// Midpoint of the outline's bounding box
    center: Vector2<f64>,
}

impl ArcLengthTable {
    pub fn new(samples: usize) -> Self {
        let samples = samples.max(2);
        let mut params = Vec::with_capacity(samples + 1);
        let mut lengths = Vec::with_capacity(samples + 1);

        let mut prev = heart_point(0.0);
        let mut total = 0.0;
        let mut min = prev;
        let mut max = prev;

        params.push(0.0);
        lengths.push(0.0);
        for i in 1..=samples {
            let t = TAU * i as f64 / samples as f64;
            let p = heart_point(t);
            total += (p - prev).norm();
            min = min.inf(&p);
            max = max.sup(&p);
            params.push(t);
            lengths.push(total);
            prev = p;
        }

        Self {
            params,
            lengths,
            center: (min + max) / 2.0,
        }
    }

    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    pub fn center(&self) -> Vector2<f64> {
        self.center
    }

    /// Parameter t at which the outline has covered `length`
    pub fn param_at(&self, length: f64) -> f64 {
        let length = length.clamp(0.0, self.total_length());
        let upper = self.lengths.partition_point(|l| *l < length);
        if upper == 0 {
            return self.params[0];
        }
        if upper >= self.lengths.len() {
            return self.params[self.params.len() - 1];
        }

        let (l0, l1) = (self.lengths[upper - 1], self.lengths[upper]);
        let (t0, t1) = (self.params[upper - 1], self.params[upper]);
        let span = l1 - l0;
        if span <= f64::EPSILON {
            return t0;
        }
        t0 + (t1 - t0) * (length - l0) / span
    }

    /// `count` parameters spaced evenly by arc length, starting at t = 0
    pub fn evenly_spaced(&self, count: usize) -> Vec<f64> {
        let total = self.total_length();
        (0..count)
            .map(|i| self.param_at(total * i as f64 / count as f64))
            .collect()
    }
}

impl Default for ArcLengthTable {
    fn default() -> Self {
        Self::new(ARC_SAMPLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_notch_and_tip() {
        // t = 0: notch between the lobes, t = π: bottom tip
        let notch = heart_point(0.0);
        let tip = heart_point(std::f64::consts::PI);
        assert!(notch.x.abs() < 1e-9);
        assert!(tip.x.abs() < 1e-9);
        assert!(tip.y > notch.y);
        assert!((heart_point(std::f64::consts::FRAC_PI_2).x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_lookup_monotonic() {
        let table = ArcLengthTable::default();
        let total = table.total_length();
        assert!(total > 0.0);
        assert_eq!(table.param_at(0.0), 0.0);
        assert!((table.param_at(total) - TAU).abs() < 1e-9);

        let mut prev = -1.0;
        for i in 0..=50 {
            let t = table.param_at(total * i as f64 / 50.0);
            assert!(t >= prev);
            prev = t;
        }
    }

    #[test]
    fn test_even_spacing_along_outline() {
        let table = ArcLengthTable::default();
        let params = table.evenly_spaced(40);
        assert_eq!(params.len(), 40);

        let points: Vec<_> = params.iter().map(|t| heart_point(*t)).collect();
        let gaps: Vec<f64> = points
            .windows(2)
            .map(|w| (w[1] - w[0]).norm())
            .collect();
        let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
        // Chords on a curved outline differ a little from arc steps
        for gap in gaps {
            assert!((gap - mean).abs() / mean < 0.15, "gap {} vs mean {}", gap, mean);
        }
    }
}
