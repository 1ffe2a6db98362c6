//! Easing and rate limiting primitives
//!
//! `approach` is proportional (exponential) easing, `step_toward` is rate
//! limiting: a hard cap on the per-frame change.

/// Differences below this snap straight to the target
const SNAP_EPSILON: f64 = 1e-4;

/// Cubic ease-out on a clamped [0, 1] input
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Move `current` a fraction of the remaining distance toward `target`
///
/// With `0 < factor < 1` the result stays between `current` and `target`.
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    let diff = target - current;
    if diff.abs() < SNAP_EPSILON {
        return target;
    }
    current + diff * factor.clamp(0.0, 1.0)
}

/// Move `current` toward `target` by at most `max_step`
pub fn step_toward(current: f64, target: f64, max_step: f64) -> f64 {
    let delta = target - current;
    if delta.abs() > max_step {
        current + delta.signum() * max_step
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        // Ease-out front-loads the motion
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_step_toward_caps_change() {
        let mut y = 0.5;
        for _ in 0..10 {
            let next = step_toward(y, 1.0, 0.002);
            assert!((next - y).abs() <= 0.002 + 1e-12);
            y = next;
        }
        assert!((y - 0.52).abs() < 1e-9);
    }

    #[test]
    fn test_step_toward_snaps_when_close() {
        assert_eq!(step_toward(0.5, 0.501, 0.002), 0.501);
    }

    #[test]
    fn test_approach_never_overshoots() {
        let mut x = 0.0;
        let mut prev_gap = 1.0;
        for _ in 0..200 {
            x = approach(x, 1.0, 0.1);
            let gap = 1.0 - x;
            assert!(gap >= 0.0);
            assert!(gap <= prev_gap);
            prev_gap = gap;
        }
        assert_eq!(x, 1.0);
    }
}
