//! One-shot page-load entrance
//!
//! Progress is derived each frame from the page start time, never stored.

use super::easing::{ease_out_cubic, lerp};
use crate::config::EntranceConfig;

/// Where an element is in its entrance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePhase {
    PreEntrance,
    Entering,
    Settled,
}

/// Entrance timing shared by every element of a group
#[derive(Clone, Copy, Debug)]
pub struct Entrance {
    start_ms: f64,
    duration_ms: f64,
    expanded_start: f64,
}

impl Entrance {
    pub fn new(start_ms: f64, config: EntranceConfig) -> Self {
        Self {
            start_ms,
            duration_ms: config.duration_ms.max(1.0),
            expanded_start: config.expanded_start,
        }
    }

    /// Linear progress in [0, 1] for an element with the given stagger
    pub fn progress(&self, now_ms: f64, stagger_ms: f64) -> f64 {
        let elapsed = now_ms - self.start_ms - stagger_ms;
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn phase(&self, now_ms: f64, stagger_ms: f64) -> EntrancePhase {
        let elapsed = now_ms - self.start_ms - stagger_ms;
        if elapsed <= 0.0 {
            EntrancePhase::PreEntrance
        } else if elapsed < self.duration_ms {
            EntrancePhase::Entering
        } else {
            EntrancePhase::Settled
        }
    }

    /// Radius multiplier: `expanded_start` before, eased to 1 during, 1 after
    pub fn multiplier(&self, now_ms: f64, stagger_ms: f64) -> f64 {
        match self.phase(now_ms, stagger_ms) {
            EntrancePhase::PreEntrance => self.expanded_start,
            EntrancePhase::Entering => {
                let eased = ease_out_cubic(self.progress(now_ms, stagger_ms));
                lerp(self.expanded_start, 1.0, eased)
            }
            EntrancePhase::Settled => 1.0,
        }
    }

    /// Fade-in finishes in the first third of the window
    pub fn opacity(&self, now_ms: f64, stagger_ms: f64) -> f64 {
        (self.progress(now_ms, stagger_ms) * 3.0).min(1.0)
    }

    /// Timestamp at which an element with this stagger settles
    pub fn settled_at(&self, stagger_ms: f64) -> f64 {
        self.start_ms + stagger_ms + self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrance() -> Entrance {
        Entrance::new(
            1000.0,
            EntranceConfig { duration_ms: 900.0, stagger_ms: 50.0, expanded_start: 1.5 },
        )
    }

    #[test]
    fn test_opacity_timeline() {
        let e = entrance();
        let stagger = 100.0;
        // Before the stagger delay
        assert_eq!(e.opacity(1050.0, stagger), 0.0);
        assert_eq!(e.opacity(1100.0, stagger), 0.0);

        // Strictly increasing through the first third
        let mut prev = 0.0;
        for i in 1..=30 {
            let t = 1100.0 + i as f64 * 10.0;
            let o = e.opacity(t, stagger);
            assert!(o > prev, "opacity must rise at t={}", t);
            prev = o;
        }
        assert!((prev - 1.0).abs() < 1e-9);

        // Exactly 1 afterwards
        assert_eq!(e.opacity(1500.0, stagger), 1.0);
        assert_eq!(e.opacity(50_000.0, stagger), 1.0);
    }

    #[test]
    fn test_multiplier_settles() {
        let e = entrance();
        assert_eq!(e.multiplier(900.0, 0.0), 1.5);
        let mid = e.multiplier(1450.0, 0.0);
        assert!(mid < 1.5 && mid > 1.0);
        assert_eq!(e.multiplier(1900.0, 0.0), 1.0);
        assert_eq!(e.phase(1900.0, 0.0), EntrancePhase::Settled);
    }

    #[test]
    fn test_phases() {
        let e = entrance();
        assert_eq!(e.phase(1000.0, 200.0), EntrancePhase::PreEntrance);
        assert_eq!(e.phase(1300.0, 200.0), EntrancePhase::Entering);
        assert_eq!(e.settled_at(200.0), 2100.0);
    }
}
