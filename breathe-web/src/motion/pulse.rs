//! Idle breathing oscillation
//!
//! A sine over wall-clock time, so every consumer of the same config
//! breathes in phase regardless of when it started.

use std::f64::consts::TAU;
use crate::config::PulseConfig;

/// Wall-clock sine oscillator
#[derive(Clone, Copy, Debug)]
pub struct BreathPulse {
    period_ms: f64,
    amplitude: f64,
}

impl BreathPulse {
    pub fn new(config: PulseConfig) -> Self {
        Self {
            period_ms: config.period_ms.max(1.0),
            amplitude: config.amplitude,
        }
    }

    /// Position within the current cycle, in [0, 1)
    pub fn phase(&self, now_ms: f64) -> f64 {
        now_ms.rem_euclid(self.period_ms) / self.period_ms
    }

    /// 0 → 1 → 0 over one cycle (starts at 0.5, rising)
    pub fn progress(&self, now_ms: f64) -> f64 {
        (self.phase(now_ms) * TAU).sin() * 0.5 + 0.5
    }

    /// Icon scale: 1.0 at the bottom of the breath, 1 + amplitude at the top
    pub fn scale(&self, now_ms: f64) -> f64 {
        1.0 + self.progress(now_ms) * self.amplitude
    }

    /// Symmetric swell around 1.0, used to modulate ring radius
    pub fn modifier(&self, now_ms: f64) -> f64 {
        1.0 + self.amplitude * (self.phase(now_ms) * TAU).sin()
    }
}

impl Default for BreathPulse {
    fn default() -> Self {
        Self::new(PulseConfig::icons())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_scale_range() {
        let pulse = BreathPulse::default();
        // Quarter cycle is the top of the breath
        assert!((pulse.scale(1250.0) - 1.15).abs() < 1e-9);
        assert!((pulse.scale(3750.0) - 1.0).abs() < 1e-9);
        assert!((pulse.progress(0.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_periodic() {
        let pulse = BreathPulse::default();
        assert!((pulse.progress(700.0) - pulse.progress(5700.0)).abs() < 1e-9);
    }

    #[test]
    fn test_modifier_is_symmetric() {
        let pulse = BreathPulse::new(PulseConfig { period_ms: 4000.0, amplitude: 0.05 });
        assert!((pulse.modifier(1000.0) - 1.05).abs() < 1e-9);
        assert!((pulse.modifier(3000.0) - 0.95).abs() < 1e-9);
    }
}
