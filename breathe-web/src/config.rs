//! Tunables for every animated group
//!
//! Desktop and mobile presets are picked once at load from the viewport
//! width and never re-evaluated on resize.

/// Viewports at or below this width (CSS px) use the mobile layout
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Layout class chosen at page load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Viewport::Mobile
    }
}

// ============================================================================
// BREATH WAVE
// ============================================================================

/// Which side of the canvas the newest history sample is drawn on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowDirection {
    /// Newest at x = 0, line flows to the right
    LeftToRight,
    /// Newest at x = width, line flows to the left
    RightToLeft,
}

/// How the trailing line is traced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathStyle {
    /// One straight segment per pixel
    PerPixel,
    /// Every other pixel, joined by quadratic curves through midpoints
    Smoothed,
}

/// Breath wave trailing line settings
#[derive(Clone, Copy, Debug)]
pub struct WaveConfig {
    /// Vertical padding between canvas edge and the drawable band (px)
    pub padding: f64,
    pub line_width: f64,
    /// History slots scrolled per frame
    pub scroll_speed: f64,
    /// Max normalized distance the head may travel per frame
    pub max_step: f64,
    /// Extra history slots beyond the canvas width
    pub history_margin: usize,
    /// Target changes at or below this are "not moving"
    pub deadband: f64,
    /// Fraction of range at each end that counts as near top/bottom
    pub edge_zone: f64,
    /// Grace period before the interactive mode is dropped after leave (ms)
    pub leave_grace_ms: f64,
    pub direction: FlowDirection,
    pub style: PathStyle,
}

impl WaveConfig {
    /// Slow head, pixel-accurate line
    pub fn standard() -> Self {
        Self {
            padding: 40.0,
            line_width: 2.0,
            scroll_speed: 0.8,
            max_step: 0.002,
            history_margin: 50,
            deadband: 0.003,
            edge_zone: 0.2,
            leave_grace_ms: 1000.0,
            direction: FlowDirection::LeftToRight,
            style: PathStyle::PerPixel,
        }
    }

    /// Right-to-left flow traced with curves
    pub fn smoothed() -> Self {
        Self {
            direction: FlowDirection::RightToLeft,
            style: PathStyle::Smoothed,
            ..Self::standard()
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// BREATHING OSCILLATION
// ============================================================================

/// Idle sine oscillation keyed to wall-clock time
#[derive(Clone, Copy, Debug)]
pub struct PulseConfig {
    pub period_ms: f64,
    pub amplitude: f64,
}

impl PulseConfig {
    /// Service icons: 5s cycle, scale 1.0 → 1.15
    pub fn icons() -> Self {
        Self { period_ms: 5000.0, amplitude: 0.15 }
    }

    /// Gentle radius swell for the mandalas
    pub fn ring() -> Self {
        Self { period_ms: 6000.0, amplitude: 0.03 }
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self::icons()
    }
}

// ============================================================================
// RING MANDALAS
// ============================================================================

/// One-shot page-load entrance
#[derive(Clone, Copy, Debug)]
pub struct EntranceConfig {
    /// Length of each element's eased window (ms)
    pub duration_ms: f64,
    /// Delay added per element index (ms)
    pub stagger_ms: f64,
    /// Radius multiplier held before the element's window opens
    pub expanded_start: f64,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1200.0,
            stagger_ms: 40.0,
            expanded_start: 1.6,
        }
    }
}

/// Shared settings for the chevron ring and the heart ring
#[derive(Clone, Copy, Debug)]
pub struct RingConfig {
    /// Number of elements around the outline
    pub count: usize,
    /// Chevrons: circle radius. Heart: half-width of the outline (px)
    pub radius: f64,
    pub breath: PulseConfig,
    pub entrance: EntranceConfig,
    /// Per-frame interpolation fraction toward the hover target, in (0, 1)
    pub ease: f64,
    /// Pointer distance from an element's base position that expands it (px)
    pub hover_radius: f64,
    /// Hover target offset, as a fraction of the radius
    pub expansion: f64,
    /// Time after the last nearby pointer sample before collapsing (ms)
    pub collapse_delay_ms: f64,
    /// Wait after the last entrance before the scroll indicator appears (ms)
    pub handoff_delay_ms: f64,
    /// Rotation given to the scroll indicator chevron (deg)
    pub indicator_rotation_deg: f64,
}

impl RingConfig {
    pub fn chevrons(viewport: Viewport) -> Self {
        let base = Self::base();
        match viewport {
            Viewport::Desktop => Self { count: 24, radius: 220.0, ..base },
            Viewport::Mobile => Self {
                count: 16,
                radius: 130.0,
                hover_radius: 50.0,
                ..base
            },
        }
    }

    pub fn heart(viewport: Viewport) -> Self {
        let base = Self::base();
        match viewport {
            Viewport::Desktop => Self {
                count: 40,
                radius: 180.0,
                entrance: EntranceConfig { stagger_ms: 30.0, ..base.entrance },
                ..base
            },
            Viewport::Mobile => Self {
                count: 28,
                radius: 110.0,
                hover_radius: 45.0,
                entrance: EntranceConfig { stagger_ms: 35.0, ..base.entrance },
                ..base
            },
        }
    }

    fn base() -> Self {
        Self {
            count: 24,
            radius: 200.0,
            breath: PulseConfig::ring(),
            entrance: EntranceConfig::default(),
            ease: 0.1,
            hover_radius: 70.0,
            expansion: 0.12,
            collapse_delay_ms: 600.0,
            handoff_delay_ms: 800.0,
            // Not verified against the artwork; adjust visually
            indicator_rotation_deg: 180.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(768.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(1024.0), Viewport::Desktop);
    }

    #[test]
    fn test_mobile_rings_are_smaller() {
        let desktop = RingConfig::chevrons(Viewport::Desktop);
        let mobile = RingConfig::chevrons(Viewport::Mobile);
        assert!(mobile.count < desktop.count);
        assert!(mobile.radius < desktop.radius);
        assert!(desktop.ease > 0.0 && desktop.ease < 1.0);
    }
}
