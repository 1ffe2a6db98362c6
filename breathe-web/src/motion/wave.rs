//! Breath wave - cursor-driven trailing line
//!
//! The pointer sets a target height; the head chases it at a capped speed
//! and the history buffer scrolls the head's trail across the canvas.
//! Moving up reads as "inhale", down as "exhale", resting near an edge as
//! "hold".

use super::easing::step_toward;
use super::history::HistoryBuffer;
use crate::config::{FlowDirection, PathStyle, WaveConfig};

/// Neutral head position (middle of the band)
pub const CENTER: f64 = 0.5;

/// Which end of the band a hold is resting on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Label shown next to the wave
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathState {
    Breathe,
    Inhale,
    Exhale,
    Hold(Edge),
}

impl BreathState {
    pub fn label(&self) -> &'static str {
        match self {
            BreathState::Breathe => "breathe",
            BreathState::Inhale => "inhale",
            BreathState::Exhale => "exhale",
            BreathState::Hold(_) => "hold",
        }
    }

    /// Top boundary indicator lit
    pub fn top_active(&self) -> bool {
        matches!(self, BreathState::Inhale | BreathState::Hold(Edge::Top))
    }

    /// Bottom boundary indicator lit
    pub fn bottom_active(&self) -> bool {
        matches!(self, BreathState::Exhale | BreathState::Hold(Edge::Bottom))
    }
}

/// Normalize a pointer's clientY against a container's top and height
pub fn normalize_pointer(client_y: f64, top: f64, height: f64) -> f64 {
    if height.is_nan() || height <= 0.0 {
        return CENTER;
    }
    ((client_y - top) / height).clamp(0.0, 1.0)
}

/// Polyline for one frame, in CSS pixels
#[derive(Clone, Debug)]
pub struct WavePath {
    pub points: Vec<(f64, f64)>,
    pub style: PathStyle,
}

/// All per-frame state of the breath wave
pub struct WaveLine {
    config: WaveConfig,
    history: HistoryBuffer,
    /// Where the pointer wants the head
    target: f64,
    /// Rate-limited head position
    current: f64,
    /// Previous sampled target, for direction detection
    last_target: f64,
    state: BreathState,
    hovering: bool,
    interactive: bool,
    /// Pending drop of the interactive mode
    deactivate_at: Option<f64>,
}

impl WaveLine {
    /// Wave for a canvas `width` CSS pixels wide
    pub fn new(config: WaveConfig, width: f64) -> Self {
        Self {
            history: HistoryBuffer::for_width(width, config.history_margin, CENTER),
            config,
            target: CENTER,
            current: CENTER,
            last_target: CENTER,
            state: BreathState::Breathe,
            hovering: false,
            interactive: false,
            deactivate_at: None,
        }
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    /// Pointer sample at normalized height `y`
    pub fn sample(&mut self, y: f64) {
        let y = y.clamp(0.0, 1.0);
        self.target = y;
        self.update_state(y);

        self.hovering = true;
        self.interactive = true;
        self.deactivate_at = None;
    }

    /// Pointer left or touch ended
    pub fn leave(&mut self, now_ms: f64) {
        self.hovering = false;
        self.state = BreathState::Breathe;
        self.target = CENTER;
        self.last_target = CENTER;
        self.deactivate_at = Some(now_ms + self.config.leave_grace_ms);
    }

    fn update_state(&mut self, y: f64) {
        let delta = y - self.last_target;
        let moving = delta.abs() > self.config.deadband;
        let near_top = y < self.config.edge_zone;
        let near_bottom = y > 1.0 - self.config.edge_zone;

        if !moving && near_top {
            self.state = BreathState::Hold(Edge::Top);
        } else if !moving && near_bottom {
            self.state = BreathState::Hold(Edge::Bottom);
        } else if delta < -self.config.deadband {
            self.state = BreathState::Inhale;
        } else if delta > self.config.deadband {
            self.state = BreathState::Exhale;
        }

        self.last_target = y;
    }

    // ========================================================================
    // FRAME
    // ========================================================================

    /// Advance one frame
    pub fn tick(&mut self, now_ms: f64) {
        self.current = step_toward(self.current, self.target, self.config.max_step);
        self.history.advance(self.config.scroll_speed, self.current);

        if let Some(deadline) = self.deactivate_at {
            if now_ms >= deadline {
                self.deactivate_at = None;
                if !self.hovering {
                    self.interactive = false;
                }
            }
        }
    }

    /// Y of the two faint guide lines
    pub fn guide_lines(&self, height: f64) -> [f64; 2] {
        [self.config.padding, height - self.config.padding]
    }

    /// Trace the history across a `width` × `height` canvas
    pub fn path(&self, width: f64, height: f64) -> WavePath {
        let padding = self.config.padding;
        let band = (height - padding * 2.0).max(0.0);
        let columns = if width.is_finite() && width > 0.0 { width.floor() as usize } else { 0 };
        let step = match self.config.style {
            PathStyle::PerPixel => 1,
            PathStyle::Smoothed => 2,
        };

        let mut points = Vec::with_capacity(columns / step + 2);
        let mut x = 0;
        loop {
            let value = self.history.sample_at(x as f64);
            let y = padding + value * band;
            let px = match self.config.direction {
                FlowDirection::LeftToRight => x as f64,
                FlowDirection::RightToLeft => width - x as f64,
            };
            points.push((px, y));

            if x >= columns {
                break;
            }
            x = (x + step).min(columns);
        }

        WavePath { points, style: self.config.style }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn state(&self) -> BreathState {
        self.state
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }
}
