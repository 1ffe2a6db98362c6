//! Ring mandalas - chevrons on a circle, dots on a heart
//!
//! Each element has a fixed anchor on a unit outline. Per frame the anchor
//! is scaled by radius × breathing × hover offset × entrance multiplier.
//! Hover expansion collapses through per-element deadlines checked in
//! `tick`, so there are no platform timers to race.

use std::f64::consts::TAU;
use nalgebra::Vector2;

use super::easing::approach;
use super::entrance::{Entrance, EntrancePhase};
use super::heart::{heart_point, ArcLengthTable};
use super::pulse::BreathPulse;
use crate::config::{RingConfig, Viewport};

/// Hover axis of an element, independent of its entrance phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Expanded,
}

/// One chevron or dot
#[derive(Clone, Debug)]
pub struct RingElement {
    /// Angle (chevrons) or curve parameter (heart)
    pub param: f64,
    /// Base position on the unit outline
    pub anchor: Vector2<f64>,
    /// Outward direction in radians (0 = right, y down)
    pub heading: f64,
    pub stagger_ms: f64,
    current_offset: f64,
    target_offset: f64,
    collapse_at: Option<f64>,
}

impl RingElement {
    fn new(param: f64, anchor: Vector2<f64>, stagger_ms: f64) -> Self {
        Self {
            param,
            anchor,
            heading: anchor.y.atan2(anchor.x),
            stagger_ms,
            current_offset: 0.0,
            target_offset: 0.0,
            collapse_at: None,
        }
    }

    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    pub fn collapse_at(&self) -> Option<f64> {
        self.collapse_at
    }

    pub fn hover_phase(&self) -> HoverPhase {
        if self.target_offset > 0.0 {
            HoverPhase::Expanded
        } else {
            HoverPhase::Idle
        }
    }
}

/// Where to draw an element this frame, relative to the ring center
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vector2<f64>,
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Outline the elements sit on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingShape {
    Chevrons,
    Heart,
}

/// A ring of elements with shared breathing, entrance and hover logic
pub struct Ring {
    shape: RingShape,
    config: RingConfig,
    entrance: Entrance,
    breath: BreathPulse,
    elements: Vec<RingElement>,
    /// Chevron promoted to the scroll-down control
    indicator: Option<usize>,
    handoff_at: Option<f64>,
}

impl Ring {
    /// Chevrons at evenly spaced angles; angle 0 points right
    pub fn chevrons(config: RingConfig, start_ms: f64, viewport: Viewport) -> Self {
        let count = config.count;
        let elements = (0..count)
            .map(|i| {
                let angle = TAU * i as f64 / count as f64;
                let anchor = Vector2::new(angle.cos(), angle.sin());
                RingElement::new(angle, anchor, i as f64 * config.entrance.stagger_ms)
            })
            .collect();

        let mut ring = Self::with_elements(RingShape::Chevrons, config, start_ms, elements);
        // The scroll handoff is a desktop-only affordance
        if !viewport.is_mobile() && count > 0 {
            ring.handoff_at = Some(ring.entrance_complete_at() + config.handoff_delay_ms);
        }
        ring
    }

    /// Dots spaced evenly by arc length around the heart outline
    pub fn heart(config: RingConfig, start_ms: f64) -> Self {
        let table = ArcLengthTable::default();
        let center = table.center();
        let elements = table
            .evenly_spaced(config.count)
            .into_iter()
            .enumerate()
            .map(|(i, t)| {
                let anchor = heart_point(t) - center;
                RingElement::new(t, anchor, i as f64 * config.entrance.stagger_ms)
            })
            .collect();

        Self::with_elements(RingShape::Heart, config, start_ms, elements)
    }

    fn with_elements(
        shape: RingShape,
        config: RingConfig,
        start_ms: f64,
        elements: Vec<RingElement>,
    ) -> Self {
        Self {
            shape,
            entrance: Entrance::new(start_ms, config.entrance),
            breath: BreathPulse::new(config.breath),
            config,
            elements,
            indicator: None,
            handoff_at: None,
        }
    }

    /// Index of the chevron sitting at the bottom of a ring of `count`
    pub fn bottom_index(count: usize) -> usize {
        (count as f64 * 0.25).floor() as usize
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    /// Pointer at `pointer` (px from the ring center)
    ///
    /// Distance is measured to each element's settled, un-offset position so
    /// expansion cannot push an element out from under the cursor.
    pub fn hover(&mut self, pointer: Vector2<f64>, now_ms: f64) {
        let radius = self.config.radius;
        for element in &mut self.elements {
            let base = element.anchor * radius;
            if (pointer - base).norm() <= self.config.hover_radius {
                element.target_offset = self.config.expansion;
                element.collapse_at = Some(now_ms + self.config.collapse_delay_ms);
            }
        }
    }

    /// Pointer left or touch ended: cancel pending collapses and relax
    pub fn leave(&mut self) {
        for element in &mut self.elements {
            element.target_offset = 0.0;
            element.collapse_at = None;
        }
    }

    // ========================================================================
    // FRAME
    // ========================================================================

    /// Advance one frame. Returns the indicator index on the frame it is
    /// assigned.
    pub fn tick(&mut self, now_ms: f64) -> Option<usize> {
        for element in &mut self.elements {
            if let Some(deadline) = element.collapse_at {
                if now_ms >= deadline {
                    element.target_offset = 0.0;
                    element.collapse_at = None;
                }
            }
            element.current_offset =
                approach(element.current_offset, element.target_offset, self.config.ease);
        }

        match self.handoff_at {
            Some(at) if now_ms >= at && self.indicator.is_none() => {
                let index = Self::bottom_index(self.elements.len());
                self.indicator = Some(index);
                self.handoff_at = None;
                Some(index)
            }
            _ => None,
        }
    }

    /// Time at which the last element settles
    pub fn entrance_complete_at(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| self.entrance.settled_at(e.stagger_ms))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn entrance_phase(&self, index: usize, now_ms: f64) -> Option<EntrancePhase> {
        let element = self.elements.get(index)?;
        Some(self.entrance.phase(now_ms, element.stagger_ms))
    }

    pub fn placement(&self, index: usize, now_ms: f64) -> Option<Placement> {
        let element = self.elements.get(index)?;
        let breathing = self.breath.modifier(now_ms);
        let hover = 1.0 + element.current_offset;
        let entrance = self.entrance.multiplier(now_ms, element.stagger_ms);

        let position = element.anchor * (self.config.radius * breathing * hover * entrance);
        let rotation_deg = match self.shape {
            RingShape::Chevrons if self.indicator == Some(index) => {
                self.config.indicator_rotation_deg
            }
            // Chevron glyph points up; turn it to face outward
            RingShape::Chevrons => element.heading.to_degrees() + 90.0,
            RingShape::Heart => 0.0,
        };

        Some(Placement {
            position,
            rotation_deg,
            scale: breathing * hover,
            opacity: self.entrance.opacity(now_ms, element.stagger_ms),
        })
    }

    pub fn placements(&self, now_ms: f64) -> Vec<Placement> {
        (0..self.elements.len())
            .filter_map(|i| self.placement(i, now_ms))
            .collect()
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn shape(&self) -> RingShape {
        self.shape
    }

    pub fn elements(&self) -> &[RingElement] {
        &self.elements
    }

    pub fn indicator(&self) -> Option<usize> {
        self.indicator
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    fn chevrons(viewport: Viewport) -> Ring {
        Ring::chevrons(RingConfig::chevrons(viewport), 0.0, viewport)
    }

    #[test]
    fn test_bottom_index() {
        assert_eq!(Ring::bottom_index(24), 6);
        assert_eq!(Ring::bottom_index(16), 4);
        let ring = chevrons(Viewport::Desktop);
        let bottom = &ring.elements()[6];
        // y grows downward, so the bottom chevron has the largest y
        assert!((bottom.anchor.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_indicator_handoff_once_on_desktop() {
        let mut ring = chevrons(Viewport::Desktop);
        let handoff = ring.entrance_complete_at() + ring.config().handoff_delay_ms;

        let mut assigned = Vec::new();
        let mut now = 0.0;
        while now < handoff + 2000.0 {
            if let Some(index) = ring.tick(now) {
                assigned.push((index, now));
            }
            now += FRAME_MS;
        }
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].0, 6);
        assert!(assigned[0].1 >= handoff);
        assert_eq!(ring.indicator(), Some(6));

        let cfg = *ring.config();
        let p = ring.placement(6, now).unwrap();
        assert_eq!(p.rotation_deg, cfg.indicator_rotation_deg);
        let other = ring.placement(5, now).unwrap();
        assert_ne!(other.rotation_deg, cfg.indicator_rotation_deg);
    }

    #[test]
    fn test_no_indicator_on_mobile() {
        let mut ring = chevrons(Viewport::Mobile);
        for frame in 0..2000 {
            assert_eq!(ring.tick(frame as f64 * FRAME_MS), None);
        }
        assert_eq!(ring.indicator(), None);
    }

    #[test]
    fn test_hover_expands_nearby_then_collapses() {
        let mut ring = chevrons(Viewport::Desktop);
        let cfg = *ring.config();
        // Pointer right on element 0's base position
        ring.hover(Vector2::new(cfg.radius, 0.0), 100.0);

        assert_eq!(ring.elements()[0].hover_phase(), HoverPhase::Expanded);
        assert_eq!(ring.elements()[12].hover_phase(), HoverPhase::Idle);

        let deadline = 100.0 + cfg.collapse_delay_ms;
        let mut now = 100.0;
        let mut prev = 0.0;
        while now < deadline - FRAME_MS {
            ring.tick(now);
            let offset = ring.elements()[0].current_offset();
            assert!(offset >= prev && offset <= cfg.expansion);
            prev = offset;
            now += FRAME_MS;
        }
        ring.tick(deadline);
        assert_eq!(ring.elements()[0].target_offset(), 0.0);
        assert_eq!(ring.elements()[0].collapse_at(), None);
    }

    #[test]
    fn test_repeated_hover_pushes_deadline() {
        let mut ring = chevrons(Viewport::Desktop);
        let cfg = *ring.config();
        let pointer = Vector2::new(cfg.radius, 0.0);
        ring.hover(pointer, 0.0);
        ring.hover(pointer, 400.0);
        assert_eq!(ring.elements()[0].collapse_at(), Some(400.0 + cfg.collapse_delay_ms));

        ring.tick(cfg.collapse_delay_ms + 10.0);
        assert_eq!(ring.elements()[0].hover_phase(), HoverPhase::Expanded);
    }

    #[test]
    fn test_leave_cancels_pending_collapse() {
        let mut ring = chevrons(Viewport::Desktop);
        let cfg = *ring.config();
        ring.hover(Vector2::new(cfg.radius, 0.0), 0.0);
        ring.leave();
        assert!(ring.elements().iter().all(|e| e.collapse_at().is_none()));
        assert!(ring.elements().iter().all(|e| e.target_offset() == 0.0));
    }

    #[test]
    fn test_offset_never_overshoots_on_collapse() {
        let mut ring = chevrons(Viewport::Desktop);
        let cfg = *ring.config();
        ring.hover(Vector2::new(cfg.radius, 0.0), 0.0);
        for frame in 0..30 {
            ring.tick(frame as f64 * FRAME_MS);
        }
        ring.leave();
        let mut prev = ring.elements()[0].current_offset();
        for frame in 30..300 {
            ring.tick(frame as f64 * FRAME_MS);
            let offset = ring.elements()[0].current_offset();
            assert!(offset >= 0.0 && offset <= prev);
            prev = offset;
        }
    }

    #[test]
    fn test_entrance_starts_expanded_and_invisible() {
        let ring = chevrons(Viewport::Desktop);
        let cfg = *ring.config();
        let last = cfg.count - 1;
        // Before its stagger, the last chevron waits at the expanded radius
        let p = ring.placement(last, 1.0).unwrap();
        assert_eq!(p.opacity, 0.0);
        let breathing = BreathPulse::new(cfg.breath).modifier(1.0);
        let expected = cfg.radius * breathing * cfg.entrance.expanded_start;
        assert!((p.position.norm() - expected).abs() < 1e-6);
        assert_eq!(ring.entrance_phase(last, 1.0), Some(EntrancePhase::PreEntrance));

        let settled = ring.entrance_complete_at() + 1.0;
        let p = ring.placement(last, settled).unwrap();
        assert_eq!(p.opacity, 1.0);
        assert_eq!(ring.entrance_phase(last, settled), Some(EntrancePhase::Settled));
    }

    #[test]
    fn test_heart_ring_layout() {
        let cfg = RingConfig::heart(Viewport::Desktop);
        let ring = Ring::heart(cfg, 0.0);
        assert_eq!(ring.elements().len(), cfg.count);
        assert_eq!(ring.shape(), RingShape::Heart);
        // Centered outline, x spans [-1, 1]
        let max_x = ring
            .elements()
            .iter()
            .map(|e| e.anchor.x.abs())
            .fold(0.0, f64::max);
        assert!(max_x <= 1.0 + 1e-9 && max_x > 0.9);
        let mut ring = ring;
        for frame in 0..1000 {
            assert_eq!(ring.tick(frame as f64 * FRAME_MS), None);
        }
    }
}
