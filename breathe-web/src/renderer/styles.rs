//! Style writers for DOM-rendered groups

use web_sys::{CssStyleDeclaration, HtmlElement};

use crate::bridge::{set_property, set_style};
use crate::motion::Placement;

/// CSS transform for an element centered on the ring origin
pub fn ring_transform(placement: &Placement) -> String {
    format!(
        "translate(-50%, -50%) translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.4})",
        placement.position.x,
        placement.position.y,
        placement.rotation_deg,
        placement.scale,
    )
}

pub fn apply_placement(element: &HtmlElement, placement: &Placement) {
    set_style(element, "transform", &ring_transform(placement));
    set_style(element, "opacity", &format!("{:.3}", placement.opacity));
}

/// Breathing custom properties read by the stylesheet
pub fn apply_breath(style: &CssStyleDeclaration, scale: f64, progress: f64) {
    set_property(style, "--breath-scale", &format!("{:.4}", scale));
    set_property(style, "--breath-progress", &format!("{:.4}", progress));
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn test_ring_transform_format() {
        let placement = Placement {
            position: Vector2::new(12.5, -3.0),
            rotation_deg: 90.0,
            scale: 1.05,
            opacity: 1.0,
        };
        assert_eq!(
            ring_transform(&placement),
            "translate(-50%, -50%) translate(12.50px, -3.00px) rotate(90.00deg) scale(1.0500)"
        );
    }
}
