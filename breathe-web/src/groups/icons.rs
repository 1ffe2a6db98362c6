//! Service icon breathing
//!
//! One timer drives every `.service-icon svg` so they breathe in sync.
//! The stylesheet reads `--breath-scale` and `--breath-progress`.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{CssStyleDeclaration, Document};

use crate::bridge;
use crate::config::PulseConfig;
use crate::driver::{FrameHandler, FrameLoop};
use crate::error::SetupError;
use crate::motion::BreathPulse;
use crate::renderer::apply_breath;

pub struct BreathIcons {
    pulse: BreathPulse,
    styles: Vec<CssStyleDeclaration>,
}

impl FrameHandler for BreathIcons {
    fn frame(&mut self, now_ms: f64) {
        let scale = self.pulse.scale(now_ms);
        let progress = self.pulse.progress(now_ms);
        for style in &self.styles {
            apply_breath(style, scale, progress);
        }
    }
}

pub fn mount(document: &Document, config: PulseConfig) -> Result<Option<FrameLoop>, SetupError> {
    let styles: Vec<_> = bridge::query_all(document, ".service-icon svg")
        .iter()
        .filter_map(bridge::inline_style)
        .collect();
    if styles.is_empty() {
        log::debug!("breath icons: none found, skipping");
        return Ok(None);
    }

    let count = styles.len();
    let icons = BreathIcons { pulse: BreathPulse::new(config), styles };
    let frame_loop = FrameLoop::start(Rc::new(RefCell::new(icons)))?;
    log::info!("breath icons mounted ({})", count);
    Ok(Some(frame_loop))
}
