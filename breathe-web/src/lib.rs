//! Breathe Web - ambient motion for the Breathe with Eli site
//! 
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
mod error;
mod groups;
mod renderer;

pub mod config;
pub mod driver;
pub mod motion;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use config::{PulseConfig, WaveConfig};
use driver::FrameLoop;
pub use error::SetupError;

// Thread-local storage for running loops (WASM is single-threaded)
thread_local! {
    static LOOPS: RefCell<Vec<FrameLoop>> = RefCell::new(Vec::new());
}

// ============================================================================
// LOGGING
// ============================================================================

fn init_logging() {
    let level = if cfg!(feature = "debug-log") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only if a logger is already installed
    console_log::init_with_level(level).ok();
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads: mounts every animated
/// group whose markup is on the page
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let document = bridge::document()?;
    let viewport = bridge::viewport();
    let start_ms = bridge::now_ms();

    let mounts = [
        ("breath icons", groups::mount_breath_icons(&document, PulseConfig::icons())),
        ("breath wave", groups::mount_breath_wave(&document, WaveConfig::standard())),
        ("chevron mandala", groups::mount_chevrons(&document, viewport, start_ms)),
        ("heart mandala", groups::mount_heart(&document, viewport, start_ms)),
    ];

    LOOPS.with(|loops| {
        let mut loops = loops.borrow_mut();
        for (name, result) in mounts {
            match result {
                Ok(Some(frame_loop)) => loops.push(frame_loop),
                Ok(None) => {}
                Err(e) => log::warn!("{} not mounted: {}", name, e),
            }
        }
        log::info!("{} animation loops running ({:?} layout)", loops.len(), viewport);
    });

    Ok(())
}

/// Stop and release every animation loop
#[wasm_bindgen]
pub fn stop_all() {
    LOOPS.with(|loops| {
        for frame_loop in loops.borrow_mut().drain(..) {
            frame_loop.stop();
        }
    });
}

/// FAQ accordion handler, bound from markup as `toggleFaq(this)`
#[wasm_bindgen(js_name = toggleFaq)]
pub fn toggle_faq(button: &web_sys::Element) {
    groups::toggle_faq(button);
}
