//! Renderer module - canvas draws and style writes
//!
//! Re-exports only. All logic in submodules.

mod canvas;
mod styles;

pub use canvas::{WaveCanvas, DEFAULT_STROKE};
pub use styles::{ring_transform, apply_placement, apply_breath};
