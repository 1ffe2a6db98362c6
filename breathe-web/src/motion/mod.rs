//! Motion module - per-frame arithmetic for every animated group
//!
//! Re-exports only. All logic in submodules. Nothing here touches the DOM.

mod easing;
mod pulse;
mod entrance;
mod history;
mod wave;
mod heart;
mod ring;

pub use easing::{ease_out_cubic, lerp, approach, step_toward};
pub use pulse::BreathPulse;
pub use entrance::{Entrance, EntrancePhase};
pub use history::HistoryBuffer;
pub use wave::{WaveLine, WavePath, BreathState, Edge, normalize_pointer, CENTER};
pub use heart::{heart_point, ArcLengthTable, ARC_SAMPLES};
pub use ring::{Ring, RingElement, RingShape, Placement, HoverPhase};
