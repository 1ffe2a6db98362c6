//! Groups module - one mountable unit per animated page feature
//!
//! Each mount looks up its markup, wires input, and starts a frame loop.
//! Missing markup yields `Ok(None)`.

mod breath_wave;
mod mandala;
mod icons;
mod accordion;

pub use breath_wave::mount as mount_breath_wave;
pub use mandala::{mount_chevrons, mount_heart};
pub use icons::mount as mount_breath_icons;
pub use accordion::toggle as toggle_faq;
