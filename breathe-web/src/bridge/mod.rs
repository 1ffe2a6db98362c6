//! Bridge module - JS ↔ Rust communication
//!
//! DOM lookups and input listeners. Re-exports only in mod.rs, logic in
//! submodules.

mod dom;
mod pointer;

pub use dom::{
    document,
    now_ms,
    viewport,
    device_pixel_ratio,
    query,
    query_document,
    query_all,
    set_class,
    set_style,
    set_property,
    inline_style,
    css_variable,
    append_child,
};

pub use pointer::{listen, PointerSample};
