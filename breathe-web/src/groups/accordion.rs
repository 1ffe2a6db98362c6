//! FAQ accordion, toggled from inline markup handlers

use web_sys::Element;

use crate::bridge;

const ACTIVE_CLASS: &str = "active";

/// Flip the open state of the FAQ item that owns `button`
pub fn toggle(button: &Element) {
    let Some(item) = button.parent_element() else {
        log::debug!("faq toggle: button has no parent");
        return;
    };
    let open = item.class_list().contains(ACTIVE_CLASS);
    bridge::set_class(&item, ACTIVE_CLASS, !open);
}
