//! Mandala groups - chevron ring and heart ring
//!
//! Both render into absolutely positioned children of their container,
//! driven by a `Ring` model. On desktop the chevron ring hands its bottom
//! chevron over to a scroll-down control once the entrance has played.

use std::cell::RefCell;
use std::rc::Rc;
use nalgebra::Vector2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::bridge::{self, PointerSample};
use crate::config::{RingConfig, Viewport};
use crate::driver::{FrameHandler, FrameLoop};
use crate::error::SetupError;
use crate::motion::Ring;
use crate::renderer::apply_placement;

const INDICATOR_CLASS: &str = "scroll-indicator";

/// Ring model plus its container and element nodes
pub struct RingView {
    model: Ring,
    container: Element,
    nodes: Vec<HtmlElement>,
}

impl RingView {
    fn on_pointer(&mut self, sample: PointerSample) {
        match sample {
            PointerSample::Move { client_x, client_y } => {
                let rect = self.container.get_bounding_client_rect();
                let center = Vector2::new(
                    rect.left() + rect.width() / 2.0,
                    rect.top() + rect.height() / 2.0,
                );
                let pointer = Vector2::new(client_x, client_y) - center;
                self.model.hover(pointer, bridge::now_ms());
            }
            PointerSample::Leave => self.model.leave(),
        }
    }

    fn promote_indicator(&self, index: usize) {
        let Some(node) = self.nodes.get(index) else {
            return;
        };
        bridge::set_class(node, INDICATOR_CLASS, true);
        node.set_attribute("role", "button").ok();
        node.set_attribute("aria-label", "Scroll to next section").ok();

        let container = self.container.clone();
        let click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_e: web_sys::Event| {
            scroll_past(&container);
        });
        if let Err(e) = node.add_event_listener_with_callback("click", click.as_ref().unchecked_ref()) {
            log::warn!("scroll indicator click listener failed: {:?}", e);
            return;
        }
        click.forget();
        log::info!("chevron {} is now the scroll indicator", index);
    }
}

impl FrameHandler for RingView {
    fn frame(&mut self, now_ms: f64) {
        if let Some(index) = self.model.tick(now_ms) {
            self.promote_indicator(index);
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(placement) = self.model.placement(i, now_ms) {
                apply_placement(node, &placement);
            }
        }
    }
}

/// Smooth-scroll to the section after the one holding `element`
fn scroll_past(element: &Element) {
    let next = element
        .closest("section")
        .ok()
        .flatten()
        .and_then(|section| section.next_element_sibling());
    let Some(next) = next else {
        log::debug!("scroll indicator: no next section");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    next.scroll_into_view_with_scroll_into_view_options(&options);
}

fn mount_ring(
    document: &Document,
    container: Element,
    model: Ring,
    child_class: &str,
) -> Result<FrameLoop, SetupError> {
    let nodes = (0..model.elements().len())
        .map(|_| bridge::append_child(document, &container, "span", child_class))
        .collect::<Result<Vec<_>, _>>()?;

    let view = Rc::new(RefCell::new(RingView {
        model,
        container: container.clone(),
        nodes,
    }));
    {
        let view = Rc::clone(&view);
        bridge::listen(&container, move |sample| view.borrow_mut().on_pointer(sample))?;
    }

    FrameLoop::start(view)
}

/// Mount the chevron mandala for the current viewport, if present
pub fn mount_chevrons(
    document: &Document,
    viewport: Viewport,
    start_ms: f64,
) -> Result<Option<FrameLoop>, SetupError> {
    let selector = match viewport {
        Viewport::Desktop => ".mandala-container",
        Viewport::Mobile => ".mandala-container--mobile",
    };
    let Some(container) = bridge::query_document(document, selector) else {
        log::debug!("chevron mandala: no {} element, skipping", selector);
        return Ok(None);
    };

    let config = RingConfig::chevrons(viewport);
    let ring = Ring::chevrons(config, start_ms, viewport);
    let frame_loop = mount_ring(document, container, ring, "mandala-chevron")?;
    log::info!("chevron mandala mounted ({} chevrons, {:?})", config.count, viewport);
    Ok(Some(frame_loop))
}

/// Mount the heart mandala, if present
pub fn mount_heart(
    document: &Document,
    viewport: Viewport,
    start_ms: f64,
) -> Result<Option<FrameLoop>, SetupError> {
    let Some(container) = bridge::query_document(document, ".heart-mandala") else {
        log::debug!("heart mandala: no container, skipping");
        return Ok(None);
    };

    let config = RingConfig::heart(viewport);
    let ring = Ring::heart(config, start_ms);
    let frame_loop = mount_ring(document, container, ring, "heart-dot")?;
    log::info!("heart mandala mounted ({} dots)", config.count);
    Ok(Some(frame_loop))
}
