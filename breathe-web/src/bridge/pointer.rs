//! Pointer and touch input
//!
//! Mouse and touch events on an interaction region are folded into one
//! stream of `PointerSample`s. Listeners live for the page lifetime.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget, MouseEvent, TouchEvent};

use crate::error::SetupError;

/// One input observation, in viewport (client) coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
    Move { client_x: f64, client_y: f64 },
    Leave,
}

/// First active touch of a touch event, if any
fn first_touch(event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event.touches().get(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

/// Route mouse/touch move and leave events on `target` into `on_sample`
pub fn listen<F>(target: &EventTarget, on_sample: F) -> Result<(), SetupError>
where
    F: FnMut(PointerSample) + 'static,
{
    let handler = Rc::new(RefCell::new(on_sample));

    {
        let handler = Rc::clone(&handler);
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            (&mut *handler.borrow_mut())(PointerSample::Move {
                client_x: e.client_x() as f64,
                client_y: e.client_y() as f64,
            });
        });
        target.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }

    {
        let handler = Rc::clone(&handler);
        let touchmove = Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
            if let Some((client_x, client_y)) = first_touch(&e) {
                (&mut *handler.borrow_mut())(PointerSample::Move { client_x, client_y });
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            touchmove.as_ref().unchecked_ref(),
            &options,
        )?;
        touchmove.forget();
    }

    for event in ["mouseleave", "touchend"] {
        let handler = Rc::clone(&handler);
        let leave = Closure::<dyn FnMut(web_sys::Event)>::new(move |_e: web_sys::Event| {
            (&mut *handler.borrow_mut())(PointerSample::Leave);
        });
        target.add_event_listener_with_callback(event, leave.as_ref().unchecked_ref())?;
        leave.forget();
    }

    Ok(())
}
