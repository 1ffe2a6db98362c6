//! Frame driver - owns the requestAnimationFrame loop
//!
//! Groups implement `FrameHandler`; the loop calls them once per display
//! refresh until stopped. `Stepper` runs handlers on a fixed synthetic
//! clock instead, for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::SetupError;

/// Something that blends and renders once per frame
pub trait FrameHandler {
    fn frame(&mut self, now_ms: f64);
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A running requestAnimationFrame loop for one handler
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// Schedule `handler` on every animation frame
    pub fn start(handler: Rc<RefCell<dyn FrameHandler>>) -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;

        let running = Rc::new(Cell::new(true));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let alive = Rc::clone(&running);
        let pending_id = Rc::clone(&pending);
        let next = Rc::clone(&callback);
        let win = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            pending_id.set(None);
            if !alive.get() {
                return;
            }

            handler.borrow_mut().frame(now);

            if let Some(cb) = next.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_id.set(Some(id)),
                    Err(e) => {
                        log::warn!("animation frame request failed, stopping loop: {:?}", e);
                        alive.set(false);
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = {
            let cb = callback.borrow();
            let cb = cb.as_ref().ok_or(SetupError::Js("frame callback missing".into()))?;
            window.request_animation_frame(cb.as_ref().unchecked_ref())?
        };
        pending.set(Some(first));

        Ok(Self { running, pending, callback })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the callback.
    /// Must not be called from inside a frame of this loop.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

// ============================================================================
// DETERMINISTIC STEPPING
// ============================================================================

/// Fixed-interval clock for running a bounded number of frames
pub struct Stepper {
    now_ms: f64,
    frame_ms: f64,
}

impl Stepper {
    pub fn new(start_ms: f64, frame_ms: f64) -> Self {
        Self { now_ms: start_ms, frame_ms }
    }

    /// 60 Hz from t = 0
    pub fn sixty_hz() -> Self {
        Self::new(0.0, 1000.0 / 60.0)
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Jump the clock without running frames
    pub fn skip(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    /// Run `frames` frames, advancing the clock after each
    pub fn run<H: FrameHandler + ?Sized>(&mut self, handler: &mut H, frames: usize) {
        for _ in 0..frames {
            handler.frame(self.now_ms);
            self.now_ms += self.frame_ms;
        }
    }
}

// ============================================================================
// PURE MODEL HANDLERS
// ============================================================================

impl FrameHandler for crate::motion::WaveLine {
    fn frame(&mut self, now_ms: f64) {
        self.tick(now_ms);
    }
}

impl FrameHandler for crate::motion::Ring {
    fn frame(&mut self, now_ms: f64) {
        self.tick(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RingConfig, Viewport, WaveConfig};
    use crate::motion::{Ring, WaveLine};

    struct Counter {
        calls: Vec<f64>,
    }

    impl FrameHandler for Counter {
        fn frame(&mut self, now_ms: f64) {
            self.calls.push(now_ms);
        }
    }

    #[test]
    fn test_stepper_runs_bounded_frames() {
        let mut counter = Counter { calls: Vec::new() };
        let mut stepper = Stepper::new(100.0, 10.0);
        stepper.run(&mut counter, 3);
        assert_eq!(counter.calls, vec![100.0, 110.0, 120.0]);
        assert_eq!(stepper.now(), 130.0);
    }

    #[test]
    fn test_stepper_drives_wave_to_target() {
        let mut wave = WaveLine::new(WaveConfig::standard(), 200.0);
        wave.sample(0.9);
        let mut stepper = Stepper::sixty_hz();
        // 0.4 at 0.002 per frame needs 200 frames
        stepper.run(&mut wave, 199);
        assert!(wave.current() < 0.9);
        stepper.run(&mut wave, 2);
        assert_eq!(wave.current(), 0.9);
    }

    #[test]
    fn test_stepper_drives_ring_handoff() {
        let mut ring = Ring::chevrons(RingConfig::chevrons(Viewport::Desktop), 0.0, Viewport::Desktop);
        let mut stepper = Stepper::sixty_hz();
        stepper.run(&mut ring, 10);
        assert_eq!(ring.indicator(), None);
        stepper.skip(10_000.0);
        stepper.run(&mut ring, 1);
        assert_eq!(ring.indicator(), Some(6));
    }
}
