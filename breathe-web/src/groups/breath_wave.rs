//! Breath wave group - canvas trailing line with breath labels
//!
//! Markup: `.breath-wave-container` holding `.breath-canvas`, `.breath-text`
//! and optional `.breath-label--top` / `.breath-label--bottom`. Input is
//! taken from the closest `.intro` section when there is one.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::bridge::{self, PointerSample};
use crate::config::WaveConfig;
use crate::driver::{FrameHandler, FrameLoop};
use crate::error::SetupError;
use crate::motion::{normalize_pointer, BreathState, WaveLine};
use crate::renderer::{WaveCanvas, DEFAULT_STROKE};

/// Class toggled on the container while the pointer drives the wave
const INTERACTIVE_CLASS: &str = "interactive";
const ACTIVE_CLASS: &str = "active";

/// Wave model plus the elements it renders into
pub struct BreathWaveView {
    model: WaveLine,
    canvas: WaveCanvas,
    container: Element,
    text: Element,
    label_top: Option<Element>,
    label_bottom: Option<Element>,
    /// Last state written to the DOM
    shown_state: Option<BreathState>,
    shown_interactive: bool,
}

impl BreathWaveView {
    fn sync_labels(&mut self) {
        let state = self.model.state();
        if self.shown_state != Some(state) {
            self.text.set_text_content(Some(state.label()));
            if let Some(top) = &self.label_top {
                bridge::set_class(top, ACTIVE_CLASS, state.top_active());
            }
            if let Some(bottom) = &self.label_bottom {
                bridge::set_class(bottom, ACTIVE_CLASS, state.bottom_active());
            }
            self.shown_state = Some(state);
        }

        let interactive = self.model.is_interactive();
        if interactive != self.shown_interactive {
            bridge::set_class(&self.container, INTERACTIVE_CLASS, interactive);
            self.shown_interactive = interactive;
        }
    }

    fn draw(&self) {
        let height = self.canvas.height();
        self.canvas.clear();
        self.canvas.draw_guides(&self.model.guide_lines(height));
        let path = self.model.path(self.canvas.width(), height);
        self.canvas.draw_path(&path, self.model.config().line_width);
    }

    fn on_pointer(&mut self, sample: PointerSample) {
        match sample {
            PointerSample::Move { client_y, .. } => {
                let rect = self.container.get_bounding_client_rect();
                let y = normalize_pointer(client_y, rect.top(), rect.height());
                self.model.sample(y);
            }
            PointerSample::Leave => self.model.leave(bridge::now_ms()),
        }
    }
}

impl FrameHandler for BreathWaveView {
    fn frame(&mut self, now_ms: f64) {
        self.model.tick(now_ms);
        self.sync_labels();
        self.draw();
    }
}

/// Mount the breath wave if its markup is present
pub fn mount(document: &Document, config: WaveConfig) -> Result<Option<FrameLoop>, SetupError> {
    let Some(container) = bridge::query_document(document, ".breath-wave-container") else {
        log::debug!("breath wave: no container, skipping");
        return Ok(None);
    };
    let (Some(canvas), Some(text)) = (
        bridge::query(&container, ".breath-canvas"),
        bridge::query(&container, ".breath-text"),
    ) else {
        log::debug!("breath wave: canvas or text missing, skipping");
        return Ok(None);
    };

    let canvas = canvas
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SetupError::WrongElementType(".breath-canvas"))?;
    let stroke = bridge::css_variable("--color-primary").unwrap_or_else(|| DEFAULT_STROKE.to_string());
    let canvas = WaveCanvas::new(canvas, bridge::device_pixel_ratio(), stroke)?;

    let view = Rc::new(RefCell::new(BreathWaveView {
        model: WaveLine::new(config, canvas.width()),
        canvas,
        label_top: bridge::query(&container, ".breath-label--top"),
        label_bottom: bridge::query(&container, ".breath-label--bottom"),
        container: container.clone(),
        text,
        shown_state: None,
        shown_interactive: false,
    }));

    let region = container
        .closest(".intro")
        .ok()
        .flatten()
        .unwrap_or(container);
    {
        let view = Rc::clone(&view);
        bridge::listen(&region, move |sample| view.borrow_mut().on_pointer(sample))?;
    }

    let frame_loop = FrameLoop::start(view)?;
    log::info!("breath wave mounted");
    Ok(Some(frame_loop))
}
