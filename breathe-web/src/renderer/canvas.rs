//! Canvas 2D surface for the breath wave
//!
//! Backing store is sized in device pixels and the context transform is
//! set so every draw call uses CSS pixels.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::PathStyle;
use crate::error::SetupError;
use crate::motion::WavePath;

/// Fallback stroke when `--color-primary` is not set
pub const DEFAULT_STROKE: &str = "#4a5d4a";

/// Guide line opacity
const GUIDE_ALPHA: f64 = 0.15;

/// A DPR-aware 2D canvas with logical (CSS px) size
pub struct WaveCanvas {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    stroke: String,
}

impl WaveCanvas {
    /// Size the backing store from the canvas's layout box
    pub fn new(canvas: HtmlCanvasElement, dpr: f64, stroke: String) -> Result<Self, SetupError> {
        let rect = canvas.get_bounding_client_rect();
        let width = rect.width();
        let height = rect.height();

        canvas.set_width((width * dpr).round() as u32);
        canvas.set_height((height * dpr).round() as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or(SetupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext)?;

        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;

        log::debug!("wave canvas: {}x{} @{}x", width, height, dpr);

        Ok(Self { ctx, width, height, stroke })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    /// Faint full-width horizontal lines at each `y`
    pub fn draw_guides(&self, ys: &[f64]) {
        self.ctx.set_stroke_style_str(&self.stroke);
        self.ctx.set_global_alpha(GUIDE_ALPHA);
        self.ctx.set_line_width(1.0);

        for y in ys {
            self.ctx.begin_path();
            self.ctx.move_to(0.0, *y);
            self.ctx.line_to(self.width, *y);
            self.ctx.stroke();
        }

        self.ctx.set_global_alpha(1.0);
    }

    /// Stroke the wave as one connected path
    pub fn draw_path(&self, path: &WavePath, line_width: f64) {
        let Some((&(x0, y0), rest)) = path.points.split_first() else {
            return;
        };

        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&self.stroke);
        self.ctx.set_line_width(line_width);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.move_to(x0, y0);

        match path.style {
            PathStyle::PerPixel => {
                for &(x, y) in rest {
                    self.ctx.line_to(x, y);
                }
            }
            PathStyle::Smoothed => {
                // Each sample is a control point, curves meet at midpoints
                let mut prev = (x0, y0);
                for &(x, y) in rest {
                    let mid = ((prev.0 + x) / 2.0, (prev.1 + y) / 2.0);
                    self.ctx.quadratic_curve_to(prev.0, prev.1, mid.0, mid.1);
                    prev = (x, y);
                }
                self.ctx.line_to(prev.0, prev.1);
            }
        }

        self.ctx.stroke();
    }
}
