//! Engine: the single owner of the current frame and the poll timer.
//!
//! `EngineCore` carries all state and logic that doesn't depend on the
//! browser, so every behavior of the render loop — frame replacement,
//! retention on empty captures, poll gating — is unit-testable. `Engine`
//! wraps it together with the canvas element and its 2D context.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use capture::{Capture, Frame};

use crate::consts::POLL_INTERVAL_MS;
use crate::mapper::{self, Point};
use crate::rose::RoseParams;
use crate::scene::{self, Primitive};

/// Core engine state, separated from `Engine` so it can be tested without
/// WASM/browser dependencies.
///
/// The core is the lone writer of the active frame: fetch completions flow
/// in through [`EngineCore::apply_capture`] at a frame boundary, and the
/// draw step reads the resulting points. There is no other mutation path,
/// which is what makes the lock-free cooperative scheduling sound.
pub struct EngineCore {
    /// Last good capture, kept in source space so a viewport change can remap.
    frame: Option<Frame>,
    /// The active frame's points, already mapped to canvas space.
    points: Vec<Point>,
    rose: RoseParams,
    viewport_w: f64,
    viewport_h: f64,
    /// Timestamp of the last due poll; `None` until the timer is armed.
    last_poll_ms: Option<f64>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            frame: None,
            points: Vec::new(),
            rose: RoseParams::default(),
            viewport_w: 0.0,
            viewport_h: 0.0,
            last_poll_ms: None,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Absorb a completed capture.
    ///
    /// When the capture validates into a [`Frame`], it replaces the active
    /// frame wholesale and the points are remapped. Otherwise — null point
    /// list, missing dimensions, detector error — the previous frame stays
    /// displayed untouched. Returns whether the frame was replaced.
    ///
    /// Overlapping fetches are resolved here implicitly: whichever response
    /// is applied last wins.
    pub fn apply_capture(&mut self, cap: &Capture) -> bool {
        let Some(frame) = cap.frame() else {
            return false;
        };
        self.points = mapper::map_frame(&frame, self.viewport_w, self.viewport_h);
        self.frame = Some(frame);
        true
    }

    /// Record the viewport size and remap the held frame onto it.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_w = width;
        self.viewport_h = height;
        if let Some(frame) = &self.frame {
            self.points = mapper::map_frame(frame, width, height);
        }
    }

    /// Replace the rose parameters used for subsequent draws.
    pub fn set_rose_params(&mut self, params: RoseParams) {
        self.rose = params;
    }

    // --- Polling ---

    /// Elapsed-time poll gate.
    ///
    /// Returns true when [`POLL_INTERVAL_MS`] have passed since the last due
    /// poll, and rearms the timer. The first call arms the timer and returns
    /// false, so the startup fetch isn't immediately duplicated. The gate is
    /// purely time-based: it does not wait for the previous fetch to
    /// complete.
    pub fn poll_due(&mut self, now_ms: f64) -> bool {
        match self.last_poll_ms {
            None => {
                self.last_poll_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms - last >= POLL_INTERVAL_MS => {
                self.last_poll_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }

    // --- Queries ---

    /// The active frame's canvas-space points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether any frame has been applied yet.
    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Build the display list for the current state.
    #[must_use]
    pub fn scene(&self) -> Vec<Primitive> {
        scene::build(&self.points, self.viewport_h, &self.rose)
    }
}

/// The full sketch engine. Wraps [`EngineCore`] and owns the browser canvas
/// element and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element, sized to the
    /// element's current width and height.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the element cannot produce a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut core = EngineCore::new();
        core.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()));

        Ok(Self { canvas, ctx, core })
    }

    // --- Delegated data inputs ---

    pub fn apply_capture(&mut self, cap: &Capture) -> bool {
        self.core.apply_capture(cap)
    }

    pub fn set_rose_params(&mut self, params: RoseParams) {
        self.core.set_rose_params(params);
    }

    /// Apply rose parameters supplied as JSON, e.g. from a page query
    /// parameter. Unparseable JSON leaves the current parameters in place.
    pub fn set_rose_params_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<RoseParams>(json) {
            Ok(params) => {
                self.core.set_rose_params(params);
                true
            }
            Err(_) => false,
        }
    }

    pub fn poll_due(&mut self, now_ms: f64) -> bool {
        self.core.poll_due(now_ms)
    }

    // --- Render ---

    /// Clear the canvas and repaint the current scene.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let viewport_w = f64::from(self.canvas.width());
        let viewport_h = f64::from(self.canvas.height());
        crate::render::draw(&self.ctx, &self.core.scene(), viewport_w, viewport_h)
    }
}
