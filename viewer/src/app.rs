//! Browser entry point and the animation loop.
//!
//! Everything here is single-threaded cooperative scheduling: the browser's
//! animation callback drives rendering, and completed fetches land in a
//! one-slot inbox that the next tick consumes at the top of the frame
//! boundary. The engine is the lone writer of the active frame, so no
//! locking is needed.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use capture::Capture;
use sketch::engine::Engine;

use crate::config::{self, ViewerConfig};
use crate::net;

/// WASM entry point: set up logging and hand off to the async runner.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Err means a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    wasm_bindgen_futures::spawn_local(run());
}

async fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let query = window
        .location()
        .search()
        .unwrap_or_default();
    let config = config::from_query(&query);

    let canvas = match create_fullscreen_canvas(&window) {
        Some(canvas) => canvas,
        None => {
            log::error!("could not create the canvas element");
            return;
        }
    };

    let mut engine = match Engine::new(canvas) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("engine init failed: {e:?}");
            return;
        }
    };

    if let Some(json) = &config.rose_json {
        if !engine.set_rose_params_json(json) {
            log::warn!("ignoring invalid rose parameters: {json}");
        }
    }

    // The startup fetch completes before the first draw, so a detector
    // that's already running shows flowers immediately.
    match net::fetch_capture(&config.capture_url).await {
        Some(cap) => absorb(&mut engine, &cap),
        None => log::warn!("startup capture unavailable; waiting for the next poll"),
    }

    animation_loop(window, engine, config);
}

/// Apply a decoded capture to the engine, logging the no-data cases the
/// engine itself doesn't distinguish.
fn absorb(engine: &mut Engine, cap: &Capture) {
    if let Some(message) = &cap.error {
        log::warn!("detector reported: {message}");
    }
    if !engine.apply_capture(cap) {
        log::info!("no detections in capture; keeping previous frame");
    }
}

/// Create a `<canvas>` sized to the viewport at startup and attach it to
/// the document body. The size is fixed from then on; there is no resize
/// handling.
fn create_fullscreen_canvas(window: &web_sys::Window) -> Option<HtmlCanvasElement> {
    let document = window.document()?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;

    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0) as u32);
    }

    document.body()?.append_child(&canvas).ok()?;
    Some(canvas)
}

/// Drive the engine from `requestAnimationFrame`.
///
/// Each tick: consume any completed capture, repaint, and dispatch a
/// non-blocking re-fetch when the poll gate fires. Dispatch is gated on
/// elapsed time only, never on completion of the previous fetch; if two
/// fetches overlap, whichever lands in the inbox last wins.
fn animation_loop(window: web_sys::Window, engine: Engine, config: ViewerConfig) {
    let engine = Rc::new(RefCell::new(engine));
    let inbox: Rc<RefCell<Option<Capture>>> = Rc::new(RefCell::new(None));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let first = Rc::clone(&tick);

    let loop_window = window.clone();
    *first.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let mut engine = engine.borrow_mut();

        // State update happens at the top of the frame boundary.
        if let Some(cap) = inbox.borrow_mut().take() {
            absorb(&mut engine, &cap);
        }

        if let Err(e) = engine.render() {
            log::error!("render failed: {e:?}");
        }

        if engine.poll_due(now_ms) {
            let url = config.capture_url.clone();
            let inbox = Rc::clone(&inbox);
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(cap) = net::fetch_capture(&url).await {
                    *inbox.borrow_mut() = Some(cap);
                }
            });
        }

        if let Some(cb) = tick.borrow().as_ref() {
            request_frame(&loop_window, cb);
        }
    }));

    if let Some(cb) = first.borrow().as_ref() {
        request_frame(&window, cb);
    }
}

fn request_frame(window: &web_sys::Window, tick: &Closure<dyn FnMut(f64)>) {
    let callback: &js_sys::Function = tick.as_ref().unchecked_ref();
    if let Err(e) = window.request_animation_frame(callback) {
        log::error!("requestAnimationFrame failed: {e:?}");
    }
}
