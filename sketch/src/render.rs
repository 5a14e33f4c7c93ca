//! Rendering: paints the display list to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives the already-built display list and produces pixels — it does
//! not mutate any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    BACKGROUND, NODE_FILL, NODE_RADIUS, ROSE_FILL, ROSE_STROKE, ROSE_STROKE_WIDTH, STEM_STROKE,
};
use crate::mapper::Point;
use crate::scene::Primitive;

/// Clear the canvas to the background color and paint the scene.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    primitives: &[Primitive],
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    for primitive in primitives {
        match primitive {
            Primitive::Stem { x, top, bottom } => draw_stem(ctx, *x, *top, *bottom),
            Primitive::Rose { outline } => draw_rose(ctx, outline),
            Primitive::Node { center } => draw_node(ctx, *center)?,
        }
    }

    Ok(())
}

fn draw_stem(ctx: &CanvasRenderingContext2d, x: f64, top: f64, bottom: f64) {
    ctx.set_stroke_style_str(STEM_STROKE);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(x, bottom);
    ctx.line_to(x, top);
    ctx.stroke();
}

fn draw_rose(ctx: &CanvasRenderingContext2d, outline: &[Point]) {
    let Some(first) = outline.first() else {
        return;
    };

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for vertex in &outline[1..] {
        ctx.line_to(vertex.x, vertex.y);
    }
    ctx.close_path();

    ctx.set_fill_style_str(ROSE_FILL);
    ctx.fill();

    ctx.set_stroke_style_str(ROSE_STROKE);
    ctx.set_line_width(ROSE_STROKE_WIDTH);
    ctx.stroke();
}

fn draw_node(ctx: &CanvasRenderingContext2d, center: Point) -> Result<(), JsValue> {
    ctx.set_fill_style_str(NODE_FILL);
    ctx.begin_path();
    ctx.arc(center.x, center.y, NODE_RADIUS, 0.0, 2.0 * PI)?;
    ctx.fill();
    Ok(())
}
