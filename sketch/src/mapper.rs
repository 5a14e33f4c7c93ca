//! Coordinate remapping from detector image space to canvas space.
//!
//! The Location Source reports points as `[row, col]` in the coordinate
//! system of the captured image. The canvas wants `(x, y)` pixels. Mapping
//! rescales each axis linearly onto the viewport, swaps the axis order, and
//! rounds to whole pixels so primitives land on pixel boundaries.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use capture::Frame;

/// A point in canvas space, in whole CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rescale a value from `[0, from_span]` onto `[0, to_span]`.
fn rescale(value: f64, from_span: f64, to_span: f64) -> f64 {
    value / from_span * to_span
}

/// Map a single source point onto a viewport.
///
/// The row rescales from `[0, source_h]` to `[0, viewport_h]` and becomes
/// the y coordinate; the column rescales from `[0, source_w]` to
/// `[0, viewport_w]` and becomes x. Both round to the nearest pixel.
#[must_use]
pub fn map_point(
    point: capture::SourcePoint,
    source_w: f64,
    source_h: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> Point {
    Point {
        x: rescale(point.col, source_w, viewport_w).round(),
        y: rescale(point.row, source_h, viewport_h).round(),
    }
}

/// Map every point of a frame onto a viewport.
///
/// `Frame` guarantees positive source dimensions, so the rescale is always
/// well-defined; points inside the source image land inside the viewport.
#[must_use]
pub fn map_frame(frame: &Frame, viewport_w: f64, viewport_h: f64) -> Vec<Point> {
    frame
        .points
        .iter()
        .map(|p| map_point(*p, frame.width, frame.height, viewport_w, viewport_h))
        .collect()
}
