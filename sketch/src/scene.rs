//! Display-list construction.
//!
//! The scene is rebuilt from the current point set on every draw call; rose
//! outlines are never cached across frames. Emitting primitives as data
//! (rather than painting directly) keeps draw order and per-point counts
//! testable without a canvas context.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::mapper::Point;
use crate::rose::{self, RoseParams};

/// A single drawing operation, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Vertical stem from the canvas bottom up to the flower.
    Stem {
        /// Horizontal position of the stem.
        x: f64,
        /// Top of the stem (the flower's y coordinate).
        top: f64,
        /// Bottom edge of the canvas.
        bottom: f64,
    },
    /// Closed Maurer-rose outline.
    Rose {
        /// Outline vertices; the renderer closes the path.
        outline: Vec<Point>,
    },
    /// Filled circle marking the detected location itself.
    Node {
        /// Marker center.
        center: Point,
    },
}

/// Build the display list for one draw call.
///
/// Paint order is layered: all stems first, then all rose outlines, then
/// all node markers, so flowers sit on their stems and markers sit on the
/// flowers.
#[must_use]
pub fn build(points: &[Point], viewport_h: f64, params: &RoseParams) -> Vec<Primitive> {
    let mut primitives = Vec::with_capacity(points.len() * 3);

    for p in points {
        primitives.push(Primitive::Stem { x: p.x, top: p.y, bottom: viewport_h });
    }
    for p in points {
        primitives.push(Primitive::Rose { outline: rose::maurer_rose(*p, params) });
    }
    for p in points {
        primitives.push(Primitive::Node { center: *p });
    }

    primitives
}
