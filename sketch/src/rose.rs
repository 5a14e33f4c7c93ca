//! Maurer-rose polygon generation.
//!
//! A Maurer rose is built by sampling the polar rose `r = a·cos(kθ)` at a
//! fixed angular step and connecting consecutive samples, which traces the
//! star-like petal outline drawn at each detected location. The generator is
//! a pure function: same parameters, same vertex sequence.

#[cfg(test)]
#[path = "rose_test.rs"]
mod rose_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::mapper::Point;

/// Parameters for the rose outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoseParams {
    /// Petal reach from the center, in pixels.
    pub radius: f64,
    /// Symmetry parameter `k` of `r = a·cos(kθ)`; 6 gives a twelve-petal rose.
    pub petal_count: f64,
    /// Angular step between samples in radians. Smaller steps give a
    /// smoother outline with more vertices.
    pub angular_step: f64,
}

impl Default for RoseParams {
    fn default() -> Self {
        Self { radius: 30.0, petal_count: 6.0, angular_step: 0.02 }
    }
}

/// Number of vertices a full turn produces at the given step.
///
/// Zero when the step is non-positive, which a caller should treat as a
/// degenerate outline.
#[must_use]
pub fn vertex_count(angular_step: f64) -> usize {
    if angular_step <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (TAU / angular_step).ceil() as usize;
    n
}

/// Generate the closed rose outline centered on `center`.
///
/// Vertex `i` sits at angle `θ = i·step`, at distance `radius·cos(k·θ)`
/// from the center. The polygon is closed by the renderer; the last vertex
/// is not a repeat of the first.
#[must_use]
pub fn maurer_rose(center: Point, params: &RoseParams) -> Vec<Point> {
    let n = vertex_count(params.angular_step);
    let mut outline = Vec::with_capacity(n);
    for i in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let theta = params.angular_step * i as f64;
        let reach = params.radius * (params.petal_count * theta).cos();
        outline.push(Point {
            x: center.x + reach * theta.cos(),
            y: center.y + reach * theta.sin(),
        });
    }
    outline
}
