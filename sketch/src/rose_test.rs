#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- RoseParams ---

#[test]
fn default_params_match_the_daisy_shape() {
    let params = RoseParams::default();
    assert_eq!(params.radius, 30.0);
    assert_eq!(params.petal_count, 6.0);
    assert_eq!(params.angular_step, 0.02);
}

#[test]
fn params_deserialize_with_partial_overrides() {
    let params: RoseParams = serde_json::from_str(r#"{"radius": 45.0}"#).expect("deserialize");
    assert_eq!(params.radius, 45.0);
    assert_eq!(params.petal_count, 6.0);
    assert_eq!(params.angular_step, 0.02);
}

// --- vertex_count ---

#[test]
fn default_step_gives_315_vertices() {
    assert_eq!(vertex_count(0.02), 315);
}

#[test]
fn coarser_step_gives_fewer_vertices() {
    // ceil(2π / 1.0) = 7
    assert_eq!(vertex_count(1.0), 7);
}

#[test]
fn non_positive_step_gives_no_vertices() {
    assert_eq!(vertex_count(0.0), 0);
    assert_eq!(vertex_count(-0.5), 0);
}

// --- maurer_rose ---

#[test]
fn outline_has_one_vertex_per_sample() {
    let outline = maurer_rose(Point::new(0.0, 0.0), &RoseParams::default());
    assert_eq!(outline.len(), 315);
}

#[test]
fn first_vertex_lies_at_radius_on_the_x_axis() {
    // θ = 0: cos(kθ) = cos(0) = 1, so the vertex is (cx + radius, cy).
    let outline = maurer_rose(Point::new(0.0, 0.0), &RoseParams::default());
    assert!(approx_eq(outline[0].x, 30.0));
    assert!(approx_eq(outline[0].y, 0.0));
}

#[test]
fn outline_translates_with_the_center() {
    let at_origin = maurer_rose(Point::new(0.0, 0.0), &RoseParams::default());
    let offset = maurer_rose(Point::new(100.0, -40.0), &RoseParams::default());
    for (a, b) in at_origin.iter().zip(&offset) {
        assert!(approx_eq(a.x + 100.0, b.x));
        assert!(approx_eq(a.y - 40.0, b.y));
    }
}

#[test]
fn outline_is_deterministic() {
    let params = RoseParams { radius: 22.0, petal_count: 4.0, angular_step: 0.05 };
    let first = maurer_rose(Point::new(7.0, 7.0), &params);
    let second = maurer_rose(Point::new(7.0, 7.0), &params);
    assert_eq!(first, second);
}

#[test]
fn outline_stays_within_the_radius() {
    let params = RoseParams::default();
    let outline = maurer_rose(Point::new(0.0, 0.0), &params);
    for p in outline {
        let dist = p.x.hypot(p.y);
        assert!(dist <= params.radius + EPSILON, "vertex beyond radius: {dist}");
    }
}

#[test]
fn degenerate_step_yields_empty_outline() {
    let params = RoseParams { angular_step: 0.0, ..RoseParams::default() };
    assert!(maurer_rose(Point::new(0.0, 0.0), &params).is_empty());
}
