#![allow(clippy::float_cmp)]

use super::*;

fn sample_payload() -> &'static str {
    r#"{"w": 640, "h": 480, "locs": [[120, 300], [45.5, 10]]}"#
}

#[test]
fn decode_full_payload() {
    let capture = decode_capture(sample_payload()).expect("decode should succeed");
    assert_eq!(capture.w, Some(640.0));
    assert_eq!(capture.h, Some(480.0));
    assert_eq!(
        capture.locs,
        Some(vec![[120.0, 300.0], [45.5, 10.0]])
    );
    assert_eq!(capture.error, None);
}

#[test]
fn decode_null_locs_payload() {
    let capture = decode_capture(r#"{"locs": null}"#).expect("decode should succeed");
    assert_eq!(capture.locs, None);
    assert_eq!(capture.w, None);
    assert_eq!(capture.h, None);
}

#[test]
fn decode_detector_error_payload() {
    let capture =
        decode_capture(r#"{"error": "no objects detected"}"#).expect("decode should succeed");
    assert_eq!(capture.error.as_deref(), Some("no objects detected"));
    assert!(capture.frame().is_none());
}

#[test]
fn decode_rejects_malformed_json() {
    let err = decode_capture("{locs:").expect_err("parse should fail");
    assert!(matches!(err, CaptureError::Parse(_)));
}

#[test]
fn decode_rejects_wrong_pair_arity() {
    // Three-element locations don't fit the [row, col] wire shape.
    assert!(decode_capture(r#"{"locs": [[1, 2, 3]], "w": 10, "h": 10}"#).is_err());
}

#[test]
fn frame_from_full_payload() {
    let capture = decode_capture(sample_payload()).expect("decode");
    let frame = capture.frame().expect("frame should validate");
    assert_eq!(frame.width, 640.0);
    assert_eq!(frame.height, 480.0);
    assert_eq!(frame.points.len(), 2);
    assert_eq!(frame.points[0], SourcePoint { row: 120.0, col: 300.0 });
    assert_eq!(frame.points[1], SourcePoint { row: 45.5, col: 10.0 });
}

#[test]
fn frame_preserves_detector_point_order() {
    let capture = decode_capture(r#"{"w": 9, "h": 9, "locs": [[3, 4], [1, 2], [5, 6]]}"#)
        .expect("decode");
    let frame = capture.frame().expect("frame");
    let rows: Vec<f64> = frame.points.iter().map(|p| p.row).collect();
    assert_eq!(rows, vec![3.0, 1.0, 5.0]);
}

#[test]
fn empty_point_list_still_forms_a_frame() {
    // An empty list is a genuine "nothing detected" frame, distinct from null.
    let capture = decode_capture(r#"{"w": 10, "h": 10, "locs": []}"#).expect("decode");
    let frame = capture.frame().expect("frame");
    assert!(frame.points.is_empty());
}

#[test]
fn null_locs_does_not_form_a_frame() {
    let capture = decode_capture(r#"{"locs": null}"#).expect("decode");
    assert!(capture.frame().is_none());
}

#[test]
fn missing_dimensions_do_not_form_a_frame() {
    let capture = decode_capture(r#"{"locs": [[1, 2]]}"#).expect("decode");
    assert!(capture.frame().is_none());

    let capture = decode_capture(r#"{"locs": [[1, 2]], "w": 100}"#).expect("decode");
    assert!(capture.frame().is_none());
}

#[test]
fn non_positive_dimensions_do_not_form_a_frame() {
    let capture = decode_capture(r#"{"locs": [[1, 2]], "w": 0, "h": 100}"#).expect("decode");
    assert!(capture.frame().is_none());

    let capture = decode_capture(r#"{"locs": [[1, 2]], "w": 100, "h": -5}"#).expect("decode");
    assert!(capture.frame().is_none());
}

#[test]
fn capture_round_trips_through_json() {
    let capture = decode_capture(sample_payload()).expect("decode");
    let text = serde_json::to_string(&capture).expect("serialize");
    let back = decode_capture(&text).expect("re-decode");
    assert_eq!(back, capture);
}

#[test]
fn serialized_null_capture_omits_absent_fields() {
    let capture = Capture::default();
    let text = serde_json::to_string(&capture).expect("serialize");
    assert_eq!(text, r#"{"locs":null}"#);
}
