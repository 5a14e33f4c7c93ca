//! Shared capture model for the object-location wire format.
//!
//! This crate owns the JSON payload produced by the Location Source (the
//! external object-finder endpoint) and its validated in-memory form. Both
//! the browser viewer and the native CLI consume it, so it stays free of any
//! web or async dependency.
//!
//! The wire shape is `{ "locs": [[row, col], ...], "w": number, "h": number }`
//! on success and `{ "locs": null }` (or `{ "error": "..." }`) when the
//! detector had nothing to report. A payload only becomes a [`Frame`] once
//! the point list and both source dimensions are actually present.

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_capture`].
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The payload was not valid capture JSON.
    #[error("failed to parse capture payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A raw capture payload as received from the Location Source.
///
/// Every field is optional on the wire: a detector that found nothing sends
/// `{"locs": null}` with no dimensions at all, and a detector that failed
/// outright sends only an `error` string. Use [`Capture::frame`] to obtain
/// a validated view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    /// Detected object locations as `[row, col]` pairs in source image space.
    #[serde(default)]
    pub locs: Option<Vec<[f64; 2]>>,
    /// Source image width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    /// Source image height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    /// Detector-side failure message, if the capture itself failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Capture {
    /// Validate this payload into a [`Frame`].
    ///
    /// Returns `None` when the point list is absent or either source
    /// dimension is missing or non-positive. Callers treat `None` as
    /// "no data": the previously displayed frame stays up.
    #[must_use]
    pub fn frame(&self) -> Option<Frame> {
        let locs = self.locs.as_ref()?;
        let width = self.w.filter(|w| *w > 0.0)?;
        let height = self.h.filter(|h| *h > 0.0)?;
        let points = locs
            .iter()
            .map(|[row, col]| SourcePoint { row: *row, col: *col })
            .collect();
        Some(Frame { points, width, height })
    }
}

/// A detected object location in source image space.
///
/// Note the order: the detector reports `[row, col]` (y before x), matching
/// how image libraries index pixel data. The canvas mapper swaps the axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourcePoint {
    /// Vertical offset from the top of the source image.
    pub row: f64,
    /// Horizontal offset from the left of the source image.
    pub col: f64,
}

/// A validated capture: the current set of detected locations plus the
/// dimensions of the image they were detected in.
///
/// Frames replace each other wholesale; there is no merging or diffing
/// between consecutive captures.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Detected locations, in detector order.
    pub points: Vec<SourcePoint>,
    /// Source image width; always positive.
    pub width: f64,
    /// Source image height; always positive.
    pub height: f64,
}

/// Decode a capture payload from raw JSON text.
///
/// # Errors
///
/// Returns [`CaptureError::Parse`] when the text is not valid JSON for the
/// capture shape. A syntactically valid payload with missing fields is *not*
/// an error; it simply fails to validate into a [`Frame`].
pub fn decode_capture(text: &str) -> Result<Capture, CaptureError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
