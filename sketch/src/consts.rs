//! Shared constants for the sketch crate.

// ── Polling ─────────────────────────────────────────────────────

/// Milliseconds between capture re-fetches.
pub const POLL_INTERVAL_MS: f64 = 5000.0;

// ── Palette ─────────────────────────────────────────────────────

/// Canvas background — deep water blue, rgb(1, 57, 94).
pub const BACKGROUND: &str = "#01395E";

/// Stem stroke — olive green, rgb(178, 182, 1).
pub const STEM_STROKE: &str = "#B2B601";

/// Rose outline stroke.
pub const ROSE_STROKE: &str = "#FFFFFF";

/// Rose interior fill, rgb(200, 200, 200).
pub const ROSE_FILL: &str = "#C8C8C8";

/// Node marker fill — daisy yellow, rgb(250, 203, 0).
pub const NODE_FILL: &str = "#FACB00";

// ── Geometry ────────────────────────────────────────────────────

/// Rose outline stroke width in pixels.
pub const ROSE_STROKE_WIDTH: f64 = 4.0;

/// Node marker radius in pixels (20 px diameter).
pub const NODE_RADIUS: f64 = 10.0;
