//! # viewer
//!
//! Browser host for the meadow sketch. Fetches object-location captures
//! from the Location Source, owns the animation loop, and drives the
//! `sketch` crate's engine.
//!
//! Browser-only code (networking, DOM, the animation loop) is gated behind
//! the `web` cargo feature; a default build is plain Rust so the pure
//! pieces stay testable on the host.

pub mod config;
pub mod net;

#[cfg(feature = "web")]
pub mod app;
