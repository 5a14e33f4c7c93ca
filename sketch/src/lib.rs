//! Canvas engine for the meadow visualization.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! everything between a validated [`capture::Frame`] and pixels: remapping
//! detector coordinates into canvas space, generating Maurer-rose outlines,
//! building the per-frame display list, gating the poll timer, and painting
//! the scene. The host (the `viewer` crate) is responsible only for fetching
//! captures and driving [`engine::Engine::render`] from the browser's
//! animation callback.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`mapper`] | Source-space to canvas-space coordinate remapping |
//! | [`rose`] | Maurer-rose polygon generator |
//! | [`scene`] | Display-list builder (stems, roses, node markers) |
//! | [`render`] | Scene painting against the 2D context |
//! | [`consts`] | Shared constants (poll interval, palette, marker sizes) |

pub mod consts;
pub mod engine;
pub mod mapper;
pub mod render;
pub mod rose;
pub mod scene;
