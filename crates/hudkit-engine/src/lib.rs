//! hudkit engine crate.
//!
//! Owns the renderer-agnostic pieces the drawing helpers are built on:
//! geometry, packed colors, gradient palettes and the recorded draw stream.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
