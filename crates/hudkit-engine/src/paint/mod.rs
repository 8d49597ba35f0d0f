//! Paint model shared between the draw stream and the helpers.
//!
//! Scope:
//! - packed 32-bit colors
//! - configured palettes (base + gradient endpoints)
//! - per-corner color assignment for multi-color fills
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod corner_colors;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use corner_colors::CornerColors;
pub use gradient::{GradientDirection, PaletteColor};
