//! Coordinate and geometry types shared by the draw stream and the helpers.
//!
//! Canonical CPU space:
//! - Logical pixels (overlay space, same as the host's screen space)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
