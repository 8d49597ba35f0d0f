//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - define the [`DrawSurface`] primitive set the helpers draw through
//! - record renderer-agnostic commands in paint order ([`DrawList`])
//! - track the scissor stack for recorded items

mod cmd;
mod list;
mod surface;

pub use cmd::{DrawCmd, TextureId};
pub use list::{DrawItem, DrawList};
pub use surface::DrawSurface;
