//! hudkit UI: stateless drawing helpers for game overlays.
//!
//! Every helper is a plain function over a [`DrawSurface`] plus the values it
//! needs; nothing is retained between frames. Host services (textures, the
//! host-window clip registry, windowing, input proxying) are traits the
//! caller implements and passes in.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hudkit_ui::prelude::*;
//!
//! let config = DrawConfig::default();
//! let hp = PaletteColor::from_base(Color::from_hex("#3cb44bff")?);
//! let shield = PaletteColor::from_base(Color::from_hex("#ffe119ff")?);
//!
//! // In the frame callback:
//! draw_in_window_default(host, clips, input, "player_hp", pos, size, |surface| {
//!     let mut p = Painter::new(surface, &config, textures);
//!     p.bar_texture(pos, Vec2::new(size.x * hp_ratio, size.y), &hp, Some("smooth"), BarTextureDrawMode::Stretch);
//!     p.shield(shield_ratio, hp_ratio, pos, size, ShieldHeight::Percent(25.0), &shield);
//!     p.outlined_text("12345", pos + Vec2::new(4.0, 2.0));
//! });
//! ```
//!
//! [`DrawSurface`]: hudkit_engine::scene::DrawSurface

pub mod bar;
pub mod clip;
pub mod config;
pub mod cooldown;
pub mod icon;
pub mod painter;
pub mod shield;
pub mod text;
pub mod texture;
pub mod window;

#[cfg(test)]
mod testing;

pub use config::DrawConfig;
pub use painter::Painter;

/// Everything an overlay element needs. Import this in element code.
pub mod prelude {
    pub use crate::bar::{BarTextureDrawMode, bar_texture_uv1, draw_bar_texture, draw_gradient_filled_rect, draw_gradient_filled_rect_default};
    pub use crate::clip::{ClipRects, ClipRegistry, WindowClippingMode, invert_clip_rect};
    pub use crate::config::DrawConfig;
    pub use crate::cooldown::{cooldown_completion, cooldown_wedges, draw_icon_cooldown};
    pub use crate::icon::{IconSource, draw_icon, draw_icon_tinted, icon_alpha_tint, tex_coordinates};
    pub use crate::painter::Painter;
    pub use crate::shield::{ShieldHeight, ShieldLayout, draw_overshield, draw_shield, shield_layout};
    pub use crate::text::{draw_outlined_text, draw_shadow_text};
    pub use crate::texture::{NoTextures, Texture, TextureProvider};
    pub use crate::window::{InputProxy, WindowDraw, WindowFlags, WindowHost, draw_in_window, draw_in_window_default};

    // Re-export the engine primitives everyone needs.
    pub use hudkit_engine::coords::{Rect, Vec2};
    pub use hudkit_engine::paint::{Color, CornerColors, GradientDirection, PaletteColor};
    pub use hudkit_engine::scene::{DrawList, DrawSurface, TextureId};
}
