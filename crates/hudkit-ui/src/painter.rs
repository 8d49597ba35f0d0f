use hudkit_engine::coords::Vec2;
use hudkit_engine::paint::{Color, PaletteColor};
use hudkit_engine::scene::DrawSurface;

use crate::bar::{self, BarTextureDrawMode};
use crate::config::DrawConfig;
use crate::cooldown;
use crate::icon::{self, IconSource};
use crate::shield::{self, ShieldHeight};
use crate::text;
use crate::texture::TextureProvider;

/// Drawing context for one element in one frame.
///
/// Bundles the surface with the injected [`DrawConfig`] and
/// [`TextureProvider`] so element code can call the helpers without
/// threading the same three arguments through every call. Holds no state of
/// its own; build one per draw callback.
pub struct Painter<'a> {
    surface: &'a mut dyn DrawSurface,
    config: &'a DrawConfig,
    textures: &'a dyn TextureProvider,
}

impl<'a> Painter<'a> {
    pub fn new(surface: &'a mut dyn DrawSurface, config: &'a DrawConfig, textures: &'a dyn TextureProvider) -> Self {
        Self { surface, config, textures }
    }

    #[inline]
    pub fn config(&self) -> &DrawConfig {
        self.config
    }

    /// Escape hatch for primitives the helpers do not cover.
    #[inline]
    pub fn surface(&mut self) -> &mut dyn DrawSurface {
        &mut *self.surface
    }

    // ── bars ──────────────────────────────────────────────────────────────

    /// Gradient fill in the configured direction.
    pub fn gradient_rect(&mut self, position: Vec2, size: Vec2, color: &PaletteColor) {
        bar::draw_gradient_filled_rect_default(&mut *self.surface, self.config, position, size, color);
    }

    /// Textured bar, falling back to [`gradient_rect`](Self::gradient_rect).
    pub fn bar_texture(&mut self, position: Vec2, size: Vec2, color: &PaletteColor, name: Option<&str>, mode: BarTextureDrawMode) {
        bar::draw_bar_texture(
            &mut *self.surface,
            self.textures,
            position,
            size,
            color,
            name,
            mode,
            self.config.gradient_direction,
        );
    }

    /// Shield over a health bar at `cursor`.
    pub fn shield(&mut self, shield: f32, hp: f32, cursor: Vec2, bar_size: Vec2, height: ShieldHeight, color: &PaletteColor) {
        shield::draw_shield(&mut *self.surface, shield, hp, cursor, bar_size, height, color, self.config.gradient_direction);
    }

    pub fn overshield(&mut self, shield: f32, cursor: Vec2, bar_size: Vec2, height: ShieldHeight, color: &PaletteColor) {
        shield::draw_overshield(&mut *self.surface, shield, cursor, bar_size, height, color, self.config.gradient_direction);
    }

    // ── icons ─────────────────────────────────────────────────────────────

    pub fn icon(&mut self, source: IconSource, position: Vec2, size: Vec2, draw_border: bool, crop_icon: bool) {
        let border = draw_border.then_some(self.config.border_color);
        icon::draw_icon(&mut *self.surface, self.textures, source, position, size, border, crop_icon);
    }

    /// Full icon texture faded to `alpha`.
    pub fn icon_faded(&mut self, icon_id: u32, position: Vec2, size: Vec2, draw_border: bool, alpha: f32) {
        let border = draw_border.then_some(self.config.border_color);
        icon::draw_icon_tinted(&mut *self.surface, self.textures, icon_id, position, size, border, icon::icon_alpha_tint(alpha));
    }

    pub fn icon_cooldown(&mut self, position: Vec2, size: Vec2, elapsed: f32, total: f32) {
        cooldown::draw_icon_cooldown(&mut *self.surface, position, size, elapsed, total, self.config.cooldown_color);
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Configured text color with the configured outline.
    pub fn outlined_text(&mut self, text: &str, pos: Vec2) {
        let c = self.config;
        text::draw_outlined_text(&mut *self.surface, text, pos, c.text_color, c.outline_color, c.outline_thickness);
    }

    pub fn outlined_text_colored(&mut self, text: &str, pos: Vec2, color: Color, outline_color: Color, thickness: i32) {
        text::draw_outlined_text(&mut *self.surface, text, pos, color, outline_color, thickness);
    }

    /// Configured text color with the configured shadow.
    pub fn shadow_text(&mut self, text: &str, pos: Vec2) {
        let c = self.config;
        text::draw_shadow_text(&mut *self.surface, text, pos, c.text_color, c.shadow_color, c.shadow_offset, c.shadow_thickness);
    }
}
