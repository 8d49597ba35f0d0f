use hudkit_engine::coords::Vec2;
use hudkit_engine::paint::{GradientDirection, PaletteColor};
use hudkit_engine::scene::DrawSurface;

use crate::config::DrawConfig;
use crate::texture::TextureProvider;

/// How a bar texture is mapped onto a bar larger or smaller than the texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BarTextureDrawMode {
    #[default]
    Stretch,
    /// Tile along X, stretch along Y.
    RepeatHorizontal,
    /// Tile along Y, stretch along X.
    RepeatVertical,
    /// Tile along both axes.
    Repeat,
}

/// Fills `position..position + size` with the palette's gradient for `direction`.
///
/// `CenteredHorizontal` draws two half-height fills; the lower one uses the
/// mirrored corner order so the gradient reflects at the midline.
pub fn draw_gradient_filled_rect(
    surface: &mut dyn DrawSurface,
    position: Vec2,
    size: Vec2,
    color: &PaletteColor,
    direction: GradientDirection,
) {
    let colors = color.corner_colors(direction);

    if direction == GradientDirection::CenteredHorizontal {
        let half = Vec2::new(size.x, size.y / 2.0);
        surface.fill_rect_multicolor(position, position + half, colors);

        let lower = position + Vec2::new(0.0, half.y);
        surface.fill_rect_multicolor(lower, lower + half, colors.mirrored());
    } else {
        surface.fill_rect_multicolor(position, position + size, colors);
    }
}

/// [`draw_gradient_filled_rect`] with the configured direction.
pub fn draw_gradient_filled_rect_default(
    surface: &mut dyn DrawSurface,
    config: &DrawConfig,
    position: Vec2,
    size: Vec2,
    color: &PaletteColor,
) {
    draw_gradient_filled_rect(surface, position, size, color, config.gradient_direction);
}

/// Lower-right UV for a bar texture; the upper-left is always `(0, 0)`.
///
/// Repeating modes sample past 1.0 and rely on the backend's wrap sampler.
/// Returns `None` for a texture with a zero dimension.
pub fn bar_texture_uv1(size: Vec2, texture_width: u32, texture_height: u32, mode: BarTextureDrawMode) -> Option<Vec2> {
    if texture_width == 0 || texture_height == 0 {
        return None;
    }
    if mode == BarTextureDrawMode::Stretch {
        return Some(Vec2::one());
    }

    let x = if mode == BarTextureDrawMode::RepeatVertical { 1.0 } else { size.x / texture_width as f32 };
    let y = if mode == BarTextureDrawMode::RepeatHorizontal { 1.0 } else { size.y / texture_height as f32 };
    Some(Vec2::new(x, y))
}

/// Draws a textured bar tinted with the palette's base color.
///
/// A missing (or zero-sized) texture falls back to a gradient fill in `direction`.
#[allow(clippy::too_many_arguments)]
pub fn draw_bar_texture(
    surface: &mut dyn DrawSurface,
    textures: &dyn TextureProvider,
    position: Vec2,
    size: Vec2,
    color: &PaletteColor,
    name: Option<&str>,
    mode: BarTextureDrawMode,
    direction: GradientDirection,
) {
    let texture = name.and_then(|n| textures.bar_texture(n));
    let mapped = texture.and_then(|t| bar_texture_uv1(size, t.width, t.height, mode).map(|uv1| (t, uv1)));

    let Some((texture, uv1)) = mapped else {
        log::trace!("bar texture {name:?} unavailable, using gradient fill");
        draw_gradient_filled_rect(surface, position, size, color, direction);
        return;
    };

    surface.draw_image(texture.handle, position, position + size, Vec2::zero(), uv1, color.base);
}
