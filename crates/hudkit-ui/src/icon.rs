use hudkit_engine::coords::Vec2;
use hudkit_engine::paint::Color;
use hudkit_engine::scene::DrawSurface;

use crate::texture::{Texture, TextureProvider};

// Status icons are 24x32 with a frame baked in; cropping shows roughly
// (4,14)..(20,20) of it. Tied to that asset layout, not a general rule.
const CROP_LEFT: f32 = 4.0;
const CROP_TOP: f32 = 14.0;
const CROP_RIGHT: f32 = 4.0;
const CROP_BOTTOM: f32 = 12.0;

// Uncropped icons still drop one pixel per edge to avoid sampling the neighbour in the atlas.
const EDGE_INSET: f32 = 1.0;

/// Where an icon comes from. Each kind has its own lookup on [`TextureProvider`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IconSource {
    Action(u32),
    /// Status effect; icons with stacks have one texture per stack count.
    Status { id: u32, stack_count: u32 },
    Item(u32),
    /// Plain icon id.
    Icon(u32),
}

impl IconSource {
    #[inline]
    pub const fn status(id: u32) -> Self {
        IconSource::Status { id, stack_count: 1 }
    }

    pub fn resolve(self, textures: &dyn TextureProvider) -> Option<Texture> {
        match self {
            IconSource::Action(id) => textures.action_icon(id),
            IconSource::Status { id, stack_count } => textures.status_icon(id, stack_count.saturating_sub(1)),
            IconSource::Item(id) => textures.item_icon(id),
            IconSource::Icon(id) => textures.icon(id),
        }
    }
}

/// UV corners for an icon texture of `width` x `height` pixels.
///
/// With `crop_icon` the baked-in frame is cut away; otherwise a one-pixel
/// inset keeps filtering from bleeding in neighbouring texels. A texture with
/// a zero dimension yields a zero UV pair.
pub fn tex_coordinates(width: u32, height: u32, crop_icon: bool) -> (Vec2, Vec2) {
    if width == 0 || height == 0 {
        return (Vec2::zero(), Vec2::zero());
    }

    let (w, h) = (width as f32, height as f32);
    let (left, top, right, bottom) = if crop_icon {
        (CROP_LEFT, CROP_TOP, CROP_RIGHT, CROP_BOTTOM)
    } else {
        (EDGE_INSET, EDGE_INSET, EDGE_INSET, EDGE_INSET)
    };

    let uv0 = Vec2::new(left / w, top / h);
    let uv1 = Vec2::new(1.0 - right / w, 1.0 - bottom / h);
    (uv0, uv1)
}

/// White tint with `alpha` in [0, 1] (clamped).
#[inline]
pub fn icon_alpha_tint(alpha: f32) -> Color {
    Color::WHITE.with_alpha((alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Draws the icon for `source` at `position`, skipping silently if it is not loaded.
pub fn draw_icon(
    surface: &mut dyn DrawSurface,
    textures: &dyn TextureProvider,
    source: IconSource,
    position: Vec2,
    size: Vec2,
    border: Option<Color>,
    crop_icon: bool,
) {
    let Some(texture) = source.resolve(textures) else {
        log::trace!("icon {source:?} not loaded");
        return;
    };

    let (uv0, uv1) = tex_coordinates(texture.width, texture.height, crop_icon);
    surface.draw_image(texture.handle, position, position + size, uv0, uv1, Color::WHITE);

    if let Some(border) = border {
        surface.stroke_rect(position, position + size, border);
    }
}

/// Draws the full icon texture for `icon_id` modulated by `tint`.
pub fn draw_icon_tinted(
    surface: &mut dyn DrawSurface,
    textures: &dyn TextureProvider,
    icon_id: u32,
    position: Vec2,
    size: Vec2,
    border: Option<Color>,
    tint: Color,
) {
    let Some(texture) = textures.icon(icon_id) else {
        log::trace!("icon {icon_id} not loaded");
        return;
    };

    surface.draw_image(texture.handle, position, position + size, Vec2::zero(), Vec2::one(), tint);

    if let Some(border) = border {
        surface.stroke_rect(position, position + size, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTextures;
    use hudkit_engine::coords::Rect;
    use hudkit_engine::scene::{DrawCmd, DrawList, TextureId};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn uncropped_insets_one_pixel() {
        let (uv0, uv1) = tex_coordinates(24, 32, false);
        assert!(approx(uv0, Vec2::new(1.0 / 24.0, 1.0 / 32.0)));
        assert!(approx(uv1, Vec2::new(1.0 - 1.0 / 24.0, 1.0 - 1.0 / 32.0)));
    }

    #[test]
    fn cropped_uses_asset_margins() {
        let (uv0, uv1) = tex_coordinates(24, 32, true);
        assert!(approx(uv0, Vec2::new(4.0 / 24.0, 14.0 / 32.0)));
        assert!(approx(uv1, Vec2::new(1.0 - 4.0 / 24.0, 1.0 - 12.0 / 32.0)));
    }

    #[test]
    fn zero_dimension_yields_zero_uvs() {
        assert_eq!(tex_coordinates(0, 32, true), (Vec2::zero(), Vec2::zero()));
        assert_eq!(tex_coordinates(24, 0, false), (Vec2::zero(), Vec2::zero()));
    }

    #[test]
    fn alpha_tint_is_white_with_alpha() {
        assert_eq!(icon_alpha_tint(1.0), Color::WHITE);
        assert_eq!(icon_alpha_tint(0.0), Color(0x00FF_FFFF));
        assert_eq!(icon_alpha_tint(0.5).a(), 127);
    }

    #[test]
    fn status_lookup_uses_zero_based_stack() {
        let mut textures = FakeTextures::default();
        textures.statuses.insert((50, 2), Texture::new(TextureId(3), 24, 32));

        let found = IconSource::Status { id: 50, stack_count: 3 }.resolve(&textures);
        assert_eq!(found.map(|t| t.handle), Some(TextureId(3)));

        // Zero stacks clamps to the first texture rather than underflowing.
        textures.statuses.insert((50, 0), Texture::new(TextureId(4), 24, 32));
        let first = IconSource::Status { id: 50, stack_count: 0 }.resolve(&textures);
        assert_eq!(first.map(|t| t.handle), Some(TextureId(4)));
    }

    #[test]
    fn each_source_kind_routes_to_its_lookup() {
        let mut textures = FakeTextures::default();
        textures.actions.insert(1, Texture::new(TextureId(10), 40, 40));
        textures.items.insert(1, Texture::new(TextureId(11), 40, 40));
        textures.icons.insert(1, Texture::new(TextureId(12), 40, 40));

        assert_eq!(IconSource::Action(1).resolve(&textures).unwrap().handle, TextureId(10));
        assert_eq!(IconSource::Item(1).resolve(&textures).unwrap().handle, TextureId(11));
        assert_eq!(IconSource::Icon(1).resolve(&textures).unwrap().handle, TextureId(12));
        assert!(IconSource::Action(2).resolve(&textures).is_none());
    }

    #[test]
    fn draw_icon_with_border() {
        let mut textures = FakeTextures::default();
        textures.actions.insert(9, Texture::new(TextureId(1), 40, 40));

        let mut list = DrawList::new();
        draw_icon(&mut list, &textures, IconSource::Action(9), Vec2::new(5.0, 5.0), Vec2::new(40.0, 40.0), Some(Color::BLACK), false);

        assert_eq!(list.len(), 2);
        let DrawCmd::Image { rect, tint, .. } = &list.items()[0].cmd else { panic!("expected image") };
        assert_eq!(*rect, Rect::new(5.0, 5.0, 40.0, 40.0));
        assert_eq!(*tint, Color::WHITE);
        assert_eq!(list.items()[1].cmd, DrawCmd::RectStroke { rect: Rect::new(5.0, 5.0, 40.0, 40.0), color: Color::BLACK });
    }

    #[test]
    fn missing_icon_draws_nothing() {
        let mut list = DrawList::new();
        draw_icon(&mut list, &FakeTextures::default(), IconSource::Item(1), Vec2::zero(), Vec2::one(), Some(Color::BLACK), true);
        draw_icon_tinted(&mut list, &FakeTextures::default(), 1, Vec2::zero(), Vec2::one(), None, Color::WHITE);
        assert!(list.is_empty());
    }

    #[test]
    fn tinted_icon_uses_full_uv() {
        let mut textures = FakeTextures::default();
        textures.icons.insert(77, Texture::new(TextureId(2), 32, 32));

        let mut list = DrawList::new();
        draw_icon_tinted(&mut list, &textures, 77, Vec2::zero(), Vec2::splat(32.0), None, icon_alpha_tint(0.5));

        let DrawCmd::Image { uv0, uv1, tint, .. } = &list.items()[0].cmd else { panic!() };
        assert_eq!((*uv0, *uv1), (Vec2::zero(), Vec2::one()));
        assert_eq!(tint.a(), 127);
    }
}
