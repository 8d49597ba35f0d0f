use hudkit_engine::coords::Vec2;
use hudkit_engine::scene::TextureId;

/// A texture the host has already loaded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Texture {
    pub handle: TextureId,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

impl Texture {
    #[inline]
    pub const fn new(handle: TextureId, width: u32, height: u32) -> Self {
        Self { handle, width, height }
    }

    /// `false` when either dimension is zero; UV math divides by both.
    #[inline]
    pub const fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Texture lookup, implemented by the host.
///
/// Loading and caching are the host's business; every method is a cheap
/// per-frame query and `None` means "not available this frame".
pub trait TextureProvider {
    fn action_icon(&self, action_id: u32) -> Option<Texture>;

    /// `stack_index` is zero-based: a status with 3 stacks asks for index 2.
    fn status_icon(&self, status_id: u32, stack_index: u32) -> Option<Texture>;

    fn item_icon(&self, item_id: u32) -> Option<Texture>;

    /// Raw icon lookup by icon id.
    fn icon(&self, icon_id: u32) -> Option<Texture>;

    /// Named bar fill texture.
    fn bar_texture(&self, name: &str) -> Option<Texture>;
}

/// Provider that never has anything; every textured draw degrades to its fallback.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoTextures;

impl TextureProvider for NoTextures {
    fn action_icon(&self, _action_id: u32) -> Option<Texture> { None }
    fn status_icon(&self, _status_id: u32, _stack_index: u32) -> Option<Texture> { None }
    fn item_icon(&self, _item_id: u32) -> Option<Texture> { None }
    fn icon(&self, _icon_id: u32) -> Option<Texture> { None }
    fn bar_texture(&self, _name: &str) -> Option<Texture> { None }
}
