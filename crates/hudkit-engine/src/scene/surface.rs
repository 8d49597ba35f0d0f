use crate::coords::Vec2;
use crate::paint::{Color, CornerColors};

use super::TextureId;

/// Immediate-mode drawing surface: a per-frame command sink.
///
/// Mirrors the primitive set of immediate-mode GUI draw lists. Hosts
/// implement it over their native command list; [`DrawList`](super::DrawList)
/// implements it by recording. All coordinates are logical pixels.
///
/// A surface is used by a single writer per frame; helpers take `&mut`.
pub trait DrawSurface {
    /// Filled rectangle `min..max` with per-corner colors.
    fn fill_rect_multicolor(&mut self, min: Vec2, max: Vec2, colors: CornerColors);

    /// Rectangle outline `min..max`.
    fn stroke_rect(&mut self, min: Vec2, max: Vec2, color: Color);

    /// Textured quad `min..max` sampling `uv0..uv1`, modulated by `tint`.
    fn draw_image(&mut self, texture: TextureId, min: Vec2, max: Vec2, uv0: Vec2, uv1: Vec2, tint: Color);

    /// Text with its top-left at `pos`.
    fn draw_text(&mut self, pos: Vec2, color: Color, text: &str);

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);

    /// Begins a scissor region. Calls must be balanced with [`pop_clip`](Self::pop_clip).
    fn push_clip(&mut self, min: Vec2, max: Vec2);

    fn pop_clip(&mut self);
}
