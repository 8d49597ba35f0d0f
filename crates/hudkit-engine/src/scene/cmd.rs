use crate::coords::{Rect, Vec2};
use crate::paint::{Color, CornerColors};

/// Opaque native texture handle, as handed out by the host's texture provider.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub u64);

/// Renderer-agnostic draw command.
///
/// One variant per primitive on [`DrawSurface`](super::DrawSurface); a
/// backend replays them in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled rectangle with bilinear per-corner colors.
    RectMultiColor { rect: Rect, colors: CornerColors },
    /// One pixel rectangle outline.
    RectStroke { rect: Rect, color: Color },
    Image {
        texture: TextureId,
        rect: Rect,
        uv0: Vec2,
        uv1: Vec2,
        tint: Color,
    },
    Text { pos: Vec2, color: Color, text: String },
    Triangle { points: [Vec2; 3], color: Color },
}
