use crate::coords::{Rect, Vec2};
use crate::paint::{Color, CornerColors};

use super::{DrawCmd, DrawSurface, TextureId};

/// A single draw item: command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// Items are kept in insertion order, which is paint order: later items draw
/// on top. `DrawList` implements [`DrawSurface`], so every helper can record
/// into it directly and a backend (or a test) replays `items()`.
///
/// # Clipping
///
/// [`push_clip`](DrawSurface::push_clip) / [`pop_clip`](DrawSurface::pop_clip)
/// scope commands to a scissor rect. Clips are intersected with the current
/// parent, so a cooldown clip inside a clipped sub-window stays inside both.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,

    /// Stack of active scissor rects (logical pixels).
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.clip_stack.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current effective clip, if any.
    #[inline]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Number of unbalanced `push_clip` calls.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Records a command; it inherits the current clip rect.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem { cmd, clip_rect: self.current_clip() });
    }
}

impl DrawSurface for DrawList {
    fn fill_rect_multicolor(&mut self, min: Vec2, max: Vec2, colors: CornerColors) {
        self.push(DrawCmd::RectMultiColor { rect: Rect::from_min_max(min, max), colors });
    }

    fn stroke_rect(&mut self, min: Vec2, max: Vec2, color: Color) {
        self.push(DrawCmd::RectStroke { rect: Rect::from_min_max(min, max), color });
    }

    fn draw_image(&mut self, texture: TextureId, min: Vec2, max: Vec2, uv0: Vec2, uv1: Vec2, tint: Color) {
        self.push(DrawCmd::Image { texture, rect: Rect::from_min_max(min, max), uv0, uv1, tint });
    }

    fn draw_text(&mut self, pos: Vec2, color: Color, text: &str) {
        self.push(DrawCmd::Text { pos, color, text: text.to_owned() });
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.push(DrawCmd::Triangle { points: [a, b, c], color });
    }

    fn push_clip(&mut self, min: Vec2, max: Vec2) {
        let rect = Rect::from_min_max(min, max);
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap with the parent: a zero-area clip makes the backend skip the items.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_inherit_current_clip() {
        let mut list = DrawList::new();
        list.draw_text(Vec2::zero(), Color::WHITE, "a");
        list.push_clip(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        list.draw_text(Vec2::zero(), Color::WHITE, "b");
        list.pop_clip();

        assert_eq!(list.items()[0].clip_rect, None);
        assert_eq!(list.items()[1].clip_rect, Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(list.clip_depth(), 0);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        list.push_clip(Vec2::new(5.0, 5.0), Vec2::new(20.0, 20.0));
        assert_eq!(list.current_clip(), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn disjoint_nested_clip_is_empty() {
        let mut list = DrawList::new();
        list.push_clip(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        list.push_clip(Vec2::new(50.0, 50.0), Vec2::new(60.0, 60.0));
        assert!(list.current_clip().unwrap().is_empty());
    }

    #[test]
    fn clear_resets_items_and_clips() {
        let mut list = DrawList::new();
        list.push_clip(Vec2::zero(), Vec2::one());
        list.fill_triangle(Vec2::zero(), Vec2::one(), Vec2::new(1.0, 0.0), Color::BLACK);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.current_clip(), None);
    }
}
