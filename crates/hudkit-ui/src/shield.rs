use hudkit_engine::coords::{Rect, Vec2};
use hudkit_engine::paint::{GradientDirection, PaletteColor};
use hudkit_engine::scene::DrawSurface;

use crate::bar::draw_gradient_filled_rect;

/// Height of the overshield strip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShieldHeight {
    /// Literal height in logical pixels.
    Pixels(f32),
    /// Percentage of the bar height (0–100).
    Percent(f32),
}

impl ShieldHeight {
    /// Converts the configured `height` value using the `use_ratio_for_height` toggle.
    #[inline]
    pub fn from_config(height: f32, use_ratio_for_height: bool) -> Self {
        if use_ratio_for_height { ShieldHeight::Percent(height) } else { ShieldHeight::Pixels(height) }
    }

    #[inline]
    fn resolve(self, bar_height: f32) -> f32 {
        match self {
            ShieldHeight::Pixels(h) => h,
            ShieldHeight::Percent(p) => bar_height / 100.0 * p,
        }
    }
}

/// Screen rects for a shield drawn over a health bar.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShieldLayout {
    /// Shield filling the missing-health part of the bar, full bar height.
    pub missing_hp: Option<Rect>,
    /// Shield left over once the bar is full, drawn over the top of the bar.
    pub overshield: Option<Rect>,
}

impl ShieldLayout {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.missing_hp.is_none() && self.overshield.is_none()
    }

    /// Present rects in draw order.
    pub fn rects(&self) -> impl Iterator<Item = Rect> {
        self.missing_hp.into_iter().chain(self.overshield)
    }
}

/// Overshield strip for `shield` (ratio of bar width) at `cursor`; `None` when there is no shield.
pub fn overshield_rect(shield: f32, cursor: Vec2, bar_size: Vec2, height: ShieldHeight) -> Option<Rect> {
    if shield <= 0.0 {
        return None;
    }
    let size = Vec2::new((bar_size.x * shield).max(1.0), height.resolve(bar_size.y));
    Some(Rect::from_origin_size(cursor, size))
}

/// Lays out `shield` over a bar at `cursor` whose health fill is `hp` (both ratios of bar width).
///
/// On full health everything is overshield. Otherwise the shield first covers
/// the missing health right of the fill; whatever remains becomes overshield,
/// with percentage heights capped at 100%.
pub fn shield_layout(shield: f32, hp: f32, cursor: Vec2, bar_size: Vec2, height: ShieldHeight) -> ShieldLayout {
    if shield <= 0.0 {
        return ShieldLayout::default();
    }

    if hp >= 1.0 {
        return ShieldLayout { missing_hp: None, overshield: overshield_rect(shield, cursor, bar_size, height) };
    }

    let gap = shield.min(1.0 - hp);
    let start = cursor + Vec2::new((bar_size.x * hp).max(1.0), 0.0);
    let missing_hp = Rect::from_origin_size(start, Vec2::new((bar_size.x * gap).max(1.0), bar_size.y));

    let capped = match height {
        ShieldHeight::Percent(p) => ShieldHeight::Percent(p.min(100.0)),
        px => px,
    };

    ShieldLayout {
        missing_hp: Some(missing_hp),
        overshield: overshield_rect(shield - gap, cursor, bar_size, capped),
    }
}

/// Draws the overshield strip alone.
pub fn draw_overshield(
    surface: &mut dyn DrawSurface,
    shield: f32,
    cursor: Vec2,
    bar_size: Vec2,
    height: ShieldHeight,
    color: &PaletteColor,
    direction: GradientDirection,
) {
    if let Some(rect) = overshield_rect(shield, cursor, bar_size, height) {
        draw_gradient_filled_rect(surface, rect.origin, rect.size, color, direction);
    }
}

/// Draws the shield over a health bar; see [`shield_layout`].
#[allow(clippy::too_many_arguments)]
pub fn draw_shield(
    surface: &mut dyn DrawSurface,
    shield: f32,
    hp: f32,
    cursor: Vec2,
    bar_size: Vec2,
    height: ShieldHeight,
    color: &PaletteColor,
    direction: GradientDirection,
) {
    for rect in shield_layout(shield, hp, cursor, bar_size, height).rects() {
        draw_gradient_filled_rect(surface, rect.origin, rect.size, color, direction);
    }
}
