use std::f32::consts::TAU;

use hudkit_engine::coords::Vec2;
use hudkit_engine::paint::Color;
use hudkit_engine::scene::DrawSurface;

/// Fraction of the cooldown that has passed, clamped to [0, 1].
///
/// A non-positive or non-finite `total` counts as "no cooldown" (0).
pub fn cooldown_completion(elapsed: f32, total: f32) -> f32 {
    if !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    let completion = elapsed / total;
    if completion.is_nan() { 0.0 } else { completion.clamp(0.0, 1.0) }
}

/// Number of quadrant wedges the mask needs: `ceil(completion * 4)`, 0..=4.
#[inline]
pub fn cooldown_segments(completion: f32) -> usize {
    (completion.clamp(0.0, 1.0) * 4.0).ceil() as usize
}

/// Triangles of the radial cooldown mask over the icon at `position` / `size`.
///
/// Wedges fan from the icon center through the cardinal points (top, left,
/// bottom, right) placed a full `size` away, so each full wedge covers one
/// quadrant of the icon once clipped to it. The last wedge ends on the
/// sweep point at angle `2π(1 - completion)` measured clockwise from 12
/// o'clock. The triangles overshoot the icon; callers must clip.
pub fn cooldown_wedges(position: Vec2, size: Vec2, elapsed: f32, total: f32) -> Vec<[Vec2; 3]> {
    let completion = cooldown_completion(elapsed, total);
    let segments = cooldown_segments(completion);
    if segments == 0 {
        return Vec::new();
    }

    let center = position + size / 2.0;
    let vertices = [
        Vec2::new(center.x, center.y - size.y), // top
        Vec2::new(center.x - size.x, center.y), // left
        Vec2::new(center.x, center.y + size.y), // bottom
        Vec2::new(center.x + size.x, center.y), // right
    ];

    let angle = TAU * (1.0 - completion);
    let sweep = center + Vec2::new(angle.sin(), -angle.cos()) * size;

    (0..segments)
        .map(|i| {
            let start = vertices[i % 4];
            let end = if i == segments - 1 { sweep } else { vertices[(i + 1) % 4] };
            [center, end, start]
        })
        .collect()
}

/// Darkens the icon at `position` / `size` with a radial mask for the cooldown.
///
/// Nothing is drawn when the cooldown has not started (or `total` is not positive).
pub fn draw_icon_cooldown(
    surface: &mut dyn DrawSurface,
    position: Vec2,
    size: Vec2,
    elapsed: f32,
    total: f32,
    color: Color,
) {
    let wedges = cooldown_wedges(position, size, elapsed, total);
    if wedges.is_empty() {
        return;
    }

    surface.push_clip(position, position + size);
    for [a, b, c] in wedges {
        surface.fill_triangle(a, b, c, color);
    }
    surface.pop_clip();
}
