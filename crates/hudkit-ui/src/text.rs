use hudkit_engine::coords::Vec2;
use hudkit_engine::paint::Color;
use hudkit_engine::scene::DrawSurface;

// Unit offsets of the outline ring, scaled by the ring index.
const OUTLINE_DIRECTIONS: [(f32, f32); 8] = [
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
];

/// Text with an outline `thickness` pixels wide.
///
/// Each ring `1..=thickness` draws the text at the 8 compass offsets in
/// `outline_color`; the foreground pass goes last so it is always on top.
/// A non-positive thickness draws the foreground only.
pub fn draw_outlined_text(
    surface: &mut dyn DrawSurface,
    text: &str,
    pos: Vec2,
    color: Color,
    outline_color: Color,
    thickness: i32,
) {
    for ring in 1..=thickness {
        let d = ring as f32;
        for (dx, dy) in OUTLINE_DIRECTIONS {
            surface.draw_text(pos + Vec2::new(dx * d, dy * d), outline_color, text);
        }
    }

    surface.draw_text(pos, color, text);
}

/// Text with a drop shadow down and to the right.
///
/// The shadow is drawn `thickness` times, starting `offset` pixels away and
/// stepping one pixel further each time.
pub fn draw_shadow_text(
    surface: &mut dyn DrawSurface,
    text: &str,
    pos: Vec2,
    color: Color,
    shadow_color: Color,
    offset: i32,
    thickness: i32,
) {
    for i in 0..thickness {
        let d = (i + offset) as f32;
        surface.draw_text(pos + Vec2::splat(d), shadow_color, text);
    }

    surface.draw_text(pos, color, text);
}
