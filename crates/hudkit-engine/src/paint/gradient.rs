use super::{Color, CornerColors};

/// Which corners of a filled rectangle receive the top and bottom gradient colors.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientDirection {
    /// Flat fill with the base color.
    None,
    Right,
    Left,
    Up,
    #[default]
    Down,
    /// Vertical gradient mirrored at the horizontal midline.
    CenteredHorizontal,
}

/// Configured color triple: a base color plus the two gradient endpoints.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PaletteColor {
    pub base: Color,
    pub top_gradient: Color,
    pub bottom_gradient: Color,
}

impl PaletteColor {
    /// Brightness step used when deriving gradient endpoints from a base color.
    pub const GRADIENT_STEP: f32 = 0.1;

    #[inline]
    pub const fn new(base: Color, top_gradient: Color, bottom_gradient: Color) -> Self {
        Self { base, top_gradient, bottom_gradient }
    }

    /// Derives the gradient endpoints from `base`: a lighter top and a darker bottom.
    pub fn from_base(base: Color) -> Self {
        Self {
            base,
            top_gradient: base.offset_rgb(Self::GRADIENT_STEP),
            bottom_gradient: base.offset_rgb(-Self::GRADIENT_STEP),
        }
    }

    /// Flat palette; every direction yields the same corners.
    #[inline]
    pub const fn solid(c: Color) -> Self {
        Self { base: c, top_gradient: c, bottom_gradient: c }
    }

    /// Maps the triple onto rectangle corners for `direction`.
    pub fn corner_colors(&self, direction: GradientDirection) -> CornerColors {
        let (top, bottom) = (self.top_gradient, self.bottom_gradient);
        match direction {
            GradientDirection::None => CornerColors::all(self.base),
            GradientDirection::Right => CornerColors::new(top, bottom, bottom, top),
            GradientDirection::Left => CornerColors::new(bottom, top, top, bottom),
            GradientDirection::Up => CornerColors::new(bottom, bottom, top, top),
            GradientDirection::Down | GradientDirection::CenteredHorizontal => {
                CornerColors::new(top, top, bottom, bottom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Color = Color(0xFF00_00AA);
    const TOP: Color = Color(0xFF00_00BB);
    const BOTTOM: Color = Color(0xFF00_00CC);

    fn palette() -> PaletteColor {
        PaletteColor::new(BASE, TOP, BOTTOM)
    }

    #[test]
    fn none_is_all_base() {
        let c = palette().corner_colors(GradientDirection::None);
        assert!(c.is_uniform());
        assert_eq!(c.top_left, BASE);
    }

    #[test]
    fn direction_table() {
        let p = palette();
        let cases = [
            (GradientDirection::Right, [TOP, BOTTOM, BOTTOM, TOP]),
            (GradientDirection::Left, [BOTTOM, TOP, TOP, BOTTOM]),
            (GradientDirection::Up, [BOTTOM, BOTTOM, TOP, TOP]),
            (GradientDirection::Down, [TOP, TOP, BOTTOM, BOTTOM]),
            (GradientDirection::CenteredHorizontal, [TOP, TOP, BOTTOM, BOTTOM]),
        ];
        for (dir, expected) in cases {
            assert_eq!(p.corner_colors(dir).to_array(), expected, "{dir:?}");
        }
    }

    #[test]
    fn mirrored_reverses_corner_order() {
        let c = CornerColors::new(Color(1), Color(2), Color(3), Color(4)).mirrored();
        assert_eq!(c.to_array(), [Color(4), Color(3), Color(2), Color(1)]);
    }

    #[test]
    fn from_base_brackets_the_base() {
        let p = PaletteColor::from_base(Color::from_rgba_u8(100, 100, 100, 200));
        assert!(p.top_gradient.r() > p.base.r());
        assert!(p.bottom_gradient.r() < p.base.r());
        assert_eq!(p.top_gradient.a(), 200);
    }

    #[test]
    fn default_direction_is_down() {
        assert_eq!(GradientDirection::default(), GradientDirection::Down);
    }
}
