use super::Color;

/// Per-corner colors for a multi-color rectangle fill.
///
/// Corners follow the fill order backends expect: top-left, top-right,
/// bottom-right, bottom-left. Renderers interpolate bilinearly between them.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CornerColors {
    pub top_left: Color,
    pub top_right: Color,
    pub bottom_right: Color,
    pub bottom_left: Color,
}

impl CornerColors {
    #[inline]
    pub const fn new(top_left: Color, top_right: Color, bottom_right: Color, bottom_left: Color) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Same color on all four corners.
    #[inline]
    pub const fn all(c: Color) -> Self {
        Self { top_left: c, top_right: c, bottom_right: c, bottom_left: c }
    }

    /// Reverses the corner order (c3, c2, c1, c0), i.e. swaps the top and
    /// bottom edges so a vertical gradient reflects.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Self {
            top_left: self.bottom_left,
            top_right: self.bottom_right,
            bottom_right: self.top_right,
            bottom_left: self.top_left,
        }
    }

    #[inline]
    pub const fn to_array(self) -> [Color; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    #[inline]
    pub fn is_uniform(self) -> bool {
        let [a, b, c, d] = self.to_array();
        a == b && b == c && c == d
    }
}
