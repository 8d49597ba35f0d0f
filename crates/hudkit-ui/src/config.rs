use hudkit_engine::paint::{Color, GradientDirection};

/// Defaults the helpers fall back to when the caller does not pass a value.
///
/// Owned by the caller (usually loaded from the plugin's own settings) and
/// passed by reference; the helpers never persist it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    /// Direction used by the `*_default` gradient fills and by shield bars.
    pub gradient_direction: GradientDirection,
    /// Fill of the radial cooldown mask.
    pub cooldown_color: Color,
    /// Icon border stroke.
    pub border_color: Color,
    pub text_color: Color,
    pub outline_color: Color,
    pub outline_thickness: i32,
    pub shadow_color: Color,
    pub shadow_offset: i32,
    pub shadow_thickness: i32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            gradient_direction: GradientDirection::Down,
            cooldown_color: Color(0xCC00_0000),
            border_color: Color::BLACK,
            text_color: Color::WHITE,
            outline_color: Color::BLACK,
            outline_thickness: 1,
            shadow_color: Color::BLACK,
            shadow_offset: 1,
            shadow_thickness: 1,
        }
    }
}
