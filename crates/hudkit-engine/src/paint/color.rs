use std::fmt;

/// 32-bit RGBA color packed as `0xAABBGGRR`.
///
/// Alpha lives in the high byte, matching the packing immediate-mode GUI
/// backends expect, so literals such as `0xCC000000` read as
/// "black at 80% alpha".
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// Creates a color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    /// Creates a color from `f32` components in `[0, 1]`; out-of-range values are clamped.
    #[inline]
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_rgba_u8(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a))
    }

    /// Parses a `#rrggbbaa` literal (straight alpha). The leading `#` is optional.
    pub fn from_hex(src: &str) -> Result<Self, ColorParseError> {
        let hex = src.strip_prefix('#').unwrap_or(src);
        if hex.len() != 8 {
            return Err(ColorParseError::new(
                src,
                format!("expected 8 hex digits, got {}", hex.len()),
            ));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(src, "non-hex digit in color literal"));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| ColorParseError::new(src, e.to_string()))
        };
        Ok(Self::from_rgba_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?))
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Same RGB, replaced alpha byte.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (a as u32) << 24)
    }

    /// Returns `[r, g, b, a]` in `[0, 1]`.
    #[inline]
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r() as f32 / 255.0,
            self.g() as f32 / 255.0,
            self.b() as f32 / 255.0,
            self.a() as f32 / 255.0,
        ]
    }

    /// Adds `delta` to each RGB channel in unit space, clamped. Alpha is kept.
    #[inline]
    pub fn offset_rgb(self, delta: f32) -> Self {
        let [r, g, b, a] = self.to_rgba_f32();
        Self::from_rgba_f32(r + delta, g + delta, b + delta, a)
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r(), self.g(), self.b(), self.a())
    }
}

/// A malformed color literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub input: String,
    pub message: String,
}

impl ColorParseError {
    fn new(input: &str, msg: impl Into<String>) -> Self {
        Self { input: input.to_owned(), message: msg.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}
