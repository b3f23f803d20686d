//! RGBA color payload.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A linear RGBA color with `f32` channels in `0.0..=1.0`.
///
/// No range validation is done here; out-of-range channels are passed
/// through to the native side unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::rgba(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::rgba(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::rgba(1.0, 1.0, 0.0, 1.0);
    pub const CYAN: Self = Self::rgba(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgba(1.0, 0.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgba(0.5, 0.5, 0.5, 1.0);
    pub const ORANGE: Self = Self::rgba(1.0, 0.5, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Opaque gray with every color channel set to `value`.
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    /// Opaque black, matching the native default.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::rgba(v.x, v.y, v.z, v.w)
    }
}

impl From<(Vec3, f32)> for Color {
    fn from((rgb, a): (Vec3, f32)) -> Self {
        Self::rgba(rgb.x, rgb.y, rgb.z, a)
    }
}

impl From<Color> for Vec4 {
    fn from(c: Color) -> Self {
        c.to_vec4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::rgba(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let c = Color::ORANGE.with_alpha(0.25);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.5);
        assert_eq!(c.a, 0.25);
    }

    #[test]
    fn test_vec4_conversion() {
        let v = Vec4::new(0.1, 0.2, 0.3, 0.4);
        let c = Color::from(v);
        assert_eq!(Vec4::from(c), v);
    }

    #[test]
    fn test_layout_is_four_floats() {
        assert_eq!(std::mem::size_of::<Color>(), 4 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let c = Color::rgba(0.2, 0.4, 0.6, 0.8);
        let bytes = rmp_serde::to_vec(&c).unwrap();
        let restored: Color = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(c, restored);
    }
}
