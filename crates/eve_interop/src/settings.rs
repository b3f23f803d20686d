//! Post-processing settings blocks.
//!
//! Each block is a plain value with engine-defined defaults. A block that was
//! never written natively reads back as its `Default`. No range checks happen
//! here; legality is the native side's concern.

use eve_math::Vector3;
use serde::{Deserialize, Serialize};

/// Desaturates the final image.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GrayScaleSettings {
    pub enabled: bool,
}

/// Offsets the red, green and blue channels independently.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromaticAberrationSettings {
    pub enabled: bool,
    /// Per-channel sample offset (r, g, b).
    pub offset: Vector3,
}

impl Default for ChromaticAberrationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            offset: Vector3::new(0.009, 0.006, -0.006),
        }
    }
}

/// Box blur.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlurSettings {
    pub enabled: bool,
    /// Kernel radius in samples.
    pub size: u32,
    /// Distance between samples in pixels.
    pub separation: f32,
}

impl Default for BlurSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            size: 2,
            separation: 2.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharpenSettings {
    pub enabled: bool,
    pub amount: f32,
}

impl Default for SharpenSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            amount: 0.8,
        }
    }
}

/// Darkens the image towards its edges.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VignetteSettings {
    pub enabled: bool,
    /// Radius where darkening starts.
    pub inner: f32,
    /// Radius where darkening reaches `strength`.
    pub outer: f32,
    pub strength: f32,
    pub curvature: f32,
}

impl Default for VignetteSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            inner: 0.5,
            outer: 1.2,
            strength: 0.8,
            curvature: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vignette_defaults() {
        let v = VignetteSettings::default();
        assert!(!v.enabled);
        assert_eq!(v.inner, 0.5);
        assert_eq!(v.outer, 1.2);
        assert_eq!(v.strength, 0.8);
        assert_eq!(v.curvature, 0.5);
    }

    #[test]
    fn test_blur_defaults() {
        let b = BlurSettings::default();
        assert!(!b.enabled);
        assert_eq!(b.size, 2);
        assert_eq!(b.separation, 2.0);
    }

    #[test]
    fn test_remaining_defaults() {
        assert!(!GrayScaleSettings::default().enabled);
        let ca = ChromaticAberrationSettings::default();
        assert!(!ca.enabled);
        assert_eq!(ca.offset, Vector3::new(0.009, 0.006, -0.006));
        let s = SharpenSettings::default();
        assert!(!s.enabled);
        assert_eq!(s.amount, 0.8);
    }

    #[test]
    fn test_struct_update_keeps_other_defaults() {
        let v = VignetteSettings {
            enabled: true,
            strength: 0.25,
            ..Default::default()
        };
        assert!(v.enabled);
        assert_eq!(v.strength, 0.25);
        assert_eq!(v.inner, 0.5);
        assert_eq!(v.curvature, 0.5);
    }
}
