//! Per-entity component data as the engine stores it.
//!
//! Defaults reproduce the values a freshly added component has in the
//! editor.

use eve_interop::{
    AssetHandle, BlurSettings, BodyType, ChromaticAberrationSettings, GrayScaleSettings,
    ScriptInstance, SharpenSettings, VignetteSettings,
};
use eve_math::Color;
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct CameraData {
    pub aspect_ratio: f32,
    pub zoom_level: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    pub is_primary: bool,
    pub is_fixed_aspect_ratio: bool,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.77,
            zoom_level: 1.0,
            near_clip: -1.0,
            far_clip: 1.0,
            is_primary: true,
            is_fixed_aspect_ratio: false,
        }
    }
}

/// Script binding of an entity.
///
/// `instance` is `None` until a registered class has been instantiated for
/// `class_name`.
#[derive(Debug, Clone, Default)]
pub struct ScriptData {
    pub class_name: String,
    pub instance: Option<ScriptInstance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteData {
    pub texture: AssetHandle,
    pub color: Color,
    pub tex_tiling: Vec2,
    pub index: u32,
}

impl Default for SpriteData {
    fn default() -> Self {
        Self {
            texture: AssetHandle::INVALID,
            color: Color::WHITE,
            tex_tiling: Vec2::ONE,
            index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextData {
    pub text: String,
    pub font: AssetHandle,
    pub fg_color: Color,
    pub bg_color: Color,
    pub kerning: f32,
    pub line_spacing: f32,
    pub is_screen_space: bool,
}

impl Default for TextData {
    fn default() -> Self {
        Self {
            text: "Add a Caption!".to_owned(),
            font: AssetHandle::INVALID,
            fg_color: Color::WHITE,
            bg_color: Color::TRANSPARENT,
            kerning: 0.0,
            line_spacing: 0.0,
            is_screen_space: false,
        }
    }
}

/// Rigidbody state plus the forces applied since the last physics step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RigidbodyData {
    pub body_type: BodyType,
    pub fixed_rotation: bool,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub force: Vec2,
    pub impulse: Vec2,
    pub torque: f32,
    pub angular_impulse: f32,
}

/// Shape-independent collider properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderData {
    pub offset: Vec2,
    pub is_trigger: bool,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub restitution_threshold: f32,
}

impl Default for ColliderData {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            is_trigger: false,
            density: 1.0,
            friction: 0.5,
            restitution: 0.0,
            restitution_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxColliderData {
    pub shape: ColliderData,
    pub size: Vec2,
}

impl Default for BoxColliderData {
    fn default() -> Self {
        Self {
            shape: ColliderData::default(),
            size: Vec2::splat(0.5),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleColliderData {
    pub shape: ColliderData,
    pub radius: f32,
}

impl Default for CircleColliderData {
    fn default() -> Self {
        Self {
            shape: ColliderData::default(),
            radius: 0.5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostProcessData {
    pub is_global: bool,
    pub gray_scale: GrayScaleSettings,
    pub chromatic_aberration: ChromaticAberrationSettings,
    pub blur: BlurSettings,
    pub sharpen: SharpenSettings,
    pub vignette: VignetteSettings,
}
