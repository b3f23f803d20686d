//! The managed → native call table.
//!
//! Every method is one synchronous round trip. Calls are grouped by the
//! component they address and keep the native naming so a call can be
//! traced from script code to engine code by name.
//!
//! Marshaling rules:
//!
//! - Struct-valued getters write into a caller-owned `&mut T`.
//! - Struct-valued setters read from `&T`.
//! - Scalars (floats, flags, handles, enums) cross by value, except where
//!   the native table itself uses out/in references (camera properties).
//! - Strings are copied in both directions.
//!
//! Implementations must treat an unknown or zero id as "no entity": getters
//! leave the default in place, setters do nothing. They must also release
//! any internal borrows before invoking script hooks or trigger callbacks,
//! since those may call straight back into the bridge.

use eve_math::{Color, Vector2, Vector3};

use crate::asset::{AssetHandle, AssetType};
use crate::component::ComponentKind;
use crate::entity::EntityId;
use crate::input::{KeyCode, MouseCode};
use crate::log::LogLevel;
use crate::physics::{BodyType, ColliderKind, ForceMode, TriggerCallback};
use crate::runtime::ScriptObject;
use crate::settings::{
    BlurSettings, ChromaticAberrationSettings, GrayScaleSettings, SharpenSettings,
    VignetteSettings,
};
use crate::window::CursorMode;

pub trait NativeBridge {
    // Application

    fn application_quit(&self);

    // Window

    fn window_get_cursor_mode(&self) -> CursorMode;
    fn window_set_cursor_mode(&self, mode: CursorMode);

    // Diagnostics

    fn debug_log(&self, level: LogLevel, message: &str);

    // Entity

    /// The managed object bound to `id`, if a script is attached.
    fn get_script_instance(&self, id: EntityId) -> Option<ScriptObject>;
    fn entity_destroy(&self, id: EntityId);
    /// Parent of `id`, or [`EntityId::INVALID`] for roots and unknown ids.
    fn entity_get_parent(&self, id: EntityId) -> EntityId;
    fn entity_get_name(&self, id: EntityId) -> String;
    fn entity_has_component(&self, id: EntityId, kind: ComponentKind) -> bool;
    fn entity_add_component(&self, id: EntityId, kind: ComponentKind);
    /// First entity named `name` in storage order, or [`EntityId::INVALID`].
    fn entity_find_by_name(&self, name: &str) -> EntityId;
    fn entity_instantiate(
        &self,
        name: &str,
        parent: EntityId,
        position: &Vector3,
        rotation: &Vector3,
        scale: &Vector3,
    ) -> EntityId;
    /// Attach a script component running `class_name` and create its
    /// instance. Returns the new instance, or `None` if the class is unknown.
    fn entity_assign_script(&self, id: EntityId, class_name: &str) -> Option<ScriptObject>;

    // Transform

    fn transform_component_get_local_position(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_set_local_position(&self, id: EntityId, position: &Vector3);
    fn transform_component_get_local_rotation(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_set_local_rotation(&self, id: EntityId, rotation: &Vector3);
    fn transform_component_get_local_scale(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_set_local_scale(&self, id: EntityId, scale: &Vector3);
    fn transform_component_get_position(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_get_rotation(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_get_scale(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_get_forward(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_get_right(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_get_up(&self, id: EntityId, out: &mut Vector3);
    fn transform_component_translate(&self, id: EntityId, translation: &Vector3);
    /// Rotate by `angle` degrees around `axis`.
    fn transform_component_rotate(&self, id: EntityId, angle: f32, axis: &Vector3);

    // Camera

    fn camera_component_camera_get_aspect_ratio(&self, id: EntityId, out: &mut f32);
    fn camera_component_camera_set_aspect_ratio(&self, id: EntityId, value: &f32);
    fn camera_component_camera_get_zoom_level(&self, id: EntityId, out: &mut f32);
    fn camera_component_camera_set_zoom_level(&self, id: EntityId, value: &f32);
    fn camera_component_camera_get_near_clip(&self, id: EntityId, out: &mut f32);
    fn camera_component_camera_set_near_clip(&self, id: EntityId, value: &f32);
    fn camera_component_camera_get_far_clip(&self, id: EntityId, out: &mut f32);
    fn camera_component_camera_set_far_clip(&self, id: EntityId, value: &f32);
    fn camera_component_get_is_primary(&self, id: EntityId, out: &mut bool);
    fn camera_component_set_is_primary(&self, id: EntityId, value: &bool);
    fn camera_component_get_is_fixed_aspect_ratio(&self, id: EntityId, out: &mut bool);
    fn camera_component_set_is_fixed_aspect_ratio(&self, id: EntityId, value: &bool);

    // Script

    fn script_component_get_class_name(&self, id: EntityId) -> String;

    // Sprite renderer

    fn sprite_renderer_component_get_texture(&self, id: EntityId) -> AssetHandle;
    fn sprite_renderer_component_set_texture(&self, id: EntityId, texture: AssetHandle);
    fn sprite_renderer_component_get_color(&self, id: EntityId, out: &mut Color);
    fn sprite_renderer_component_set_color(&self, id: EntityId, color: &Color);
    fn sprite_renderer_component_get_tex_tiling(&self, id: EntityId, out: &mut Vector2);
    fn sprite_renderer_component_set_tex_tiling(&self, id: EntityId, tiling: &Vector2);
    fn sprite_renderer_component_get_index(&self, id: EntityId) -> u32;
    fn sprite_renderer_component_set_index(&self, id: EntityId, index: u32);

    // Text renderer

    fn text_renderer_component_get_text(&self, id: EntityId) -> String;
    fn text_renderer_component_set_text(&self, id: EntityId, text: &str);
    fn text_renderer_component_get_font(&self, id: EntityId) -> AssetHandle;
    fn text_renderer_component_set_font(&self, id: EntityId, font: AssetHandle);
    fn text_renderer_component_get_fg_color(&self, id: EntityId, out: &mut Color);
    fn text_renderer_component_set_fg_color(&self, id: EntityId, color: &Color);
    fn text_renderer_component_get_bg_color(&self, id: EntityId, out: &mut Color);
    fn text_renderer_component_set_bg_color(&self, id: EntityId, color: &Color);
    fn text_renderer_component_get_kerning(&self, id: EntityId) -> f32;
    fn text_renderer_component_set_kerning(&self, id: EntityId, kerning: f32);
    fn text_renderer_component_get_line_spacing(&self, id: EntityId) -> f32;
    fn text_renderer_component_set_line_spacing(&self, id: EntityId, spacing: f32);
    fn text_renderer_component_get_is_screen_space(&self, id: EntityId) -> bool;
    fn text_renderer_component_set_is_screen_space(&self, id: EntityId, screen_space: bool);

    // Rigidbody2D

    fn rigidbody2d_component_get_type(&self, id: EntityId) -> BodyType;
    fn rigidbody2d_component_set_type(&self, id: EntityId, body_type: BodyType);
    fn rigidbody2d_component_get_fixed_rotation(&self, id: EntityId) -> bool;
    fn rigidbody2d_component_set_fixed_rotation(&self, id: EntityId, fixed: bool);
    fn rigidbody2d_component_get_velocity(&self, id: EntityId, out: &mut Vector2);
    fn rigidbody2d_component_set_velocity(&self, id: EntityId, velocity: &Vector2);
    fn rigidbody2d_component_get_angular_velocity(&self, id: EntityId) -> f32;
    fn rigidbody2d_component_set_angular_velocity(&self, id: EntityId, velocity: f32);
    /// Apply `force` at `offset` from the body's center.
    fn rigidbody2d_component_apply_force(
        &self,
        id: EntityId,
        force: &Vector2,
        offset: &Vector2,
        mode: ForceMode,
    );
    fn rigidbody2d_component_apply_torque(&self, id: EntityId, torque: f32);
    fn rigidbody2d_component_apply_angular_impulse(&self, id: EntityId, impulse: f32);

    // Colliders (shared by box and circle, selected by `kind`)

    fn collider2d_component_get_offset(&self, id: EntityId, kind: ColliderKind, out: &mut Vector2);
    fn collider2d_component_set_offset(&self, id: EntityId, kind: ColliderKind, offset: &Vector2);
    fn collider2d_component_get_is_trigger(&self, id: EntityId, kind: ColliderKind) -> bool;
    fn collider2d_component_set_is_trigger(&self, id: EntityId, kind: ColliderKind, trigger: bool);
    fn collider2d_component_get_density(&self, id: EntityId, kind: ColliderKind) -> f32;
    fn collider2d_component_set_density(&self, id: EntityId, kind: ColliderKind, density: f32);
    fn collider2d_component_get_friction(&self, id: EntityId, kind: ColliderKind) -> f32;
    fn collider2d_component_set_friction(&self, id: EntityId, kind: ColliderKind, friction: f32);
    fn collider2d_component_get_restitution(&self, id: EntityId, kind: ColliderKind) -> f32;
    fn collider2d_component_set_restitution(&self, id: EntityId, kind: ColliderKind, value: f32);
    fn collider2d_component_get_restitution_threshold(
        &self,
        id: EntityId,
        kind: ColliderKind,
    ) -> f32;
    fn collider2d_component_set_restitution_threshold(
        &self,
        id: EntityId,
        kind: ColliderKind,
        threshold: f32,
    );
    /// Register `callback` in the collider's single trigger slot, replacing
    /// any previous registration.
    fn collider2d_component_set_on_trigger(
        &self,
        id: EntityId,
        kind: ColliderKind,
        callback: TriggerCallback,
    );
    fn collider2d_component_clear_on_trigger(&self, id: EntityId, kind: ColliderKind);

    fn box_collider2d_component_get_size(&self, id: EntityId, out: &mut Vector2);
    fn box_collider2d_component_set_size(&self, id: EntityId, size: &Vector2);
    fn circle_collider2d_component_get_radius(&self, id: EntityId) -> f32;
    fn circle_collider2d_component_set_radius(&self, id: EntityId, radius: f32);

    // Post-process volume

    fn post_process_volume_component_get_is_global(&self, id: EntityId) -> bool;
    fn post_process_volume_component_set_is_global(&self, id: EntityId, global: bool);
    fn post_process_volume_component_get_gray_scale(&self, id: EntityId, out: &mut GrayScaleSettings);
    fn post_process_volume_component_set_gray_scale(&self, id: EntityId, value: &GrayScaleSettings);
    fn post_process_volume_component_get_chromatic_aberration(
        &self,
        id: EntityId,
        out: &mut ChromaticAberrationSettings,
    );
    fn post_process_volume_component_set_chromatic_aberration(
        &self,
        id: EntityId,
        value: &ChromaticAberrationSettings,
    );
    fn post_process_volume_component_get_blur(&self, id: EntityId, out: &mut BlurSettings);
    fn post_process_volume_component_set_blur(&self, id: EntityId, value: &BlurSettings);
    fn post_process_volume_component_get_sharpen(&self, id: EntityId, out: &mut SharpenSettings);
    fn post_process_volume_component_set_sharpen(&self, id: EntityId, value: &SharpenSettings);
    fn post_process_volume_component_get_vignette(&self, id: EntityId, out: &mut VignetteSettings);
    fn post_process_volume_component_set_vignette(&self, id: EntityId, value: &VignetteSettings);

    // Asset registry

    fn asset_registry_load(&self, path: &str, kind: AssetType) -> AssetHandle;
    fn asset_registry_unload(&self, handle: AssetHandle);

    // Scene

    fn scene_manager_load_scene(&self, path: &str);

    // Input

    fn input_is_key_pressed(&self, key: KeyCode) -> bool;
    fn input_is_key_released(&self, key: KeyCode) -> bool;
    fn input_is_mouse_pressed(&self, button: MouseCode) -> bool;
    fn input_is_mouse_released(&self, button: MouseCode) -> bool;
    fn input_get_mouse_position(&self, out: &mut Vector2);
    fn input_get_scroll_offset(&self, out: &mut Vector2);
}
