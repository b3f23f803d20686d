//! [`NativeBridge`] for the headless engine.
//!
//! Reads of a missing entity or component leave the caller's default in
//! place. Writes to one are dropped with a warning.

use std::rc::Rc;

use eve_interop::{
    AssetHandle, AssetType, BlurSettings, BodyType, ChromaticAberrationSettings, ColliderKind,
    ComponentKind, CursorMode, EntityId, ForceMode, GrayScaleSettings, KeyCode, LogLevel,
    MouseCode, NativeBridge, ScriptObject, SharpenSettings, TriggerCallback, VignetteSettings,
};
use eve_math::{Color, Vector2, Vector3};
use tracing::{debug, info, warn};

use crate::components::{ColliderData, ScriptData};
use crate::engine::HeadlessEngine;
use crate::transform::Transform;
use crate::world::EntityRecord;

impl HeadlessEngine {
    fn read<T>(&self, id: EntityId, f: impl FnOnce(&EntityRecord) -> Option<T>) -> Option<T> {
        self.world.borrow().get(id).and_then(f)
    }

    fn read_into<T>(
        &self,
        id: EntityId,
        out: &mut T,
        f: impl FnOnce(&EntityRecord) -> Option<T>,
    ) {
        if let Some(value) = self.read(id, f) {
            *out = value;
        }
    }

    fn write(&self, id: EntityId, call: &'static str, f: impl FnOnce(&mut EntityRecord) -> Option<()>) {
        let applied = self.world.borrow_mut().get_mut(id).and_then(f).is_some();
        if !applied {
            warn!(entity = %id, call, "write ignored, entity or component missing");
        }
    }
}

fn collider(record: &EntityRecord, kind: ColliderKind) -> Option<&ColliderData> {
    match kind {
        ColliderKind::Box => record.box_collider.as_ref().map(|c| &c.shape),
        ColliderKind::Circle => record.circle_collider.as_ref().map(|c| &c.shape),
    }
}

fn collider_mut(record: &mut EntityRecord, kind: ColliderKind) -> Option<&mut ColliderData> {
    match kind {
        ColliderKind::Box => record.box_collider.as_mut().map(|c| &mut c.shape),
        ColliderKind::Circle => record.circle_collider.as_mut().map(|c| &mut c.shape),
    }
}

impl NativeBridge for HeadlessEngine {
    fn application_quit(&self) {
        info!("application quit requested");
        self.quit_requested.set(true);
    }

    fn window_get_cursor_mode(&self) -> CursorMode {
        self.cursor_mode.get()
    }

    fn window_set_cursor_mode(&self, mode: CursorMode) {
        debug!(mode = ?mode, "cursor mode changed");
        self.cursor_mode.set(mode);
    }

    fn debug_log(&self, level: LogLevel, message: &str) {
        self.push_log(level, message);
    }

    // Entity

    fn get_script_instance(&self, id: EntityId) -> Option<ScriptObject> {
        self.read(id, |r| {
            let instance = r.script.as_ref()?.instance.as_ref()?;
            Some(Rc::clone(&instance.object))
        })
    }

    fn entity_destroy(&self, id: EntityId) {
        self.despawn(id);
    }

    fn entity_get_parent(&self, id: EntityId) -> EntityId {
        self.world.borrow().parent_of(id)
    }

    fn entity_get_name(&self, id: EntityId) -> String {
        self.read(id, |r| Some(r.name.clone())).unwrap_or_default()
    }

    fn entity_has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        self.read(id, |r| Some(r.has(kind))).unwrap_or(false)
    }

    fn entity_add_component(&self, id: EntityId, kind: ComponentKind) {
        let added = self.world.borrow_mut().get_mut(id).map(|r| r.add(kind));
        match added {
            Some(true) => debug!(entity = %id, component = kind.name(), "component added"),
            Some(false) => {
                warn!(entity = %id, component = kind.name(), "component already present");
            }
            None => warn!(entity = %id, component = kind.name(), "add on missing entity ignored"),
        }
    }

    fn entity_find_by_name(&self, name: &str) -> EntityId {
        self.world.borrow().find_by_name(name)
    }

    fn entity_instantiate(
        &self,
        name: &str,
        parent: EntityId,
        position: &Vector3,
        rotation: &Vector3,
        scale: &Vector3,
    ) -> EntityId {
        if parent.is_valid() && !self.world.borrow().contains(parent) {
            warn!(name, parent = %parent, "parent not found, creating root entity");
        }
        self.spawn(name, parent, Transform::new(*position, *rotation, *scale))
    }

    fn entity_assign_script(&self, id: EntityId, class_name: &str) -> Option<ScriptObject> {
        {
            let mut world = self.world.borrow_mut();
            let Some(record) = world.get_mut(id) else {
                warn!(entity = %id, class = class_name, "script assigned to missing entity");
                return None;
            };
            let script = record.script.get_or_insert_with(ScriptData::default);
            script.class_name = class_name.to_owned();
            script.instance = None;
        }

        let Some(runtime) = self.runtime() else {
            warn!(entity = %id, class = class_name, "no managed runtime installed");
            return None;
        };
        let instance = runtime.create_instance(class_name, id)?;
        let object = Rc::clone(&instance.object);
        let hooks = Rc::clone(&instance.hooks);

        {
            let mut world = self.world.borrow_mut();
            // The constructor may have destroyed the entity.
            let script = world.get_mut(id)?.script.as_mut()?;
            script.instance = Some(instance);
        }
        debug!(entity = %id, class = class_name, "script instance bound");

        if self.running.get() {
            hooks.on_create();
        }
        Some(object)
    }

    // Transform

    fn transform_component_get_local_position(&self, id: EntityId, out: &mut Vector3) {
        self.read_into(id, out, |r| Some(r.transform.local_position));
    }

    fn transform_component_set_local_position(&self, id: EntityId, position: &Vector3) {
        self.write(id, "transform_component_set_local_position", |r| {
            r.transform.local_position = *position;
            Some(())
        });
    }

    fn transform_component_get_local_rotation(&self, id: EntityId, out: &mut Vector3) {
        self.read_into(id, out, |r| Some(r.transform.local_rotation));
    }

    fn transform_component_set_local_rotation(&self, id: EntityId, rotation: &Vector3) {
        self.write(id, "transform_component_set_local_rotation", |r| {
            r.transform.local_rotation = *rotation;
            Some(())
        });
    }

    fn transform_component_get_local_scale(&self, id: EntityId, out: &mut Vector3) {
        self.read_into(id, out, |r| Some(r.transform.local_scale));
    }

    fn transform_component_set_local_scale(&self, id: EntityId, scale: &Vector3) {
        self.write(id, "transform_component_set_local_scale", |r| {
            r.transform.local_scale = *scale;
            Some(())
        });
    }

    fn transform_component_get_position(&self, id: EntityId, out: &mut Vector3) {
        let world = self.world.borrow();
        if world.contains(id) {
            *out = world.world_position(id);
        }
    }

    fn transform_component_get_rotation(&self, id: EntityId, out: &mut Vector3) {
        let world = self.world.borrow();
        if world.contains(id) {
            *out = world.world_rotation(id);
        }
    }

    fn transform_component_get_scale(&self, id: EntityId, out: &mut Vector3) {
        let world = self.world.borrow();
        if world.contains(id) {
            *out = world.world_scale(id);
        }
    }

    fn transform_component_get_forward(&self, id: EntityId, out: &mut Vector3) {
        self.read_into(id, out, |r| Some(r.transform.forward()));
    }

    fn transform_component_get_right(&self, id: EntityId, out: &mut Vector3) {
        self.read_into(id, out, |r| Some(r.transform.right()));
    }

    fn transform_component_get_up(&self, id: EntityId, out: &mut Vector3) {
        self.read_into(id, out, |r| Some(r.transform.up()));
    }

    fn transform_component_translate(&self, id: EntityId, translation: &Vector3) {
        self.write(id, "transform_component_translate", |r| {
            r.transform.translate(*translation);
            Some(())
        });
    }

    fn transform_component_rotate(&self, id: EntityId, angle: f32, axis: &Vector3) {
        self.write(id, "transform_component_rotate", |r| {
            r.transform.rotate(angle, *axis);
            Some(())
        });
    }

    // Camera

    fn camera_component_camera_get_aspect_ratio(&self, id: EntityId, out: &mut f32) {
        self.read_into(id, out, |r| Some(r.camera.as_ref()?.aspect_ratio));
    }

    fn camera_component_camera_set_aspect_ratio(&self, id: EntityId, value: &f32) {
        self.write(id, "camera_component_camera_set_aspect_ratio", |r| {
            r.camera.as_mut()?.aspect_ratio = *value;
            Some(())
        });
    }

    fn camera_component_camera_get_zoom_level(&self, id: EntityId, out: &mut f32) {
        self.read_into(id, out, |r| Some(r.camera.as_ref()?.zoom_level));
    }

    fn camera_component_camera_set_zoom_level(&self, id: EntityId, value: &f32) {
        self.write(id, "camera_component_camera_set_zoom_level", |r| {
            r.camera.as_mut()?.zoom_level = *value;
            Some(())
        });
    }

    fn camera_component_camera_get_near_clip(&self, id: EntityId, out: &mut f32) {
        self.read_into(id, out, |r| Some(r.camera.as_ref()?.near_clip));
    }

    fn camera_component_camera_set_near_clip(&self, id: EntityId, value: &f32) {
        self.write(id, "camera_component_camera_set_near_clip", |r| {
            r.camera.as_mut()?.near_clip = *value;
            Some(())
        });
    }

    fn camera_component_camera_get_far_clip(&self, id: EntityId, out: &mut f32) {
        self.read_into(id, out, |r| Some(r.camera.as_ref()?.far_clip));
    }

    fn camera_component_camera_set_far_clip(&self, id: EntityId, value: &f32) {
        self.write(id, "camera_component_camera_set_far_clip", |r| {
            r.camera.as_mut()?.far_clip = *value;
            Some(())
        });
    }

    fn camera_component_get_is_primary(&self, id: EntityId, out: &mut bool) {
        self.read_into(id, out, |r| Some(r.camera.as_ref()?.is_primary));
    }

    fn camera_component_set_is_primary(&self, id: EntityId, value: &bool) {
        self.write(id, "camera_component_set_is_primary", |r| {
            r.camera.as_mut()?.is_primary = *value;
            Some(())
        });
    }

    fn camera_component_get_is_fixed_aspect_ratio(&self, id: EntityId, out: &mut bool) {
        self.read_into(id, out, |r| Some(r.camera.as_ref()?.is_fixed_aspect_ratio));
    }

    fn camera_component_set_is_fixed_aspect_ratio(&self, id: EntityId, value: &bool) {
        self.write(id, "camera_component_set_is_fixed_aspect_ratio", |r| {
            r.camera.as_mut()?.is_fixed_aspect_ratio = *value;
            Some(())
        });
    }

    // Script

    fn script_component_get_class_name(&self, id: EntityId) -> String {
        self.read(id, |r| Some(r.script.as_ref()?.class_name.clone()))
            .unwrap_or_default()
    }

    // Sprite renderer

    fn sprite_renderer_component_get_texture(&self, id: EntityId) -> AssetHandle {
        self.read(id, |r| Some(r.sprite.as_ref()?.texture))
            .unwrap_or_default()
    }

    fn sprite_renderer_component_set_texture(&self, id: EntityId, texture: AssetHandle) {
        self.write(id, "sprite_renderer_component_set_texture", |r| {
            r.sprite.as_mut()?.texture = texture;
            Some(())
        });
    }

    fn sprite_renderer_component_get_color(&self, id: EntityId, out: &mut Color) {
        self.read_into(id, out, |r| Some(r.sprite.as_ref()?.color));
    }

    fn sprite_renderer_component_set_color(&self, id: EntityId, color: &Color) {
        self.write(id, "sprite_renderer_component_set_color", |r| {
            r.sprite.as_mut()?.color = *color;
            Some(())
        });
    }

    fn sprite_renderer_component_get_tex_tiling(&self, id: EntityId, out: &mut Vector2) {
        self.read_into(id, out, |r| Some(r.sprite.as_ref()?.tex_tiling));
    }

    fn sprite_renderer_component_set_tex_tiling(&self, id: EntityId, tiling: &Vector2) {
        self.write(id, "sprite_renderer_component_set_tex_tiling", |r| {
            r.sprite.as_mut()?.tex_tiling = *tiling;
            Some(())
        });
    }

    fn sprite_renderer_component_get_index(&self, id: EntityId) -> u32 {
        self.read(id, |r| Some(r.sprite.as_ref()?.index))
            .unwrap_or_default()
    }

    fn sprite_renderer_component_set_index(&self, id: EntityId, index: u32) {
        self.write(id, "sprite_renderer_component_set_index", |r| {
            r.sprite.as_mut()?.index = index;
            Some(())
        });
    }

    // Text renderer

    fn text_renderer_component_get_text(&self, id: EntityId) -> String {
        self.read(id, |r| Some(r.text.as_ref()?.text.clone()))
            .unwrap_or_default()
    }

    fn text_renderer_component_set_text(&self, id: EntityId, text: &str) {
        self.write(id, "text_renderer_component_set_text", |r| {
            r.text.as_mut()?.text = text.to_owned();
            Some(())
        });
    }

    fn text_renderer_component_get_font(&self, id: EntityId) -> AssetHandle {
        self.read(id, |r| Some(r.text.as_ref()?.font))
            .unwrap_or_default()
    }

    fn text_renderer_component_set_font(&self, id: EntityId, font: AssetHandle) {
        self.write(id, "text_renderer_component_set_font", |r| {
            r.text.as_mut()?.font = font;
            Some(())
        });
    }

    fn text_renderer_component_get_fg_color(&self, id: EntityId, out: &mut Color) {
        self.read_into(id, out, |r| Some(r.text.as_ref()?.fg_color));
    }

    fn text_renderer_component_set_fg_color(&self, id: EntityId, color: &Color) {
        self.write(id, "text_renderer_component_set_fg_color", |r| {
            r.text.as_mut()?.fg_color = *color;
            Some(())
        });
    }

    fn text_renderer_component_get_bg_color(&self, id: EntityId, out: &mut Color) {
        self.read_into(id, out, |r| Some(r.text.as_ref()?.bg_color));
    }

    fn text_renderer_component_set_bg_color(&self, id: EntityId, color: &Color) {
        self.write(id, "text_renderer_component_set_bg_color", |r| {
            r.text.as_mut()?.bg_color = *color;
            Some(())
        });
    }

    fn text_renderer_component_get_kerning(&self, id: EntityId) -> f32 {
        self.read(id, |r| Some(r.text.as_ref()?.kerning))
            .unwrap_or_default()
    }

    fn text_renderer_component_set_kerning(&self, id: EntityId, kerning: f32) {
        self.write(id, "text_renderer_component_set_kerning", |r| {
            r.text.as_mut()?.kerning = kerning;
            Some(())
        });
    }

    fn text_renderer_component_get_line_spacing(&self, id: EntityId) -> f32 {
        self.read(id, |r| Some(r.text.as_ref()?.line_spacing))
            .unwrap_or_default()
    }

    fn text_renderer_component_set_line_spacing(&self, id: EntityId, spacing: f32) {
        self.write(id, "text_renderer_component_set_line_spacing", |r| {
            r.text.as_mut()?.line_spacing = spacing;
            Some(())
        });
    }

    fn text_renderer_component_get_is_screen_space(&self, id: EntityId) -> bool {
        self.read(id, |r| Some(r.text.as_ref()?.is_screen_space))
            .unwrap_or_default()
    }

    fn text_renderer_component_set_is_screen_space(&self, id: EntityId, screen_space: bool) {
        self.write(id, "text_renderer_component_set_is_screen_space", |r| {
            r.text.as_mut()?.is_screen_space = screen_space;
            Some(())
        });
    }

    // Rigidbody2D

    fn rigidbody2d_component_get_type(&self, id: EntityId) -> BodyType {
        self.read(id, |r| Some(r.rigidbody.as_ref()?.body_type))
            .unwrap_or_default()
    }

    fn rigidbody2d_component_set_type(&self, id: EntityId, body_type: BodyType) {
        self.write(id, "rigidbody2d_component_set_type", |r| {
            r.rigidbody.as_mut()?.body_type = body_type;
            Some(())
        });
    }

    fn rigidbody2d_component_get_fixed_rotation(&self, id: EntityId) -> bool {
        self.read(id, |r| Some(r.rigidbody.as_ref()?.fixed_rotation))
            .unwrap_or_default()
    }

    fn rigidbody2d_component_set_fixed_rotation(&self, id: EntityId, fixed: bool) {
        self.write(id, "rigidbody2d_component_set_fixed_rotation", |r| {
            r.rigidbody.as_mut()?.fixed_rotation = fixed;
            Some(())
        });
    }

    fn rigidbody2d_component_get_velocity(&self, id: EntityId, out: &mut Vector2) {
        self.read_into(id, out, |r| Some(r.rigidbody.as_ref()?.velocity));
    }

    fn rigidbody2d_component_set_velocity(&self, id: EntityId, velocity: &Vector2) {
        self.write(id, "rigidbody2d_component_set_velocity", |r| {
            r.rigidbody.as_mut()?.velocity = *velocity;
            Some(())
        });
    }

    fn rigidbody2d_component_get_angular_velocity(&self, id: EntityId) -> f32 {
        self.read(id, |r| Some(r.rigidbody.as_ref()?.angular_velocity))
            .unwrap_or_default()
    }

    fn rigidbody2d_component_set_angular_velocity(&self, id: EntityId, velocity: f32) {
        self.write(id, "rigidbody2d_component_set_angular_velocity", |r| {
            r.rigidbody.as_mut()?.angular_velocity = velocity;
            Some(())
        });
    }

    fn rigidbody2d_component_apply_force(
        &self,
        id: EntityId,
        force: &Vector2,
        offset: &Vector2,
        mode: ForceMode,
    ) {
        self.write(id, "rigidbody2d_component_apply_force", |r| {
            let body = r.rigidbody.as_mut()?;
            let torque = offset.perp_dot(*force);
            match mode {
                ForceMode::Force => {
                    body.force += *force;
                    body.torque += torque;
                }
                ForceMode::Impulse => {
                    body.impulse += *force;
                    body.angular_impulse += torque;
                }
            }
            Some(())
        });
    }

    fn rigidbody2d_component_apply_torque(&self, id: EntityId, torque: f32) {
        self.write(id, "rigidbody2d_component_apply_torque", |r| {
            r.rigidbody.as_mut()?.torque += torque;
            Some(())
        });
    }

    fn rigidbody2d_component_apply_angular_impulse(&self, id: EntityId, impulse: f32) {
        self.write(id, "rigidbody2d_component_apply_angular_impulse", |r| {
            r.rigidbody.as_mut()?.angular_impulse += impulse;
            Some(())
        });
    }

    // Colliders

    fn collider2d_component_get_offset(&self, id: EntityId, kind: ColliderKind, out: &mut Vector2) {
        self.read_into(id, out, |r| Some(collider(r, kind)?.offset));
    }

    fn collider2d_component_set_offset(&self, id: EntityId, kind: ColliderKind, offset: &Vector2) {
        self.write(id, "collider2d_component_set_offset", |r| {
            collider_mut(r, kind)?.offset = *offset;
            Some(())
        });
    }

    fn collider2d_component_get_is_trigger(&self, id: EntityId, kind: ColliderKind) -> bool {
        self.read(id, |r| Some(collider(r, kind)?.is_trigger))
            .unwrap_or_default()
    }

    fn collider2d_component_set_is_trigger(&self, id: EntityId, kind: ColliderKind, trigger: bool) {
        self.write(id, "collider2d_component_set_is_trigger", |r| {
            collider_mut(r, kind)?.is_trigger = trigger;
            Some(())
        });
    }

    fn collider2d_component_get_density(&self, id: EntityId, kind: ColliderKind) -> f32 {
        self.read(id, |r| Some(collider(r, kind)?.density))
            .unwrap_or_default()
    }

    fn collider2d_component_set_density(&self, id: EntityId, kind: ColliderKind, density: f32) {
        self.write(id, "collider2d_component_set_density", |r| {
            collider_mut(r, kind)?.density = density;
            Some(())
        });
    }

    fn collider2d_component_get_friction(&self, id: EntityId, kind: ColliderKind) -> f32 {
        self.read(id, |r| Some(collider(r, kind)?.friction))
            .unwrap_or_default()
    }

    fn collider2d_component_set_friction(&self, id: EntityId, kind: ColliderKind, friction: f32) {
        self.write(id, "collider2d_component_set_friction", |r| {
            collider_mut(r, kind)?.friction = friction;
            Some(())
        });
    }

    fn collider2d_component_get_restitution(&self, id: EntityId, kind: ColliderKind) -> f32 {
        self.read(id, |r| Some(collider(r, kind)?.restitution))
            .unwrap_or_default()
    }

    fn collider2d_component_set_restitution(&self, id: EntityId, kind: ColliderKind, value: f32) {
        self.write(id, "collider2d_component_set_restitution", |r| {
            collider_mut(r, kind)?.restitution = value;
            Some(())
        });
    }

    fn collider2d_component_get_restitution_threshold(
        &self,
        id: EntityId,
        kind: ColliderKind,
    ) -> f32 {
        self.read(id, |r| Some(collider(r, kind)?.restitution_threshold))
            .unwrap_or_default()
    }

    fn collider2d_component_set_restitution_threshold(
        &self,
        id: EntityId,
        kind: ColliderKind,
        threshold: f32,
    ) {
        self.write(id, "collider2d_component_set_restitution_threshold", |r| {
            collider_mut(r, kind)?.restitution_threshold = threshold;
            Some(())
        });
    }

    fn collider2d_component_set_on_trigger(
        &self,
        id: EntityId,
        kind: ColliderKind,
        callback: TriggerCallback,
    ) {
        if self.read(id, |r| collider(r, kind).map(|_| ())).is_none() {
            warn!(entity = %id, collider = ?kind, "trigger callback on missing collider ignored");
            return;
        }
        self.set_trigger(id, kind, callback);
    }

    fn collider2d_component_clear_on_trigger(&self, id: EntityId, kind: ColliderKind) {
        self.clear_trigger(id, kind);
    }

    fn box_collider2d_component_get_size(&self, id: EntityId, out: &mut Vector2) {
        self.read_into(id, out, |r| Some(r.box_collider.as_ref()?.size));
    }

    fn box_collider2d_component_set_size(&self, id: EntityId, size: &Vector2) {
        self.write(id, "box_collider2d_component_set_size", |r| {
            r.box_collider.as_mut()?.size = *size;
            Some(())
        });
    }

    fn circle_collider2d_component_get_radius(&self, id: EntityId) -> f32 {
        self.read(id, |r| Some(r.circle_collider.as_ref()?.radius))
            .unwrap_or_default()
    }

    fn circle_collider2d_component_set_radius(&self, id: EntityId, radius: f32) {
        self.write(id, "circle_collider2d_component_set_radius", |r| {
            r.circle_collider.as_mut()?.radius = radius;
            Some(())
        });
    }

    // Post-process volume

    fn post_process_volume_component_get_is_global(&self, id: EntityId) -> bool {
        self.read(id, |r| Some(r.post_process.as_ref()?.is_global))
            .unwrap_or_default()
    }

    fn post_process_volume_component_set_is_global(&self, id: EntityId, global: bool) {
        self.write(id, "post_process_volume_component_set_is_global", |r| {
            r.post_process.as_mut()?.is_global = global;
            Some(())
        });
    }

    fn post_process_volume_component_get_gray_scale(&self, id: EntityId, out: &mut GrayScaleSettings) {
        self.read_into(id, out, |r| Some(r.post_process.as_ref()?.gray_scale));
    }

    fn post_process_volume_component_set_gray_scale(&self, id: EntityId, value: &GrayScaleSettings) {
        self.write(id, "post_process_volume_component_set_gray_scale", |r| {
            r.post_process.as_mut()?.gray_scale = *value;
            Some(())
        });
    }

    fn post_process_volume_component_get_chromatic_aberration(
        &self,
        id: EntityId,
        out: &mut ChromaticAberrationSettings,
    ) {
        self.read_into(id, out, |r| Some(r.post_process.as_ref()?.chromatic_aberration));
    }

    fn post_process_volume_component_set_chromatic_aberration(
        &self,
        id: EntityId,
        value: &ChromaticAberrationSettings,
    ) {
        self.write(id, "post_process_volume_component_set_chromatic_aberration", |r| {
            r.post_process.as_mut()?.chromatic_aberration = *value;
            Some(())
        });
    }

    fn post_process_volume_component_get_blur(&self, id: EntityId, out: &mut BlurSettings) {
        self.read_into(id, out, |r| Some(r.post_process.as_ref()?.blur));
    }

    fn post_process_volume_component_set_blur(&self, id: EntityId, value: &BlurSettings) {
        self.write(id, "post_process_volume_component_set_blur", |r| {
            r.post_process.as_mut()?.blur = *value;
            Some(())
        });
    }

    fn post_process_volume_component_get_sharpen(&self, id: EntityId, out: &mut SharpenSettings) {
        self.read_into(id, out, |r| Some(r.post_process.as_ref()?.sharpen));
    }

    fn post_process_volume_component_set_sharpen(&self, id: EntityId, value: &SharpenSettings) {
        self.write(id, "post_process_volume_component_set_sharpen", |r| {
            r.post_process.as_mut()?.sharpen = *value;
            Some(())
        });
    }

    fn post_process_volume_component_get_vignette(&self, id: EntityId, out: &mut VignetteSettings) {
        self.read_into(id, out, |r| Some(r.post_process.as_ref()?.vignette));
    }

    fn post_process_volume_component_set_vignette(&self, id: EntityId, value: &VignetteSettings) {
        self.write(id, "post_process_volume_component_set_vignette", |r| {
            r.post_process.as_mut()?.vignette = *value;
            Some(())
        });
    }

    // Asset registry

    fn asset_registry_load(&self, path: &str, kind: AssetType) -> AssetHandle {
        self.assets.borrow_mut().load(path, kind)
    }

    fn asset_registry_unload(&self, handle: AssetHandle) {
        if !self.assets.borrow_mut().unload(handle) {
            warn!(handle = %handle, "unload of unknown asset ignored");
        }
    }

    // Scene

    fn scene_manager_load_scene(&self, path: &str) {
        info!(path, "scene switch scheduled for end of frame");
        *self.pending_scene.borrow_mut() = Some(path.to_owned());
    }

    // Input

    fn input_is_key_pressed(&self, key: KeyCode) -> bool {
        self.input.borrow().is_key_pressed(key)
    }

    fn input_is_key_released(&self, key: KeyCode) -> bool {
        self.input.borrow().is_key_released(key)
    }

    fn input_is_mouse_pressed(&self, button: MouseCode) -> bool {
        self.input.borrow().is_mouse_pressed(button)
    }

    fn input_is_mouse_released(&self, button: MouseCode) -> bool {
        self.input.borrow().is_mouse_released(button)
    }

    fn input_get_mouse_position(&self, out: &mut Vector2) {
        *out = self.input.borrow().mouse_position();
    }

    fn input_get_scroll_offset(&self, out: &mut Vector2) {
        *out = self.input.borrow().scroll_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_defaults_after_add() {
        let engine = HeadlessEngine::new();
        let id = engine.create_entity("e", EntityId::INVALID);
        for kind in ComponentKind::ALL {
            engine.entity_add_component(id, *kind);
            assert!(engine.entity_has_component(id, *kind));
        }

        let mut aspect = 0.0;
        engine.camera_component_camera_get_aspect_ratio(id, &mut aspect);
        assert_eq!(aspect, 1.77);
        assert_eq!(engine.text_renderer_component_get_text(id), "Add a Caption!");
        assert_eq!(engine.rigidbody2d_component_get_type(id), BodyType::Static);
        assert_eq!(engine.circle_collider2d_component_get_radius(id), 0.5);
        assert_eq!(engine.collider2d_component_get_friction(id, ColliderKind::Box), 0.5);

        let mut tiling = Vector2::ZERO;
        engine.sprite_renderer_component_get_tex_tiling(id, &mut tiling);
        assert_eq!(tiling, Vector2::ONE);
    }

    #[test]
    fn test_missing_entity_reads_leave_default() {
        let engine = HeadlessEngine::new();
        let ghost = EntityId(99);
        let mut pos = Vector3::new(4.0, 5.0, 6.0);
        engine.transform_component_get_position(ghost, &mut pos);
        assert_eq!(pos, Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(engine.entity_get_name(ghost), "");
        assert!(!engine.entity_has_component(ghost, ComponentKind::Transform));
        engine.transform_component_set_local_position(ghost, &Vector3::ONE);
    }

    #[test]
    fn test_apply_force_at_offset_adds_torque() {
        let engine = HeadlessEngine::new();
        let id = engine.create_entity("body", EntityId::INVALID);
        engine.entity_add_component(id, ComponentKind::Rigidbody2D);

        engine.rigidbody2d_component_apply_force(
            id,
            &Vector2::new(0.0, 2.0),
            &Vector2::new(1.0, 0.0),
            ForceMode::Force,
        );
        engine.rigidbody2d_component_apply_force(id, &Vector2::X, &Vector2::ZERO, ForceMode::Impulse);

        let body = engine.rigidbody(id).unwrap();
        assert_eq!(body.force, Vector2::new(0.0, 2.0));
        assert_eq!(body.torque, 2.0);
        assert_eq!(body.impulse, Vector2::X);
        assert_eq!(body.angular_impulse, 0.0);
    }

    #[test]
    fn test_trigger_requires_collider() {
        let engine = HeadlessEngine::new();
        let id = engine.create_entity("e", EntityId::INVALID);
        engine.collider2d_component_set_on_trigger(id, ColliderKind::Box, Box::new(|_: EntityId| {}));
        assert!(!engine.has_trigger(id, ColliderKind::Box));
    }

    #[test]
    fn test_client_log_recorded() {
        let engine = HeadlessEngine::new();
        engine.debug_log(LogLevel::Fatal, "boom");
        let logs = engine.recent_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, LogLevel::Fatal);
        assert_eq!(logs[0].message, "boom");
    }
}
