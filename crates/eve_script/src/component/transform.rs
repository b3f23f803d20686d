//! Position, rotation and scale.
//!
//! Local values are relative to the parent; world values are composed by the
//! native side and are read-only here. Rotations are Euler angles in degrees.

use eve_math::Vector3;

use crate::entity::Entity;
use crate::interop::{read_out, with_native};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformComponent {
    entity: Entity,
}

impl_component!(TransformComponent, Transform);

impl TransformComponent {
    /// The parent's transform, looked up afresh.
    #[must_use]
    pub fn parent(&self) -> Option<TransformComponent> {
        self.entity.parent().transform()
    }

    #[must_use]
    pub fn local_position(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_local_position(self.entity.id(), out))
    }

    pub fn set_local_position(&self, position: Vector3) {
        with_native(|n| n.transform_component_set_local_position(self.entity.id(), &position));
    }

    #[must_use]
    pub fn local_rotation(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_local_rotation(self.entity.id(), out))
    }

    pub fn set_local_rotation(&self, rotation: Vector3) {
        with_native(|n| n.transform_component_set_local_rotation(self.entity.id(), &rotation));
    }

    #[must_use]
    pub fn local_scale(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_local_scale(self.entity.id(), out))
    }

    pub fn set_local_scale(&self, scale: Vector3) {
        with_native(|n| n.transform_component_set_local_scale(self.entity.id(), &scale));
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_position(self.entity.id(), out))
    }

    /// World-space rotation.
    #[must_use]
    pub fn rotation(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_rotation(self.entity.id(), out))
    }

    /// World-space scale.
    #[must_use]
    pub fn scale(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_scale(self.entity.id(), out))
    }

    #[must_use]
    pub fn forward(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_forward(self.entity.id(), out))
    }

    #[must_use]
    pub fn right(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_right(self.entity.id(), out))
    }

    #[must_use]
    pub fn up(&self) -> Vector3 {
        read_out(|n, out| n.transform_component_get_up(self.entity.id(), out))
    }

    /// Move by `translation` in local space.
    pub fn translate(&self, translation: Vector3) {
        with_native(|n| n.transform_component_translate(self.entity.id(), &translation));
    }

    /// Rotate by `angle` degrees around `axis`.
    pub fn rotate(&self, angle: f32, axis: Vector3) {
        with_native(|n| n.transform_component_rotate(self.entity.id(), angle, &axis));
    }
}
