//! 2D rigidbody.
//!
//! The binding layer does not simulate. Forces and impulses are handed to
//! the native physics world and take effect on its next step.

use eve_interop::{BodyType, ForceMode};
use eve_math::Vector2;

use crate::entity::Entity;
use crate::interop::{read_out, with_native};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rigidbody2D {
    entity: Entity,
}

impl_component!(Rigidbody2D, Rigidbody2D);

impl Rigidbody2D {
    #[must_use]
    pub fn body_type(&self) -> BodyType {
        with_native(|n| n.rigidbody2d_component_get_type(self.entity.id()))
    }

    pub fn set_body_type(&self, body_type: BodyType) {
        with_native(|n| n.rigidbody2d_component_set_type(self.entity.id(), body_type));
    }

    #[must_use]
    pub fn fixed_rotation(&self) -> bool {
        with_native(|n| n.rigidbody2d_component_get_fixed_rotation(self.entity.id()))
    }

    pub fn set_fixed_rotation(&self, fixed: bool) {
        with_native(|n| n.rigidbody2d_component_set_fixed_rotation(self.entity.id(), fixed));
    }

    #[must_use]
    pub fn velocity(&self) -> Vector2 {
        read_out(|n, out| n.rigidbody2d_component_get_velocity(self.entity.id(), out))
    }

    pub fn set_velocity(&self, velocity: Vector2) {
        with_native(|n| n.rigidbody2d_component_set_velocity(self.entity.id(), &velocity));
    }

    /// Angular velocity in degrees per second.
    #[must_use]
    pub fn angular_velocity(&self) -> f32 {
        with_native(|n| n.rigidbody2d_component_get_angular_velocity(self.entity.id()))
    }

    pub fn set_angular_velocity(&self, velocity: f32) {
        with_native(|n| n.rigidbody2d_component_set_angular_velocity(self.entity.id(), velocity));
    }

    /// Apply `force` at the center of mass.
    pub fn apply_force(&self, force: Vector2) {
        self.apply(force, Vector2::ZERO, ForceMode::Force);
    }

    /// Apply `force` at `offset` from the center, which also adds torque.
    pub fn apply_force_at(&self, force: Vector2, offset: Vector2) {
        self.apply(force, offset, ForceMode::Force);
    }

    pub fn apply_impulse(&self, impulse: Vector2) {
        self.apply(impulse, Vector2::ZERO, ForceMode::Impulse);
    }

    pub fn apply_impulse_at(&self, impulse: Vector2, offset: Vector2) {
        self.apply(impulse, offset, ForceMode::Impulse);
    }

    pub fn apply_torque(&self, torque: f32) {
        with_native(|n| n.rigidbody2d_component_apply_torque(self.entity.id(), torque));
    }

    pub fn apply_angular_impulse(&self, impulse: f32) {
        with_native(|n| n.rigidbody2d_component_apply_angular_impulse(self.entity.id(), impulse));
    }

    fn apply(&self, force: Vector2, offset: Vector2, mode: ForceMode) {
        with_native(|n| n.rigidbody2d_component_apply_force(self.entity.id(), &force, &offset, mode));
    }
}
