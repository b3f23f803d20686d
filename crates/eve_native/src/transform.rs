//! Local transform and direction vectors.
//!
//! Rotations are Euler angles in degrees. Composition with the parent chain
//! is additive for position and rotation and multiplicative for scale; that
//! part lives in [`World`](crate::World) since it needs the hierarchy.

use glam::{EulerRot, Quat, Vec3};

/// Local-space transform of one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub local_position: Vec3,
    pub local_rotation: Vec3,
    pub local_scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        local_position: Vec3::ZERO,
        local_rotation: Vec3::ZERO,
        local_scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            local_position: position,
            local_rotation: rotation,
            local_scale: scale,
        }
    }

    pub fn translate(&mut self, translation: Vec3) {
        self.local_position += translation;
    }

    /// Add `angle` degrees around `axis` to the Euler rotation.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        self.local_rotation += angle * axis;
    }

    /// Orientation built from the local Euler angles (X, then Y, then Z
    /// applied last).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        let r = self.local_rotation;
        Quat::from_euler(
            EulerRot::ZYX,
            r.z.to_radians(),
            r.y.to_radians(),
            r.x.to_radians(),
        )
    }

    /// Local -Z rotated by the orientation.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.orientation() * Vec3::NEG_Z).normalize()
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        (self.orientation() * Vec3::X).normalize()
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        (self.orientation() * Vec3::Y).normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_identity_directions() {
        let t = Transform::IDENTITY;
        assert_eq!(t.forward(), Vec3::NEG_Z);
        assert_eq!(t.right(), Vec3::X);
        assert_eq!(t.up(), Vec3::Y);
    }

    #[test]
    fn test_yaw_turns_forward() {
        let t = Transform::new(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0), Vec3::ONE);
        assert!(approx(t.forward(), Vec3::NEG_X));
        assert!(approx(t.right(), Vec3::NEG_Z));
        assert!(approx(t.up(), Vec3::Y));
    }

    #[test]
    fn test_translate_and_rotate_accumulate() {
        let mut t = Transform::IDENTITY;
        t.translate(Vec3::X);
        t.translate(Vec3::X);
        t.rotate(45.0, Vec3::Z);
        t.rotate(45.0, Vec3::Z);
        assert_eq!(t.local_position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(t.local_rotation, Vec3::new(0.0, 0.0, 90.0));
    }
}
