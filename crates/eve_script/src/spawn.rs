//! Parameters for [`Entity::instantiate`](crate::Entity::instantiate).

use eve_math::Vector3;

use crate::entity::Entity;

/// Where and under whom a new entity is created.
///
/// Omitted fields fall back to: no parent, zero position, zero rotation,
/// unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub parent: Entity,
    pub position: Vector3,
    /// Euler angles in degrees.
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Default for Spawn {
    fn default() -> Self {
        Self {
            parent: Entity::INVALID,
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }
}

impl Spawn {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A root entity at `position`.
    #[must_use]
    pub fn at(position: Vector3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn parent(mut self, parent: Entity) -> Self {
        self.parent = parent;
        self
    }

    #[must_use]
    pub fn position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }
}

impl From<Vector3> for Spawn {
    fn from(position: Vector3) -> Self {
        Self::at(position)
    }
}

impl From<Entity> for Spawn {
    fn from(parent: Entity) -> Self {
        Self::default().parent(parent)
    }
}

impl From<(Entity, Vector3)> for Spawn {
    fn from((parent, position): (Entity, Vector3)) -> Self {
        Self::at(position).parent(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spawn = Spawn::default();
        assert_eq!(spawn.parent, Entity::INVALID);
        assert_eq!(spawn.position, Vector3::ZERO);
        assert_eq!(spawn.rotation, Vector3::ZERO);
        assert_eq!(spawn.scale, Vector3::ONE);
    }

    #[test]
    fn test_explicit_values_win() {
        let parent = Entity::from_raw(9);
        let spawn = Spawn::at(Vector3::X)
            .parent(parent)
            .rotation(Vector3::new(0.0, 0.0, 90.0))
            .scale(Vector3::splat(2.0));
        assert_eq!(spawn.parent, parent);
        assert_eq!(spawn.position, Vector3::X);
        assert_eq!(spawn.rotation.z, 90.0);
        assert_eq!(spawn.scale, Vector3::splat(2.0));
    }

    #[test]
    fn test_conversions_fill_remaining_defaults() {
        let spawn: Spawn = (Entity::from_raw(3), Vector3::Y).into();
        assert_eq!(spawn.parent.id().raw(), 3);
        assert_eq!(spawn.position, Vector3::Y);
        assert_eq!(spawn.scale, Vector3::ONE);

        let spawn: Spawn = Entity::from_raw(4).into();
        assert_eq!(spawn.position, Vector3::ZERO);
    }
}
