//! 2D colliders and trigger callbacks.
//!
//! Box and circle colliders share their material and trigger properties.
//! The shared accessors live on [`Collider2D`] and pass the collider shape
//! along with the entity id so the native side can pick the right
//! component.
//!
//! A collider has a single trigger slot. Registering a callback replaces
//! whatever was there before; nothing is chained. The callback runs during
//! the native physics step, so no ordering relative to `on_update` is
//! implied.

use eve_interop::{ColliderKind, EntityId};
use eve_math::Vector2;
use tracing::debug;

use crate::component::Component;
use crate::entity::Entity;
use crate::interop::{read_out, with_native};

/// Properties common to every 2D collider shape.
pub trait Collider2D: Component {
    const SHAPE: ColliderKind;

    /// Offset of the shape from the entity's origin.
    fn offset(&self) -> Vector2 {
        read_out(|n, out| n.collider2d_component_get_offset(self.entity().id(), Self::SHAPE, out))
    }

    fn set_offset(&self, offset: Vector2) {
        with_native(|n| n.collider2d_component_set_offset(self.entity().id(), Self::SHAPE, &offset));
    }

    /// A trigger reports contacts without producing a collision response.
    fn is_trigger(&self) -> bool {
        with_native(|n| n.collider2d_component_get_is_trigger(self.entity().id(), Self::SHAPE))
    }

    fn set_trigger(&self, trigger: bool) {
        with_native(|n| {
            n.collider2d_component_set_is_trigger(self.entity().id(), Self::SHAPE, trigger)
        });
    }

    fn density(&self) -> f32 {
        with_native(|n| n.collider2d_component_get_density(self.entity().id(), Self::SHAPE))
    }

    fn set_density(&self, density: f32) {
        with_native(|n| n.collider2d_component_set_density(self.entity().id(), Self::SHAPE, density));
    }

    fn friction(&self) -> f32 {
        with_native(|n| n.collider2d_component_get_friction(self.entity().id(), Self::SHAPE))
    }

    fn set_friction(&self, friction: f32) {
        with_native(|n| {
            n.collider2d_component_set_friction(self.entity().id(), Self::SHAPE, friction)
        });
    }

    fn restitution(&self) -> f32 {
        with_native(|n| n.collider2d_component_get_restitution(self.entity().id(), Self::SHAPE))
    }

    fn set_restitution(&self, restitution: f32) {
        with_native(|n| {
            n.collider2d_component_set_restitution(self.entity().id(), Self::SHAPE, restitution)
        });
    }

    /// Impact speed below which collisions do not bounce.
    fn restitution_threshold(&self) -> f32 {
        with_native(|n| {
            n.collider2d_component_get_restitution_threshold(self.entity().id(), Self::SHAPE)
        })
    }

    fn set_restitution_threshold(&self, threshold: f32) {
        with_native(|n| {
            n.collider2d_component_set_restitution_threshold(
                self.entity().id(),
                Self::SHAPE,
                threshold,
            )
        });
    }

    /// Register `callback` to run with the other entity of each trigger
    /// contact. Replaces any callback registered before.
    fn set_on_trigger<F>(&self, mut callback: F)
    where
        F: FnMut(Entity) + 'static,
    {
        let id = self.entity().id();
        let marshaled = Box::new(move |other: EntityId| callback(Entity::new(other)));
        with_native(|n| n.collider2d_component_set_on_trigger(id, Self::SHAPE, marshaled));
        debug!(entity = %id, shape = ?Self::SHAPE, "trigger callback registered");
    }

    /// Remove the registered trigger callback, if any.
    fn clear_on_trigger(&self) {
        with_native(|n| n.collider2d_component_clear_on_trigger(self.entity().id(), Self::SHAPE));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxCollider2D {
    entity: Entity,
}

impl_component!(BoxCollider2D, BoxCollider2D);

impl Collider2D for BoxCollider2D {
    const SHAPE: ColliderKind = ColliderKind::Box;
}

impl BoxCollider2D {
    /// Half extents of the box.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        read_out(|n, out| n.box_collider2d_component_get_size(self.entity.id(), out))
    }

    pub fn set_size(&self, size: Vector2) {
        with_native(|n| n.box_collider2d_component_set_size(self.entity.id(), &size));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleCollider2D {
    entity: Entity,
}

impl_component!(CircleCollider2D, CircleCollider2D);

impl Collider2D for CircleCollider2D {
    const SHAPE: ColliderKind = ColliderKind::Circle;
}

impl CircleCollider2D {
    #[must_use]
    pub fn radius(&self) -> f32 {
        with_native(|n| n.circle_collider2d_component_get_radius(self.entity.id()))
    }

    pub fn set_radius(&self, radius: f32) {
        with_native(|n| n.circle_collider2d_component_set_radius(self.entity.id(), radius));
    }
}
