//! Component capabilities.
//!
//! A component wrapper holds nothing but its owning [`Entity`]. Each wrapper
//! type maps at compile time to one [`ComponentKind`], and that tag is the
//! only thing the capability layer sends across the boundary. Property
//! accessors are individual native calls.
//!
//! Wrappers cannot be built directly: they come from
//! [`Entity::get_component`] or [`Entity::add_component`], both of which
//! confirm the capability first. Two wrappers are equal when they belong to
//! the same entity.

use eve_interop::ComponentKind;

use crate::entity::Entity;

mod sealed {
    use crate::entity::Entity;

    pub trait Bind {
        fn bind(entity: Entity) -> Self;
    }
}

/// A component wrapper type with a fixed boundary tag.
pub trait Component: sealed::Bind + Copy + std::fmt::Debug + 'static {
    const KIND: ComponentKind;

    /// The entity that owns this component.
    fn entity(&self) -> Entity;
}

/// Build a `K` wrapper. Callers must have confirmed the capability.
pub(crate) fn bind<K: Component>(entity: Entity) -> K {
    K::bind(entity)
}

macro_rules! impl_component {
    ($ty:ident, $kind:ident) => {
        impl $crate::component::sealed::Bind for $ty {
            fn bind(entity: $crate::entity::Entity) -> Self {
                Self { entity }
            }
        }

        impl $crate::component::Component for $ty {
            const KIND: ::eve_interop::ComponentKind = ::eve_interop::ComponentKind::$kind;

            fn entity(&self) -> $crate::entity::Entity {
                self.entity
            }
        }
    };
}

mod camera;
mod collider;
mod post_process;
mod rigidbody;
mod script;
mod sprite;
mod text;
mod transform;

pub use camera::{CameraComponent, OrthographicCamera};
pub use collider::{BoxCollider2D, CircleCollider2D, Collider2D};
pub use post_process::PostProcessVolume;
pub use rigidbody::Rigidbody2D;
pub use script::ScriptComponent;
pub use sprite::SpriteRenderer;
pub use text::TextRenderer;
pub use transform::TransformComponent;
