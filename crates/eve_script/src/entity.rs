//! The script-facing entity handle.
//!
//! An [`Entity`] is a copyable wrapper over a native [`EntityId`]. It owns
//! nothing: every accessor is a fresh round trip to the native side, so a
//! handle always reflects current engine state rather than the state at the
//! time it was created.
//!
//! ## Lifecycle
//!
//! ```text
//! Unbound (id 0) ──instantiate/lookup──▶ Bound (id ≠ 0) ──destroy()──▶ Unbound
//! ```
//!
//! A bound handle over an id the engine no longer knows behaves as an empty
//! entity: no components, empty name, no parent.

use std::cell::RefCell;

use eve_interop::EntityId;
use tracing::{debug, warn};

use crate::component::{self, Component, TransformComponent};
use crate::error::ScriptError;
use crate::interop::with_native;
use crate::script::{EntityClass, Script, ScriptRef};
use crate::spawn::Spawn;

/// A handle to a native entity.
///
/// Equality and hashing use the id only, so handles work as map keys and
/// two independently created handles to the same id compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    id: EntityId,
}

impl Entity {
    /// The "no entity" handle.
    pub const INVALID: Entity = Entity {
        id: EntityId::INVALID,
    };

    /// Wrap an existing id. The native side is not consulted.
    #[must_use]
    pub const fn new(id: EntityId) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self::new(EntityId::from_raw(id))
    }

    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns `true` if the handle holds a non-zero id.
    ///
    /// This does not check that the native entity is still alive.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.id.is_valid()
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.id.is_none()
    }

    #[must_use]
    pub fn name(&self) -> String {
        with_native(|native| native.entity_get_name(self.id))
    }

    /// The current parent, or [`Entity::INVALID`] for root entities.
    #[must_use]
    pub fn parent(&self) -> Entity {
        Entity::new(with_native(|native| native.entity_get_parent(self.id)))
    }

    /// Shorthand for `get_component::<TransformComponent>()`.
    #[must_use]
    pub fn transform(&self) -> Option<TransformComponent> {
        self.get_component::<TransformComponent>()
    }

    #[must_use]
    pub fn has_component<K: Component>(&self) -> bool {
        if self.is_none() {
            return false;
        }
        with_native(|native| native.entity_has_component(self.id, K::KIND))
    }

    /// A fresh `K` wrapper if the entity currently has that component.
    #[must_use]
    pub fn get_component<K: Component>(&self) -> Option<K> {
        self.has_component::<K>().then(|| component::bind::<K>(*self))
    }

    /// Add a `K` component and return a wrapper over it.
    ///
    /// The duplicate check runs before the native call and is not atomic
    /// with it.
    pub fn add_component<K: Component>(&self) -> Result<K, ScriptError> {
        if self.has_component::<K>() {
            return Err(ScriptError::DuplicateComponent {
                entity: self.id,
                component: K::KIND.managed_name(),
            });
        }

        with_native(|native| native.entity_add_component(self.id, K::KIND));
        debug!(entity = %self.id, component = K::KIND.name(), "component added");

        self.get_component::<K>().ok_or(ScriptError::ComponentUnavailable {
            entity: self.id,
            component: K::KIND.managed_name(),
        })
    }

    /// Ask the native side to destroy the entity, then clear this handle.
    ///
    /// Other copies of the handle keep the old id and resolve as an empty
    /// entity from now on.
    pub fn destroy(&mut self) {
        if self.is_none() {
            return;
        }
        let id = self.id;
        with_native(|native| native.entity_destroy(id));
        debug!(entity = %id, "entity destroyed");
        self.id = EntityId::INVALID;
    }

    /// The first entity named `name` in native storage order, or
    /// [`Entity::INVALID`].
    #[must_use]
    pub fn find_by_name(name: &str) -> Entity {
        Entity::new(with_native(|native| native.entity_find_by_name(name)))
    }

    /// Create a new entity and, for script classes, bind it to `T`.
    ///
    /// `spawn` accepts a [`Spawn`], a position, a parent, or a
    /// `(parent, position)` pair; everything omitted takes its default.
    ///
    /// A plain [`Entity`] comes back as [`Entity::INVALID`] if the native
    /// side refused to create it. For a script class, returns `None` when
    /// there is no bound instance of exactly `T`.
    pub fn instantiate<T: EntityClass>(name: &str, spawn: impl Into<Spawn>) -> Option<T::Handle> {
        let spawn = spawn.into();
        let id = with_native(|native| {
            native.entity_instantiate(
                name,
                spawn.parent.id(),
                &spawn.position,
                &spawn.rotation,
                &spawn.scale,
            )
        });
        let entity = Entity::new(id);
        if entity.is_none() {
            warn!(name, "native side did not create the entity");
            return T::resolve(entity);
        }

        if let Some(class) = T::SCRIPT_CLASS {
            let bound = with_native(|native| native.entity_assign_script(id, class));
            if bound.is_none() {
                warn!(entity = %id, class, "script class is not registered");
            }
        }

        debug!(entity = %id, name, parent = %spawn.parent.id(), "entity instantiated");
        T::resolve(entity)
    }

    /// The script instance bound to this entity, if it is exactly a `T`.
    #[must_use]
    pub fn as_script<T: Script>(&self) -> Option<ScriptRef<T>> {
        if self.is_none() {
            return None;
        }
        let object = with_native(|native| native.get_script_instance(self.id))?;
        object.downcast::<RefCell<T>>().ok()
    }
}

impl From<EntityId> for Entity {
    fn from(id: EntityId) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.id, f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::rc::Rc;

    use eve_native::HeadlessEngine;

    use super::*;
    use crate::interop;

    #[test]
    fn test_equality_by_id() {
        let a = Entity::from_raw(5);
        let b = Entity::new(EntityId(5));
        assert_eq!(a, b);
        assert_ne!(a, Entity::from_raw(6));
        assert_eq!(Entity::INVALID, Entity::from_raw(0));
    }

    #[test]
    fn test_usable_as_key() {
        let mut set = HashSet::new();
        set.insert(Entity::from_raw(1));
        set.insert(Entity::from_raw(1));
        set.insert(Entity::INVALID);
        set.insert(Entity::default());
        assert_eq!(set.len(), 2);

        let mut scores = HashMap::new();
        scores.insert(Entity::from_raw(3), 10);
        assert_eq!(scores.get(&Entity::from_raw(3)), Some(&10));
    }

    #[test]
    fn test_validity_predicates() {
        assert!(Entity::INVALID.is_none());
        assert!(!Entity::INVALID.is_valid());
        assert!(Entity::from_raw(1).is_valid());
    }

    #[test]
    fn test_has_component_on_null_entity_skips_native() {
        // No bridge bound: a native call would panic.
        assert!(!Entity::INVALID.has_component::<TransformComponent>());
        assert!(Entity::INVALID.get_component::<TransformComponent>().is_none());
    }

    #[test]
    fn test_destroy_resets_handle() {
        let engine = Rc::new(HeadlessEngine::new());
        let _guard = interop::bind(engine.clone());

        let mut entity = Entity::new(engine.create_entity("doomed", EntityId::INVALID));
        let copy = entity;
        entity.destroy();

        assert!(entity.is_none());
        assert!(copy.is_valid());
        assert!(copy.transform().is_none());
        assert!(Entity::find_by_name("doomed").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Entity::from_raw(12).to_string(), "Entity(12)");
    }
}
