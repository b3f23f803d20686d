//! Script classes and their registration.
//!
//! A script class is a Rust type implementing [`Script`]. The native side
//! only knows classes by their fully qualified name, so every class is
//! registered once in a [`ScriptRegistry`], which the engine consults when an
//! entity is bound to a class name.
//!
//! Live instances are shared as [`ScriptRef`]s: the engine holds one for
//! lifecycle dispatch and script code can recover another through
//! [`Entity::as_script`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use eve_interop::{EntityId, ManagedRuntime, ScriptHooks, ScriptInstance};
use tracing::{debug, error, warn};

use crate::entity::Entity;
use crate::error::ScriptError;

/// Shared handle to a live script instance.
pub type ScriptRef<T> = Rc<RefCell<T>>;

/// User-authored per-entity game logic.
///
/// Hooks return `anyhow::Result`. An error is logged with the entity and
/// class and ends only that entity's current callback.
pub trait Script: 'static {
    /// Fully qualified class name, e.g. `"Sandbox.Player"`.
    const CLASS_NAME: &'static str;

    /// Build a fresh instance bound to `entity`.
    fn new(entity: Entity) -> Self;

    /// The entity this instance is bound to.
    fn entity(&self) -> Entity;

    /// Called once before the first `on_update`.
    fn on_create(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called every frame with the frame delta in seconds.
    fn on_update(&mut self, _dt: f32) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called once when the entity is destroyed.
    fn on_destroy(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Anything [`Entity::instantiate`] can produce.
///
/// The plain [`Entity`] always yields a handle, which is [`Entity::INVALID`]
/// if the native side created nothing. Every [`Script`] type binds the new
/// entity to its class and yields the live instance.
pub trait EntityClass {
    /// Class to bind after creation, `None` for a plain entity.
    const SCRIPT_CLASS: Option<&'static str>;

    type Handle;

    fn resolve(entity: Entity) -> Option<Self::Handle>;
}

impl EntityClass for Entity {
    const SCRIPT_CLASS: Option<&'static str> = None;

    type Handle = Entity;

    fn resolve(entity: Entity) -> Option<Entity> {
        Some(entity)
    }
}

impl<T: Script> EntityClass for T {
    const SCRIPT_CLASS: Option<&'static str> = Some(<T as Script>::CLASS_NAME);

    type Handle = ScriptRef<T>;

    fn resolve(entity: Entity) -> Option<ScriptRef<T>> {
        entity.as_script::<T>()
    }
}

type Constructor = fn(EntityId) -> ScriptInstance;

/// Class name → constructor table handed to the native side.
#[derive(Default)]
pub struct ScriptRegistry {
    classes: HashMap<&'static str, Constructor>,
}

impl ScriptRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under [`Script::CLASS_NAME`].
    pub fn register<T: Script>(&mut self) -> Result<&mut Self, ScriptError> {
        if self.classes.contains_key(T::CLASS_NAME) {
            return Err(ScriptError::DuplicateScriptClass(T::CLASS_NAME.to_owned()));
        }
        self.classes.insert(T::CLASS_NAME, construct::<T>);
        debug!(class = T::CLASS_NAME, "script class registered");
        Ok(self)
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<T: Script>(mut self) -> Result<Self, ScriptError> {
        self.register::<T>()?;
        Ok(self)
    }

    #[must_use]
    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registered class names, sorted.
    #[must_use]
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.classes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl ManagedRuntime for ScriptRegistry {
    fn class_exists(&self, class_name: &str) -> bool {
        self.contains(class_name)
    }

    fn create_instance(&self, class_name: &str, entity: EntityId) -> Option<ScriptInstance> {
        let Some(constructor) = self.classes.get(class_name) else {
            warn!(class = class_name, entity = %entity, "unknown script class");
            return None;
        };
        Some(constructor(entity))
    }
}

fn construct<T: Script>(id: EntityId) -> ScriptInstance {
    let script: ScriptRef<T> = Rc::new(RefCell::new(T::new(Entity::new(id))));
    ScriptInstance {
        class_name: T::CLASS_NAME.to_owned(),
        object: script.clone(),
        hooks: Rc::new(Lifecycle { script }),
    }
}

/// Routes native lifecycle calls to one typed instance.
struct Lifecycle<T: Script> {
    script: ScriptRef<T>,
}

impl<T: Script> Lifecycle<T> {
    fn dispatch(&self, hook: &'static str, f: impl FnOnce(&mut T) -> anyhow::Result<()>) {
        let Ok(mut script) = self.script.try_borrow_mut() else {
            warn!(class = T::CLASS_NAME, hook, "script instance is busy, hook skipped");
            return;
        };
        let entity = script.entity();
        if let Err(err) = f(&mut *script) {
            error!(
                entity = %entity.id(),
                class = T::CLASS_NAME,
                hook,
                error = %format!("{err:#}"),
                "script hook failed"
            );
        }
    }
}

impl<T: Script> ScriptHooks for Lifecycle<T> {
    fn on_create(&self) {
        self.dispatch("on_create", T::on_create);
    }

    fn on_update(&self, dt: f32) {
        self.dispatch("on_update", |script| script.on_update(dt));
    }

    fn on_destroy(&self) {
        self.dispatch("on_destroy", T::on_destroy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        entity: Entity,
        created: u32,
    }

    impl Script for Counter {
        const CLASS_NAME: &'static str = "Tests.Counter";

        fn new(entity: Entity) -> Self {
            Self { entity, created: 0 }
        }

        fn entity(&self) -> Entity {
            self.entity
        }

        fn on_create(&mut self) -> anyhow::Result<()> {
            self.created += 1;
            Ok(())
        }
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ScriptRegistry::new();
        registry.register::<Counter>().unwrap();
        let err = registry.register::<Counter>().err().unwrap();
        assert_eq!(err, ScriptError::DuplicateScriptClass("Tests.Counter".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_instance_binds_entity() {
        let registry = ScriptRegistry::new().with::<Counter>().unwrap();
        assert!(registry.class_exists("Tests.Counter"));

        let instance = registry.create_instance("Tests.Counter", EntityId(77)).unwrap();
        assert_eq!(instance.class_name, "Tests.Counter");

        let counter = instance.object.downcast::<RefCell<Counter>>().unwrap();
        assert_eq!(counter.borrow().entity().id(), EntityId(77));
    }

    #[test]
    fn test_unknown_class_yields_none() {
        let registry = ScriptRegistry::new();
        assert!(registry.create_instance("Tests.Missing", EntityId(1)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_hooks_reach_instance() {
        let registry = ScriptRegistry::new().with::<Counter>().unwrap();
        let instance = registry.create_instance("Tests.Counter", EntityId(2)).unwrap();
        instance.hooks.on_create();

        let counter = instance.object.downcast::<RefCell<Counter>>().unwrap();
        assert_eq!(counter.borrow().created, 1);
    }

    #[test]
    fn test_busy_instance_skips_hook() {
        let registry = ScriptRegistry::new().with::<Counter>().unwrap();
        let instance = registry.create_instance("Tests.Counter", EntityId(3)).unwrap();
        let counter = instance.object.clone().downcast::<RefCell<Counter>>().unwrap();

        let held = counter.borrow_mut();
        instance.hooks.on_create();
        drop(held);

        assert_eq!(counter.borrow().created, 0);
    }

    #[test]
    fn test_plain_entity_resolves_even_when_empty() {
        assert_eq!(Entity::resolve(Entity::INVALID), Some(Entity::INVALID));
        let entity = Entity::from_raw(9);
        assert_eq!(Entity::resolve(entity), Some(entity));
    }
}
