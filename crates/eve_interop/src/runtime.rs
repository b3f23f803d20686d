//! Calls the native side makes back into managed code.
//!
//! The native engine never sees script types. It asks a [`ManagedRuntime`]
//! to build an instance for a class name, keeps the opaque result keyed by
//! entity, and drives the instance's lifecycle through [`ScriptHooks`].

use std::any::Any;
use std::rc::Rc;

use crate::entity::EntityId;

/// A managed script object as seen by the native side.
pub type ScriptObject = Rc<dyn Any>;

/// Per-instance lifecycle entry points.
///
/// Implementations report their own failures; the native caller only needs
/// to know that the call returned.
pub trait ScriptHooks {
    fn on_create(&self);
    fn on_update(&self, dt: f32);
    fn on_destroy(&self);
}

/// A live script instance bound to one entity.
#[derive(Clone)]
pub struct ScriptInstance {
    /// Fully qualified class name (`Namespace.Class`).
    pub class_name: String,
    /// The managed object itself, recovered on the managed side by downcast.
    pub object: ScriptObject,
    pub hooks: Rc<dyn ScriptHooks>,
}

impl std::fmt::Debug for ScriptInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptInstance")
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

/// Class lookup and instance construction by fully qualified name.
pub trait ManagedRuntime {
    fn class_exists(&self, class_name: &str) -> bool;

    /// Build a new instance of `class_name` bound to `entity`.
    ///
    /// Returns `None` when no such class is registered.
    fn create_instance(&self, class_name: &str, entity: EntityId) -> Option<ScriptInstance>;
}
