//! Script-facing error types.

use eve_interop::EntityId;

/// Errors raised by the scripting API.
///
/// Invalid or stale handles are not errors: they surface as `None`,
/// [`Entity::INVALID`](crate::Entity::INVALID), or default values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// `add_component` was called for a kind the entity already has.
    #[error("{entity} already has a {component}")]
    DuplicateComponent {
        entity: EntityId,
        component: &'static str,
    },

    /// The native side did not report the component after adding it,
    /// typically because the entity no longer exists.
    #[error("{component} is not available on {entity}")]
    ComponentUnavailable {
        entity: EntityId,
        component: &'static str,
    },

    /// A script class with this name is already registered.
    #[error("script class already registered: {0}")]
    DuplicateScriptClass(String),
}
