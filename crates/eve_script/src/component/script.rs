use crate::entity::Entity;
use crate::interop::with_native;

/// Binds an entity to a script class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptComponent {
    entity: Entity,
}

impl_component!(ScriptComponent, Script);

impl ScriptComponent {
    /// Fully qualified name of the bound class. Empty if none is bound.
    #[must_use]
    pub fn class_name(&self) -> String {
        with_native(|n| n.script_component_get_class_name(self.entity.id()))
    }
}
