//! Physics enumerations and the trigger callback signature.

use crate::entity::EntityId;

boundary_enum! {
    /// Simulation mode of a 2D rigidbody. Ordering follows the native engine.
    #[derive(Default)]
    pub enum BodyType {
        #[default]
        Static = 0,
        Dynamic = 1,
        Kinematic = 2,
    }
}

boundary_enum! {
    /// Selects which collider family a shared collider call addresses.
    pub enum ColliderKind {
        Box = 0,
        Circle = 1,
    }
}

boundary_enum! {
    /// How a force is applied to a rigidbody.
    #[derive(Default)]
    pub enum ForceMode {
        /// Continuous force, integrated over the step.
        #[default]
        Force = 0,
        /// Instant change in momentum.
        Impulse = 1,
    }
}

/// Invoked by the native side with the id of the other entity in a trigger
/// contact.
pub type TriggerCallback = Box<dyn FnMut(EntityId)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_type_follows_native_ordering() {
        assert_eq!(BodyType::Static.as_raw(), 0);
        assert_eq!(BodyType::Dynamic.as_raw(), 1);
        assert_eq!(BodyType::Kinematic.as_raw(), 2);
        assert_eq!(BodyType::default(), BodyType::Static);
    }

    #[test]
    fn test_body_type_rejects_out_of_range() {
        assert!(BodyType::try_from(3).is_err());
        assert_eq!(BodyType::try_from(1), Ok(BodyType::Dynamic));
    }
}
