//! Native entity identifiers.
//!
//! An [`EntityId`] is a lightweight `u64` with no inherent data. Ids are
//! assigned by the native engine and stay unique for as long as the entity
//! is alive. The binding layer never caches liveness.

use serde::{Deserialize, Serialize};

/// A native entity identifier.
///
/// `0` is reserved and means "no entity". Whether a non-zero id still refers
/// to a live entity is only known to the native side.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The null / invalid entity sentinel.
    pub const INVALID: EntityId = EntityId(0);

    /// Create an id from a raw `u64`.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns `true` if this id is non-zero.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Returns `true` if this is the reserved "no entity" id.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_creation() {
        let id = EntityId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert!(id.is_valid());
        assert!(!id.is_none());
    }

    #[test]
    fn test_entity_id_invalid() {
        assert!(!EntityId::INVALID.is_valid());
        assert!(EntityId::INVALID.is_none());
        assert_eq!(EntityId::default(), EntityId::INVALID);
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(7).to_string(), "Entity(7)");
    }
}
