//! Asset handles and asset type tags.

use serde::{Deserialize, Serialize};

/// Opaque native-assigned asset handle. `0` means "no asset".
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AssetHandle(pub u64);

impl AssetHandle {
    pub const INVALID: AssetHandle = AssetHandle(0);

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asset({})", self.0)
    }
}

boundary_enum! {
    /// What kind of payload an asset path refers to.
    #[derive(Default)]
    pub enum AssetType {
        #[default]
        None = 0,
        Texture = 1,
        Font = 2,
        Scene = 3,
    }
}
