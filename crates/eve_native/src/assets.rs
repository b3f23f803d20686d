//! Path-keyed asset registry.
//!
//! The headless engine does not decode anything. Loading records the path
//! and type and hands out a handle; loading the same path as the same type
//! again returns the same handle until it is unloaded. The same path loaded
//! as another type is a separate asset.

use std::collections::HashMap;

use eve_interop::{AssetHandle, AssetType};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub path: String,
    pub kind: AssetType,
}

#[derive(Debug, Default)]
pub struct AssetRegistry {
    entries: HashMap<AssetHandle, AssetEntry>,
    by_path: HashMap<(String, AssetType), AssetHandle>,
}

impl AssetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` as `kind`. [`AssetType::None`] yields the invalid
    /// handle.
    pub fn load(&mut self, path: &str, kind: AssetType) -> AssetHandle {
        if kind == AssetType::None {
            warn!(path, "refusing to load asset without a type");
            return AssetHandle::INVALID;
        }
        if let Some(&handle) = self.by_path.get(&(path.to_owned(), kind)) {
            return handle;
        }

        let handle = loop {
            let (raw, _) = Uuid::new_v4().as_u64_pair();
            let handle = AssetHandle(raw);
            if handle.is_valid() && !self.entries.contains_key(&handle) {
                break handle;
            }
        };
        self.entries.insert(
            handle,
            AssetEntry {
                path: path.to_owned(),
                kind,
            },
        );
        self.by_path.insert((path.to_owned(), kind), handle);
        debug!(path, kind = ?kind, handle = %handle, "asset registered");
        handle
    }

    /// Returns `true` if the handle was loaded.
    pub fn unload(&mut self, handle: AssetHandle) -> bool {
        let Some(entry) = self.entries.remove(&handle) else {
            return false;
        };
        self.by_path.remove(&(entry.path, entry.kind));
        true
    }

    #[must_use]
    pub fn get(&self, handle: AssetHandle) -> Option<&AssetEntry> {
        self.entries.get(&handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
