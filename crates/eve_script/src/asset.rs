//! Assets and the asset registry.
//!
//! An [`Asset`] pairs a native handle with the path and type it was loaded
//! from. Nothing is reference counted on this side: the asset stays loaded
//! until [`Asset::unload`] (or [`unload`]) is called explicitly.

use eve_interop::{AssetHandle, AssetType};
use tracing::debug;

use crate::interop::with_native;

/// Ask the native registry to load `path` as `kind`.
///
/// Loading the same path twice yields the same handle.
pub fn load(path: &str, kind: AssetType) -> AssetHandle {
    let handle = with_native(|n| n.asset_registry_load(path, kind));
    debug!(path, kind = ?kind, handle = %handle, "asset loaded");
    handle
}

pub fn unload(handle: AssetHandle) {
    with_native(|n| n.asset_registry_unload(handle));
    debug!(handle = %handle, "asset unloaded");
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asset {
    handle: AssetHandle,
    path: String,
    kind: AssetType,
}

impl Asset {
    /// Wrap a handle the engine already owns. No native call is made.
    #[must_use]
    pub fn from_handle(handle: AssetHandle, path: impl Into<String>, kind: AssetType) -> Self {
        Self {
            handle,
            path: path.into(),
            kind,
        }
    }

    /// Load `path` through the registry.
    #[must_use]
    pub fn load(path: impl Into<String>, kind: AssetType) -> Self {
        let path = path.into();
        let handle = load(&path, kind);
        Self { handle, path, kind }
    }

    #[must_use]
    pub fn handle(&self) -> AssetHandle {
        self.handle
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn kind(&self) -> AssetType {
        self.kind
    }

    /// Release the native asset.
    pub fn unload(self) {
        unload(self.handle);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Red,
    Rg,
    Rgb,
    Bgr,
    #[default]
    Rgba,
    Bgra,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextureFilteringMode {
    Nearest,
    #[default]
    Linear,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextureWrappingMode {
    Repeat,
    MirroredRepeat,
    #[default]
    ClampToEdge,
    ClampToBorder,
}

/// Sampling and upload options for a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureMetadata {
    pub format: TextureFormat,
    pub min_filter: TextureFilteringMode,
    pub mag_filter: TextureFilteringMode,
    pub wrap_s: TextureWrappingMode,
    pub wrap_t: TextureWrappingMode,
    pub generate_mipmaps: bool,
}

impl Default for TextureMetadata {
    fn default() -> Self {
        Self {
            format: TextureFormat::Rgba,
            min_filter: TextureFilteringMode::Linear,
            mag_filter: TextureFilteringMode::Linear,
            wrap_s: TextureWrappingMode::ClampToEdge,
            wrap_t: TextureWrappingMode::ClampToEdge,
            generate_mipmaps: true,
        }
    }
}

/// A texture asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture2D {
    asset: Asset,
    metadata: TextureMetadata,
}

impl Texture2D {
    /// Load the texture at `path` with default metadata.
    #[must_use]
    pub fn load(path: impl Into<String>) -> Self {
        Self {
            asset: Asset::load(path, AssetType::Texture),
            metadata: TextureMetadata::default(),
        }
    }

    #[must_use]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    #[must_use]
    pub fn handle(&self) -> AssetHandle {
        self.asset.handle()
    }

    #[must_use]
    pub fn metadata(&self) -> TextureMetadata {
        self.metadata
    }

    pub fn set_metadata(&mut self, metadata: TextureMetadata) {
        self.metadata = metadata;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_metadata_defaults() {
        let meta = TextureMetadata::default();
        assert_eq!(meta.format, TextureFormat::Rgba);
        assert_eq!(meta.min_filter, TextureFilteringMode::Linear);
        assert_eq!(meta.mag_filter, TextureFilteringMode::Linear);
        assert_eq!(meta.wrap_s, TextureWrappingMode::ClampToEdge);
        assert_eq!(meta.wrap_t, TextureWrappingMode::ClampToEdge);
        assert!(meta.generate_mipmaps);
    }

    #[test]
    fn test_from_handle_makes_no_native_call() {
        let asset = Asset::from_handle(AssetHandle(5), "textures/a.png", AssetType::Texture);
        assert_eq!(asset.handle(), AssetHandle(5));
        assert_eq!(asset.path(), "textures/a.png");
        assert_eq!(asset.kind(), AssetType::Texture);
    }
}
