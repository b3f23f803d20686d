//! # eve_interop
//!
//! The boundary between managed script code and the native engine.
//!
//! Everything that crosses the boundary is defined here, and nothing here
//! carries behaviour of its own:
//!
//! - [`EntityId`] and [`AssetHandle`]: opaque 64-bit native identifiers.
//! - [`ComponentKind`]: the closed set of component selectors.
//! - Enumerations with fixed discriminants ([`BodyType`], [`AssetType`],
//!   [`CursorMode`], [`LogLevel`], [`KeyCode`], [`MouseCode`], ...).
//! - Settings blocks ([`VignetteSettings`], [`BlurSettings`], ...).
//! - [`NativeBridge`]: the call table the managed layer consumes.
//! - [`ManagedRuntime`] / [`ScriptHooks`]: the calls the native side makes
//!   back into managed code.

#[macro_use]
mod macros;

pub mod asset;
pub mod bridge;
pub mod component;
pub mod entity;
pub mod error;
pub mod input;
pub mod log;
pub mod physics;
pub mod runtime;
pub mod settings;
pub mod window;

pub use asset::{AssetHandle, AssetType};
pub use bridge::NativeBridge;
pub use component::ComponentKind;
pub use entity::EntityId;
pub use error::InteropError;
pub use input::{KeyCode, MouseCode};
pub use log::LogLevel;
pub use physics::{BodyType, ColliderKind, ForceMode, TriggerCallback};
pub use runtime::{ManagedRuntime, ScriptHooks, ScriptInstance, ScriptObject};
pub use settings::{
    BlurSettings, ChromaticAberrationSettings, GrayScaleSettings, SharpenSettings,
    VignetteSettings,
};
pub use window::CursorMode;

pub use eve_math::{Color, Vector2, Vector3};
