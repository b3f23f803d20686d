//! # eve_script
//!
//! The API game scripts are written against.
//!
//! Scripts see native, engine-owned entities through lightweight handles.
//! Nothing in this crate owns engine state: every accessor performs one
//! synchronous call through the [`NativeBridge`](eve_interop::NativeBridge)
//! bound to the current thread (see [`interop::bind`]).
//!
//! - [`Entity`]: id-only handle with lookup, destroy, and instantiation.
//! - [`component`]: the closed set of component wrappers and the
//!   capability queries on [`Entity`].
//! - [`Script`] / [`ScriptRegistry`]: script classes, registered by name
//!   and driven by the engine through their lifecycle hooks.
//! - [`debug`], [`input`], [`window`], [`application`], [`scene_manager`],
//!   [`asset`]: engine services.

pub mod application;
pub mod asset;
pub mod component;
pub mod debug;
pub mod entity;
pub mod error;
pub mod input;
pub mod interop;
pub mod scene_manager;
pub mod script;
pub mod spawn;
pub mod window;

pub use component::{
    BoxCollider2D, CameraComponent, CircleCollider2D, Collider2D, Component, OrthographicCamera,
    PostProcessVolume, Rigidbody2D, ScriptComponent, SpriteRenderer, TextRenderer,
    TransformComponent,
};
pub use entity::Entity;
pub use error::ScriptError;
pub use script::{EntityClass, Script, ScriptRef, ScriptRegistry};
pub use spawn::Spawn;

/// Everything a typical script file needs.
pub mod prelude {
    pub use crate::asset::{self, Asset, Texture2D, TextureMetadata};
    pub use crate::component::*;
    pub use crate::entity::Entity;
    pub use crate::error::ScriptError;
    pub use crate::script::{Script, ScriptRef};
    pub use crate::spawn::Spawn;
    pub use crate::{application, debug, input, scene_manager, window};

    pub use eve_interop::{
        AssetHandle, AssetType, BlurSettings, BodyType, ChromaticAberrationSettings, CursorMode,
        GrayScaleSettings, KeyCode, MouseCode, SharpenSettings, VignetteSettings,
    };
    pub use eve_math::{Color, Vector2, Vector3};
}
