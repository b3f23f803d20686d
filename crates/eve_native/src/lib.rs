//! # eve_native
//!
//! A headless, in-memory engine that implements
//! [`NativeBridge`](eve_interop::NativeBridge).
//!
//! It keeps the entity hierarchy, component data, script instances, trigger
//! slots, the asset registry and frame input, and it drives the script
//! lifecycle. Nothing is rendered and no physics is simulated: forces are
//! accumulated on the rigidbody for inspection, and the host delivers
//! trigger contacts with [`HeadlessEngine::signal_trigger`].
//!
//! ```ignore
//! let engine = Rc::new(HeadlessEngine::new());
//! engine.set_runtime(Rc::new(registry));
//! let _guard = eve_script::interop::bind(engine.clone());
//! engine.start_runtime();
//! engine.step();
//! ```

pub mod assets;
pub mod bridge;
pub mod components;
pub mod config;
pub mod engine;
pub mod input;
pub mod transform;
pub mod world;

pub use assets::{AssetEntry, AssetRegistry};
pub use components::{
    BoxColliderData, CameraData, CircleColliderData, ColliderData, PostProcessData, RigidbodyData,
    ScriptData, SpriteData, TextData,
};
pub use config::HeadlessConfig;
pub use engine::{HeadlessEngine, LogRecord};
pub use input::InputState;
pub use transform::Transform;
pub use world::{EntityRecord, World};
