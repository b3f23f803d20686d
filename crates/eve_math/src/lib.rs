//! # eve_math
//!
//! Value payloads that cross the scripting boundary by value. Vectors are
//! [`glam`] types re-exported under the names scripts use; [`Color`] is the
//! engine's RGBA color.
//!
//! All types here are plain `Copy` aggregates with a fixed `#[repr(C)]`
//! layout, so the native side can write results directly into caller-owned
//! memory.

pub mod color;

pub use glam::{Vec2 as Vector2, Vec3 as Vector3, Vec4 as Vector4};

pub use color::Color;
