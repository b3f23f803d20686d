//! Scene switching.

use tracing::info;

use crate::interop::with_native;

/// Request that the scene at `path` replaces the current one.
///
/// The switch is carried out by the engine; entity handles from the old
/// scene resolve as empty afterwards.
pub fn load_scene(path: &str) {
    info!(path, "scene load requested");
    with_native(|n| n.scene_manager_load_scene(path));
}
