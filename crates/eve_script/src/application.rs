use tracing::info;

use crate::interop::with_native;

/// Ask the engine to stop after the current frame.
pub fn quit() {
    info!("quit requested by script");
    with_native(|n| n.application_quit());
}
