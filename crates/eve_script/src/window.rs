//! Main window settings.

use eve_interop::CursorMode;

use crate::interop::with_native;

#[must_use]
pub fn cursor_mode() -> CursorMode {
    with_native(|n| n.window_get_cursor_mode())
}

pub fn set_cursor_mode(mode: CursorMode) {
    with_native(|n| n.window_set_cursor_mode(mode));
}
