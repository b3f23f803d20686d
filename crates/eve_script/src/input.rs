//! Keyboard and mouse state for the current frame.

use eve_interop::{KeyCode, MouseCode};
use eve_math::Vector2;

use crate::interop::{read_out, with_native};

/// `true` while `key` is held down.
#[must_use]
pub fn is_key_pressed(key: KeyCode) -> bool {
    with_native(|n| n.input_is_key_pressed(key))
}

/// `true` if `key` was released since the previous frame.
#[must_use]
pub fn is_key_released(key: KeyCode) -> bool {
    with_native(|n| n.input_is_key_released(key))
}

#[must_use]
pub fn is_mouse_pressed(button: MouseCode) -> bool {
    with_native(|n| n.input_is_mouse_pressed(button))
}

#[must_use]
pub fn is_mouse_released(button: MouseCode) -> bool {
    with_native(|n| n.input_is_mouse_released(button))
}

/// Cursor position in window pixels.
#[must_use]
pub fn mouse_position() -> Vector2 {
    read_out(|n, out| n.input_get_mouse_position(out))
}

/// Scroll accumulated this frame.
#[must_use]
pub fn scroll_offset() -> Vector2 {
    read_out(|n, out| n.input_get_scroll_offset(out))
}
