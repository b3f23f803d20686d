//! Frame input state fed by the host.

use std::collections::HashSet;

use eve_interop::{KeyCode, MouseCode};
use glam::Vec2;

/// Pressed and released buttons for the current frame.
///
/// "Released" is edge-triggered: it holds from the release until
/// [`end_frame`](Self::end_frame).
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    mouse_down: HashSet<MouseCode>,
    mouse_released: HashSet<MouseCode>,
    mouse_position: Vec2,
    scroll: Vec2,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
        self.keys_released.remove(&key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        if self.keys_down.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    pub fn press_mouse(&mut self, button: MouseCode) {
        self.mouse_down.insert(button);
        self.mouse_released.remove(&button);
    }

    pub fn release_mouse(&mut self, button: MouseCode) {
        if self.mouse_down.remove(&button) {
            self.mouse_released.insert(button);
        }
    }

    pub fn set_mouse_position(&mut self, position: Vec2) {
        self.mouse_position = position;
    }

    /// Accumulate a scroll delta for this frame.
    pub fn scroll(&mut self, delta: Vec2) {
        self.scroll += delta;
    }

    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    #[must_use]
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    #[must_use]
    pub fn is_mouse_pressed(&self, button: MouseCode) -> bool {
        self.mouse_down.contains(&button)
    }

    #[must_use]
    pub fn is_mouse_released(&self, button: MouseCode) -> bool {
        self.mouse_released.contains(&button)
    }

    #[must_use]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    #[must_use]
    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    /// Clear edge-triggered state.
    pub fn end_frame(&mut self) {
        self.keys_released.clear();
        self.mouse_released.clear();
        self.scroll = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_is_edge_triggered() {
        let mut input = InputState::new();
        input.press_key(KeyCode::Space);
        assert!(input.is_key_pressed(KeyCode::Space));
        assert!(!input.is_key_released(KeyCode::Space));

        input.release_key(KeyCode::Space);
        assert!(!input.is_key_pressed(KeyCode::Space));
        assert!(input.is_key_released(KeyCode::Space));

        input.end_frame();
        assert!(!input.is_key_released(KeyCode::Space));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut input = InputState::new();
        input.release_mouse(MouseCode::Left);
        assert!(!input.is_mouse_released(MouseCode::Left));
    }

    #[test]
    fn test_scroll_accumulates_until_end_of_frame() {
        let mut input = InputState::new();
        input.scroll(Vec2::new(0.0, 1.0));
        input.scroll(Vec2::new(0.0, 2.0));
        assert_eq!(input.scroll_offset(), Vec2::new(0.0, 3.0));
        input.end_frame();
        assert_eq!(input.scroll_offset(), Vec2::ZERO);
    }
}
