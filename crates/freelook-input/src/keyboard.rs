//! Frame-coherent keyboard state tracker.
//!
//! [`KeyboardState`] accumulates winit key events during a frame and answers
//! two questions for any key code: is it held, and was it hit this frame.
//! Physical key codes are used so WASD works on any layout.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The key involved.
    pub key: KeyCode,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is a repeat event.
    pub repeat: bool,
}

/// Tracks per-frame keyboard state.
///
/// # Usage
///
/// 1. Forward every [`KeyEvent`] to [`process_event`](Self::process_event).
/// 2. Query with [`is_down`](Self::is_down) and [`key_hit`](Self::key_hit).
/// 3. Call [`clear_transients`](Self::clear_transients) at the end of each frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    down: HashSet<KeyCode>,
    hit: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Creates a new `KeyboardState` with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`]. Unidentified keys are ignored.
    pub fn process_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.process_raw(RawKeyEvent {
                key,
                state: event.state,
                repeat: event.repeat,
            });
        }
    }

    /// Processes a [`RawKeyEvent`] (platform-independent, test-friendly).
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.down.insert(event.key);
                self.hit.insert(event.key);
            }
            ElementState::Released => {
                self.down.remove(&event.key);
            }
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Returns `true` only during the frame the key went down.
    #[must_use]
    pub fn key_hit(&self, key: KeyCode) -> bool {
        self.hit.contains(&key)
    }

    /// Clears the per-frame hit set. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.hit.clear();
    }

    /// Forgets every held and hit key, as if all keys were released unseen.
    pub fn flush(&mut self) {
        self.down.clear();
        self.hit.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(key: KeyCode, state: ElementState, repeat: bool) -> RawKeyEvent {
        RawKeyEvent { key, state, repeat }
    }

    #[test]
    fn test_initial_state_no_keys_down() {
        let kb = KeyboardState::new();
        for key in [KeyCode::KeyW, KeyCode::ShiftLeft, KeyCode::F1] {
            assert!(!kb.is_down(key));
            assert!(!kb.key_hit(key));
        }
    }

    #[test]
    fn test_press_sets_down_and_hit() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        assert!(kb.is_down(KeyCode::KeyW));
        assert!(kb.key_hit(KeyCode::KeyW));
    }

    #[test]
    fn test_hit_lasts_one_frame() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::F1, ElementState::Pressed, false));
        kb.clear_transients();
        assert!(!kb.key_hit(KeyCode::F1));
        assert!(kb.is_down(KeyCode::F1));
    }

    #[test]
    fn test_release_clears_down() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyD, ElementState::Pressed, false));
        kb.process_raw(raw(KeyCode::KeyD, ElementState::Released, false));
        assert!(!kb.is_down(KeyCode::KeyD));
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, true));
        assert!(!kb.is_down(KeyCode::KeyA));
        assert!(!kb.key_hit(KeyCode::KeyA));
    }

    #[test]
    fn test_flush_forgets_everything() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        kb.process_raw(raw(KeyCode::ShiftLeft, ElementState::Pressed, false));
        kb.flush();
        assert!(!kb.is_down(KeyCode::KeyW));
        assert!(!kb.is_down(KeyCode::ShiftLeft));
        assert!(!kb.key_hit(KeyCode::KeyW));
    }
}
