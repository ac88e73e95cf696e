//! The input capability consumed by the mouse-look controller, and a
//! window-independent implementation of it.

use std::fmt;

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::cursor::CursorState;
use crate::keyboard::KeyboardState;
use crate::raw_motion::RawMotion;

/// Which look algorithm drives the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LookMode {
    /// Device deltas from the raw-motion accumulator, immune to screen-edge clamping.
    Raw,
    /// OS cursor position sampled against a recentered reference point.
    #[default]
    Relative,
}

impl LookMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Raw => Self::Relative,
            Self::Relative => Self::Raw,
        }
    }

    /// Short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Raw => "Raw",
            Self::Relative => "Relative",
        }
    }
}

impl fmt::Display for LookMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the controller needs from the windowing/input host.
///
/// Every call is assumed to succeed.
pub trait LookInput {
    /// Drain and return the raw device delta accumulated since the last call.
    fn drain_raw_motion(&mut self) -> Vec2;
    /// Absolute cursor position in window coordinates.
    fn cursor_position(&self) -> Vec2;
    /// Warp the OS cursor.
    fn set_cursor_position(&mut self, position: Vec2);
    /// Show or hide the OS cursor.
    fn set_cursor_visible(&mut self, visible: bool);
    /// Whether `key` is held.
    fn is_key_down(&self, key: KeyCode) -> bool;
    /// Whether `key` went down this frame.
    fn key_hit(&self, key: KeyCode) -> bool;
    /// Discard buffered key and pointer state, including pending raw motion.
    fn flush(&mut self);
    /// Render surface size in pixels.
    fn surface_size(&self) -> UVec2;

    /// Surface center, rounded to whole pixels.
    fn surface_center(&self) -> Vec2 {
        (self.surface_size().as_vec2() / 2.0).round()
    }
}

/// Frame input gathered from host events, with no window attached.
///
/// Windowed hosts wrap this and forward cursor commands to the OS; tests
/// drive it directly.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Held and hit keys.
    pub keyboard: KeyboardState,
    /// Tracked cursor and surface size.
    pub cursor: CursorState,
    /// Raw device motion shared with the event handler.
    pub raw_motion: RawMotion,
}

impl InputState {
    /// Creates input state for a surface of the given size.
    #[must_use]
    pub fn new(surface_size: UVec2) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            cursor: CursorState::new(surface_size),
            raw_motion: RawMotion::new(),
        }
    }

    /// Clears per-frame transients. Call once after all actors have updated.
    pub fn end_frame(&mut self) {
        self.keyboard.clear_transients();
    }
}

impl LookInput for InputState {
    fn drain_raw_motion(&mut self) -> Vec2 {
        self.raw_motion.drain()
    }

    fn cursor_position(&self) -> Vec2 {
        self.cursor.position()
    }

    fn set_cursor_position(&mut self, position: Vec2) {
        self.cursor.warp(position);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor.set_visible(visible);
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_down(key)
    }

    fn key_hit(&self, key: KeyCode) -> bool {
        self.keyboard.key_hit(key)
    }

    fn flush(&mut self) {
        self.keyboard.flush();
        self.raw_motion.clear();
    }

    fn surface_size(&self) -> UVec2 {
        self.cursor.surface_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::RawKeyEvent;
    use winit::event::ElementState;

    #[test]
    fn test_mode_toggles() {
        assert_eq!(LookMode::Raw.toggled(), LookMode::Relative);
        assert_eq!(LookMode::Relative.toggled(), LookMode::Raw);
        assert_eq!(LookMode::default(), LookMode::Relative);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(LookMode::Raw.to_string(), "Raw");
        assert_eq!(LookMode::Relative.to_string(), "Relative");
    }

    #[test]
    fn test_flush_discards_keys_and_motion() {
        let mut input = InputState::new(UVec2::new(1280, 720));
        input.keyboard.process_raw(RawKeyEvent {
            key: KeyCode::KeyW,
            state: ElementState::Pressed,
            repeat: false,
        });
        input.raw_motion.accumulate(40.0, 0.0);
        input.flush();
        assert!(!input.is_key_down(KeyCode::KeyW));
        assert_eq!(input.drain_raw_motion(), Vec2::ZERO);
    }

    #[test]
    fn test_surface_center_default_method() {
        let input = InputState::new(UVec2::new(1280, 720));
        assert_eq!(input.surface_center(), Vec2::new(640.0, 360.0));
        let input = InputState::new(UVec2::new(801, 601));
        assert_eq!(input.surface_center(), Vec2::new(401.0, 301.0));
    }

    #[test]
    fn test_end_frame_clears_hits_only() {
        let mut input = InputState::new(UVec2::new(1280, 720));
        input.keyboard.process_raw(RawKeyEvent {
            key: KeyCode::F1,
            state: ElementState::Pressed,
            repeat: false,
        });
        assert!(input.key_hit(KeyCode::F1));
        input.end_frame();
        assert!(!input.key_hit(KeyCode::F1));
        assert!(input.is_key_down(KeyCode::F1));
    }

    #[test]
    fn test_cursor_commands_update_tracker() {
        let mut input = InputState::new(UVec2::new(1280, 720));
        input.set_cursor_position(Vec2::new(5.0, 6.0));
        input.set_cursor_visible(false);
        assert_eq!(input.cursor_position(), Vec2::new(5.0, 6.0));
        assert!(!input.cursor.is_visible());
    }
}
