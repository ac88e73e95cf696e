//! OS cursor tracker.
//!
//! [`CursorState`] mirrors what the windowing system reports about the
//! cursor: its position inside the window, the window's surface size, and
//! whether the cursor is visible. Accepted warps are applied to the tracked
//! position immediately, so a read straight after a warp sees the new
//! position even if the platform has not delivered the matching
//! `CursorMoved` yet. A refused warp leaves the last reported position.

use glam::{UVec2, Vec2};

/// Tracked OS cursor and surface dimensions.
#[derive(Debug, Clone)]
pub struct CursorState {
    position: Vec2,
    surface_size: UVec2,
    visible: bool,
    warp_refused: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(UVec2::ZERO)
    }
}

impl CursorState {
    /// Creates a tracker for a surface of the given size, cursor at the origin.
    #[must_use]
    pub fn new(surface_size: UVec2) -> Self {
        Self {
            position: Vec2::ZERO,
            surface_size,
            visible: true,
            warp_refused: false,
        }
    }

    // ── Event handlers ──────────────────────────────────────────────

    /// Process a `CursorMoved` event.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x as f32, y as f32);
    }

    /// Process a `Resized` event.
    pub fn on_resized(&mut self, width: u32, height: u32) {
        self.surface_size = UVec2::new(width, height);
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Record a cursor warp.
    pub fn warp(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Record that the platform refused a warp. The tracked position is
    /// untouched. Returns `true` only for the first refusal.
    pub fn note_warp_refused(&mut self) -> bool {
        !std::mem::replace(&mut self.warp_refused, true)
    }

    /// Record a visibility change.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Current cursor position in window coordinates.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Surface size in pixels.
    #[must_use]
    pub fn surface_size(&self) -> UVec2 {
        self.surface_size
    }

    /// Whether the cursor is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a warp has ever been refused.
    #[must_use]
    pub fn is_warp_refused(&self) -> bool {
        self.warp_refused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_updates_on_move() {
        let mut cursor = CursorState::new(UVec2::new(1280, 720));
        cursor.on_cursor_moved(100.0, 200.0);
        assert_eq!(cursor.position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_warp_visible_immediately() {
        let mut cursor = CursorState::new(UVec2::new(1280, 720));
        cursor.on_cursor_moved(10.0, 10.0);
        cursor.warp(Vec2::new(640.0, 360.0));
        assert_eq!(cursor.position(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_resize_updates_surface() {
        let mut cursor = CursorState::new(UVec2::new(1280, 720));
        cursor.on_resized(1920, 1080);
        assert_eq!(cursor.surface_size(), UVec2::new(1920, 1080));
    }

    #[test]
    fn test_refused_warp_reported_once() {
        let mut cursor = CursorState::new(UVec2::new(1280, 720));
        cursor.on_cursor_moved(900.0, 360.0);
        assert!(!cursor.is_warp_refused());
        assert!(cursor.note_warp_refused());
        assert!(!cursor.note_warp_refused());
        assert!(cursor.is_warp_refused());
        assert_eq!(cursor.position(), Vec2::new(900.0, 360.0));
    }

    #[test]
    fn test_visibility_tracked() {
        let mut cursor = CursorState::default();
        assert!(cursor.is_visible());
        cursor.set_visible(false);
        assert!(!cursor.is_visible());
    }
}
