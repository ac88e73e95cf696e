//! Per-frame update contract shared by every camera actor.
//!
//! A driver loop calls [`Actor::update_world`] once per simulated frame and
//! [`Actor::post_render`] once per presented frame. Actors hold no reference
//! to their entity or to the host; both arrive as arguments.

use freelook_input::LookInput;
use glam::Vec2;

use crate::entity::Entity;

/// Host context for one simulated frame.
pub struct Frame<'a> {
    /// Input capability, or `None` while the host has no window yet.
    pub input: Option<&'a mut dyn LookInput>,
    /// Motion multiplier relative to the 60 Hz reference rate (1.0 at 60 Hz).
    pub time_scale: f32,
}

impl<'a> Frame<'a> {
    /// A frame with an input context.
    pub fn new(input: &'a mut dyn LookInput, time_scale: f32) -> Self {
        Self {
            input: Some(input),
            time_scale,
        }
    }

    /// A frame without an input context.
    pub fn headless(time_scale: f32) -> Self {
        Self {
            input: None,
            time_scale,
        }
    }
}

/// A behaviour attached to one entity.
pub trait Actor {
    /// Advance one simulated frame.
    fn update_world(&mut self, entity: &mut dyn Entity, frame: &mut Frame<'_>);

    /// Draw any overlay after the scene has rendered.
    fn post_render(&self, _overlay: &mut dyn Overlay) {}
}

/// Compositing mode for overlay draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Overwrite destination pixels.
    #[default]
    Solid,
    /// Alpha-blend over the destination.
    Alpha,
}

/// A 2-D surface actors can draw text onto.
pub trait Overlay {
    /// Current blend mode.
    fn blend_mode(&self) -> BlendMode;
    /// Change the blend mode for subsequent draws.
    fn set_blend_mode(&mut self, mode: BlendMode);
    /// Draw one line of text with its top-left corner at `anchor`.
    fn draw_text(&mut self, text: &str, anchor: Vec2);
}

/// Run `draw` with `mode` active, then restore the previous blend mode.
pub fn with_blend<R>(
    overlay: &mut dyn Overlay,
    mode: BlendMode,
    draw: impl FnOnce(&mut dyn Overlay) -> R,
) -> R {
    let previous = overlay.blend_mode();
    overlay.set_blend_mode(mode);
    let result = draw(&mut *overlay);
    overlay.set_blend_mode(previous);
    result
}

/// An [`Overlay`] that records what was drawn.
#[derive(Clone, Debug, Default)]
pub struct TextOverlay {
    blend: BlendMode,
    lines: Vec<(String, Vec2, BlendMode)>,
}

impl TextOverlay {
    /// Creates an empty overlay in [`BlendMode::Solid`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines drawn since the last [`clear`](Self::clear), with their anchor
    /// and the blend mode active at the time.
    pub fn lines(&self) -> &[(String, Vec2, BlendMode)] {
        &self.lines
    }

    /// The drawn text joined with `" | "`.
    pub fn joined(&self) -> String {
        self.lines
            .iter()
            .map(|(text, _, _)| text.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Forget drawn lines; the blend mode is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Overlay for TextOverlay {
    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2) {
        self.lines.push((text.to_string(), anchor, self.blend));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_blend_restores_previous_mode() {
        let mut overlay = TextOverlay::new();
        with_blend(&mut overlay, BlendMode::Alpha, |o| {
            o.draw_text("hello", Vec2::new(2.0, 2.0));
        });
        assert_eq!(overlay.blend_mode(), BlendMode::Solid);
        assert_eq!(overlay.lines()[0].2, BlendMode::Alpha);
    }

    #[test]
    fn test_with_blend_returns_value() {
        let mut overlay = TextOverlay::new();
        overlay.set_blend_mode(BlendMode::Alpha);
        let mode = with_blend(&mut overlay, BlendMode::Solid, |o| o.blend_mode());
        assert_eq!(mode, BlendMode::Solid);
        assert_eq!(overlay.blend_mode(), BlendMode::Alpha);
    }

    #[test]
    fn test_joined_and_clear() {
        let mut overlay = TextOverlay::new();
        overlay.draw_text("Raw", Vec2::ZERO);
        overlay.draw_text("fps 60", Vec2::ZERO);
        assert_eq!(overlay.joined(), "Raw | fps 60");
        overlay.clear();
        assert!(overlay.lines().is_empty());
        assert_eq!(overlay.joined(), "");
    }
}
