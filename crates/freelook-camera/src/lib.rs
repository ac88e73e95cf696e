//! Per-frame camera actors: the mouse-look controller and the spinner, plus
//! the entity, frame, and overlay seams they run against.

pub mod actor;
pub mod entity;
pub mod mouse_look;
pub mod spinner;

pub use actor::{Actor, BlendMode, Frame, Overlay, TextOverlay, with_blend};
pub use entity::{Entity, Transform};
pub use mouse_look::{
    DEAD_ZONE, LookState, LookTuning, MouseLookController, MoveBindings, OVERLAY_ANCHOR,
    REFERENCE_FPS,
};
pub use spinner::Spinner;
