//! Host-side input plumbing for mouse look: keyboard state, OS cursor
//! tracking, the raw-motion accumulator, and the [`LookInput`] capability
//! trait the controller consumes.

pub mod cursor;
pub mod keyboard;
pub mod look_input;
pub mod raw_motion;

pub use cursor::CursorState;
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use look_input::{InputState, LookInput, LookMode};
pub use raw_motion::RawMotion;
