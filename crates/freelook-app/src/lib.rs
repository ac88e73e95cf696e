//! Freelook application: window host, fixed-step clock, and demo scene.

pub mod error;
pub mod frame_clock;
pub mod scene;
pub mod window;

pub use error::AppError;
pub use frame_clock::{FIXED_DT, FrameClock};
pub use scene::Scene;
pub use window::{App, run};
