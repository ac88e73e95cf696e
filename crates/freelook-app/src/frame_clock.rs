//! Fixed-timestep frame clock.
//!
//! Simulation runs at a fixed 60 Hz using an accumulator; presentation runs
//! once per window redraw. Each simulation step hands actors a time scale of
//! `dt × 60`, which is exactly 1.0 at the fixed rate.

use std::time::Instant;

use freelook_camera::REFERENCE_FPS;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame accepted before clamping, to avoid a spiral of death.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Time scale handed to actors for a step of `dt` seconds.
pub fn time_scale(dt: f64) -> f32 {
    (dt * f64::from(REFERENCE_FPS)) as f32
}

/// Accumulator-driven fixed-step clock.
pub struct FrameClock {
    previous_time: Instant,
    accumulator: f64,
    frame_count: u64,
    step_count: u64,
}

impl FrameClock {
    /// Creates a clock starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Measures wall time since the last call and runs [`advance`](Self::advance).
    pub fn tick(&mut self, step_fn: impl FnMut(f32)) -> f64 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, step_fn)
    }

    /// Runs zero or more fixed steps for `frame_time` seconds and counts one
    /// presented frame.
    ///
    /// `step_fn(time_scale)` runs once per fixed step. Returns the
    /// interpolation alpha in `[0.0, 1.0)` for presenting.
    pub fn advance(&mut self, frame_time: f64, mut step_fn: impl FnMut(f32)) -> f64 {
        let frame_time = if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time.max(0.0)
        };

        self.accumulator += frame_time;
        while self.accumulator >= FIXED_DT {
            step_fn(time_scale(FIXED_DT));
            self.accumulator -= FIXED_DT;
            self.step_count += 1;
        }

        self.frame_count += 1;
        self.alpha()
    }

    /// Fraction of a step left in the accumulator.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    /// Frames presented so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Fixed steps executed so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
