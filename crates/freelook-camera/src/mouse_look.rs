//! Mouse-look camera controller.
//!
//! Two look algorithms share one [`LookState`]:
//!
//! - **Raw** reads device deltas from the host's raw-motion accumulator,
//!   normalizes them by a DPI constant, smooths the resulting angular delta
//!   exponentially, and drops components inside a dead zone.
//! - **Relative** samples the OS cursor, warps it back to the surface center,
//!   and turns the offset into rotation. Smoothing here blends the sampled
//!   position toward the previous one, and there is no dead zone.
//!
//! Both algorithms spend the first frame after a reset capturing a baseline
//! and apply no rotation on that frame. The controller also owns keyboard
//! movement for its entity.

use freelook_input::{LookInput, LookMode};
use glam::{DVec2, Vec2, Vec3};
use tracing::{debug, info, trace, warn};
use winit::keyboard::KeyCode;

use crate::actor::{Actor, BlendMode, Frame, Overlay, with_blend};
use crate::entity::Entity;

/// Frame rate movement speeds are expressed against.
pub const REFERENCE_FPS: f32 = 60.0;

/// Smoothed raw-mode deltas smaller than this (in degrees) are treated as zero.
pub const DEAD_ZONE: f32 = 0.001;

/// Where the mode label is drawn.
pub const OVERLAY_ANCHOR: Vec2 = Vec2::new(2.0, 2.0);

/// Degrees of rotation per raw axis unit, before `look_speed`.
const RAW_DEGREES_PER_UNIT: f32 = 100.0;

/// Relative mode turns `look_speed / 10` degrees per pixel.
const RELATIVE_SPEED_DIVISOR: f32 = 10.0;

const FAST_MULTIPLIER: f32 = 10.0;
const SLOW_MULTIPLIER: f32 = 0.25;

/// Tunables for look and movement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookTuning {
    /// Exponential smoothing factor in `[0, 1)`. Zero disables smoothing.
    pub smoothing: f32,
    /// Multiplier on the angular delta.
    pub look_speed: f32,
    /// Units per second at [`REFERENCE_FPS`].
    pub move_speed: f32,
    /// Raw device counts per axis unit.
    pub raw_dpi: f32,
}

impl Default for LookTuning {
    fn default() -> Self {
        Self {
            smoothing: 0.0,
            look_speed: 1.0,
            move_speed: 4.0,
            raw_dpi: 1000.0,
        }
    }
}

/// Keys driving movement. Either key of a modifier pair counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub right: KeyCode,
    pub left: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    /// Multiplies speed by 10. Checked before `slow`.
    pub fast: [KeyCode; 2],
    /// Multiplies speed by 0.25.
    pub slow: [KeyCode; 2],
}

impl Default for MoveBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            right: KeyCode::KeyD,
            left: KeyCode::KeyA,
            up: KeyCode::KeyE,
            down: KeyCode::KeyQ,
            fast: [KeyCode::ShiftLeft, KeyCode::ShiftRight],
            slow: [KeyCode::ControlLeft, KeyCode::ControlRight],
        }
    }
}

/// Look-tracking state shared by both algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LookState {
    /// Whether the baseline has been captured since the last reset.
    pub started: bool,
    /// Cursor position (Relative) or raw axis reading (Raw) seen last frame.
    pub baseline: Vec2,
    /// Authoritative copy of the entity orientation, `(pitch, yaw, roll)`.
    pub rotation: Vec3,
    /// Last smoothed raw-mode delta, `(pitch, yaw)`. Survives resets and
    /// mode swaps; only a new controller starts from zero.
    pub smoothed_delta: Vec2,
    /// Running total of drained raw motion in axis units since the last reset.
    pub raw_axis: DVec2,
}

impl LookState {
    fn capture(&mut self, rotation: Vec3, baseline: Vec2) {
        self.rotation = rotation;
        self.baseline = baseline;
        self.started = true;
        debug!(?rotation, ?baseline, "free-look baseline captured");
    }
}

/// Per-frame mouse-look and fly controller for a camera-like entity.
#[derive(Clone, Debug)]
pub struct MouseLookController {
    /// Look and movement tunables.
    pub tuning: LookTuning,
    /// Movement keys.
    pub bindings: MoveBindings,
    mode: LookMode,
    state: LookState,
}

impl Default for MouseLookController {
    fn default() -> Self {
        Self::new(LookMode::default(), LookTuning::default())
    }
}

impl MouseLookController {
    /// Creates a controller that captures its baseline on the first update.
    pub fn new(mode: LookMode, tuning: LookTuning) -> Self {
        Self {
            tuning,
            bindings: MoveBindings::default(),
            mode,
            state: LookState::default(),
        }
    }

    /// Active look algorithm.
    pub fn mode(&self) -> LookMode {
        self.mode
    }

    /// Current look-tracking state.
    pub fn state(&self) -> &LookState {
        &self.state
    }

    /// Re-baseline against the entity's live orientation and a freshly
    /// centered cursor. Buffered input is discarded; smoothing and mode are kept.
    pub fn reset(&mut self, entity: &dyn Entity, input: &mut dyn LookInput) {
        self.state.started = false;
        self.state.rotation = entity.rotation();
        input.flush();
        self.state.raw_axis = DVec2::ZERO;
        let center = input.surface_center();
        input.set_cursor_position(center);
        self.state.baseline = input.cursor_position();
        debug!(mode = %self.mode, "mouse look reset");
    }

    /// Switch to the other look algorithm and reset.
    pub fn swap_mode(&mut self, entity: &dyn Entity, input: &mut dyn LookInput) {
        self.mode = self.mode.toggled();
        self.reset(entity, input);
        info!(mode = %self.mode, "mouse look mode swapped");
    }

    /// Movement per frame for the current modifier keys.
    pub fn frame_speed(&self, input: &dyn LookInput) -> f32 {
        let mut speed = self.tuning.move_speed / REFERENCE_FPS;
        if self.bindings.fast.iter().any(|&k| input.is_key_down(k)) {
            speed *= FAST_MULTIPLIER;
        } else if self.bindings.slow.iter().any(|&k| input.is_key_down(k)) {
            speed *= SLOW_MULTIPLIER;
        }
        speed
    }

    fn apply_movement(&self, entity: &mut dyn Entity, input: &dyn LookInput) {
        let speed = self.frame_speed(input);
        let keys = &self.bindings;
        if input.is_key_down(keys.up) {
            entity.translate(Vec3::new(0.0, speed, 0.0));
        }
        if input.is_key_down(keys.down) {
            entity.translate(Vec3::new(0.0, -speed, 0.0));
        }
        if input.is_key_down(keys.right) {
            entity.move_local(Vec3::new(speed, 0.0, 0.0));
        }
        if input.is_key_down(keys.left) {
            entity.move_local(Vec3::new(-speed, 0.0, 0.0));
        }
        if input.is_key_down(keys.forward) {
            entity.move_local(Vec3::new(0.0, 0.0, speed));
        }
        if input.is_key_down(keys.back) {
            entity.move_local(Vec3::new(0.0, 0.0, -speed));
        }
    }
}

impl Actor for MouseLookController {
    fn update_world(&mut self, entity: &mut dyn Entity, frame: &mut Frame<'_>) {
        let Some(input) = frame.input.as_deref_mut() else {
            return;
        };
        match self.mode {
            LookMode::Raw => raw_look(&mut self.state, &self.tuning, entity, input),
            LookMode::Relative => relative_look(&mut self.state, &self.tuning, entity, input),
        }
        self.apply_movement(entity, input);
    }

    fn post_render(&self, overlay: &mut dyn Overlay) {
        with_blend(overlay, BlendMode::Alpha, |o| {
            o.draw_text(self.mode.label(), OVERLAY_ANCHOR);
        });
    }
}

fn snap_to_zero(v: f32) -> f32 {
    if v.abs() < DEAD_ZONE { 0.0 } else { v }
}

/// Raw-motion look: consume device deltas, smooth in delta space, dead-zone.
fn raw_look(
    state: &mut LookState,
    tuning: &LookTuning,
    entity: &mut dyn Entity,
    input: &mut dyn LookInput,
) {
    let center = input.surface_center();
    input.set_cursor_position(center);

    let mut drained = input.drain_raw_motion();
    if !drained.is_finite() {
        warn!(?drained, "discarding non-finite raw motion");
        drained = Vec2::ZERO;
    }
    let moved = drained / tuning.raw_dpi;
    state.raw_axis += moved.as_dvec2();
    let reading = state.raw_axis.as_vec2();

    if !state.started {
        state.capture(entity.rotation(), reading);
        return;
    }

    // Vertical motion pitches, horizontal motion yaws.
    let instant = Vec2::new(moved.y, moved.x) * RAW_DEGREES_PER_UNIT * tuning.look_speed;
    let s = tuning.smoothing;
    let smoothed = state.smoothed_delta * s + instant * (1.0 - s);
    state.smoothed_delta = Vec2::new(snap_to_zero(smoothed.x), snap_to_zero(smoothed.y));

    if state.smoothed_delta != Vec2::ZERO {
        state.rotation.x += state.smoothed_delta.x;
        state.rotation.y += state.smoothed_delta.y;
        entity.set_rotation(state.rotation);
        trace!(rotation = ?state.rotation, "raw look");
    }
    state.baseline = reading;
}

/// Cursor look: sample, recenter, smooth in position space. No dead zone.
fn relative_look(
    state: &mut LookState,
    tuning: &LookTuning,
    entity: &mut dyn Entity,
    input: &mut dyn LookInput,
) {
    let sampled = input.cursor_position();
    let target = input.surface_center();
    input.set_cursor_position(target);
    // The center is whatever the host reports after the warp.
    let center = input.cursor_position();

    if !state.started {
        state.capture(entity.rotation(), center);
        return;
    }

    let sampled = if sampled.is_finite() {
        sampled
    } else {
        warn!(?sampled, "non-finite cursor position, treating as centered");
        center
    };
    let blended = if tuning.smoothing > 0.0 {
        sampled.lerp(state.baseline, tuning.smoothing)
    } else {
        sampled
    };

    let delta = (blended - center) * (tuning.look_speed / RELATIVE_SPEED_DIVISOR);
    state.rotation.x += delta.y;
    state.rotation.y += delta.x;
    entity.set_rotation(state.rotation);
    trace!(rotation = ?state.rotation, "relative look");
    state.baseline = blended;
}
