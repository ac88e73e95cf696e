//! Demo scene: a camera carrying the mouse-look controller and a box
//! carrying a spinner, stepped together once per simulated frame.

use freelook_camera::{Actor, Frame, LookTuning, MouseLookController, Overlay, Spinner, Transform};
use freelook_config::Config;
use freelook_input::LookInput;
use glam::Vec3;
use tracing::info;
use winit::keyboard::KeyCode;

/// Swaps between raw and relative look.
pub const TOGGLE_KEY: KeyCode = KeyCode::F1;
/// Requests shutdown while held.
pub const EXIT_KEY: KeyCode = KeyCode::Escape;

/// Everything the per-frame driver updates.
pub struct Scene {
    pub camera: Transform,
    pub look: MouseLookController,
    pub spinning_box: Transform,
    pub spinner: Spinner,
    exit_requested: bool,
}

impl Scene {
    /// Builds the scene described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let look = &config.look;
        let tuning = LookTuning {
            smoothing: look.smoothing,
            look_speed: look.look_speed,
            move_speed: look.move_speed,
            raw_dpi: look.raw_dpi,
        };
        let controller = MouseLookController::new(look.mode, tuning);
        info!(mode = %controller.mode(), "mouse look ready");
        Self {
            camera: Transform::from_position(Vec3::from(config.scene.camera_position)),
            look: controller,
            spinning_box: Transform::default(),
            spinner: Spinner {
                rate: config.scene.spin_rate,
            },
            exit_requested: false,
        }
    }

    /// Re-baseline the controller, e.g. once the window exists.
    pub fn reset_look(&mut self, input: &mut dyn LookInput) {
        self.look.reset(&self.camera, input);
    }

    /// Run one simulated frame. `input` is `None` until the host has a window.
    pub fn step(&mut self, mut input: Option<&mut dyn LookInput>, time_scale: f32) {
        if let Some(input) = input.as_deref_mut() {
            if input.is_key_down(EXIT_KEY) {
                self.exit_requested = true;
            }
            if input.key_hit(TOGGLE_KEY) {
                self.look.swap_mode(&self.camera, input);
            }
        }

        let mut frame = Frame { input, time_scale };
        self.look.update_world(&mut self.camera, &mut frame);
        self.spinner.update_world(&mut self.spinning_box, &mut frame);
    }

    /// Draw every actor's overlay.
    pub fn post_render(&self, overlay: &mut dyn Overlay) {
        self.look.post_render(overlay);
        self.spinner.post_render(overlay);
    }

    /// Whether the exit key has been seen.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
