//! Window host via winit.
//!
//! [`App`] implements winit's [`ApplicationHandler`]: it feeds window and
//! device events into an [`InputState`], steps the [`Scene`] at a fixed rate
//! on every redraw, and shows the overlay text in the window title. Nothing is
//! rendered.

use std::fmt;
use std::sync::Arc;

use freelook_camera::TextOverlay;
use freelook_config::Config;
use freelook_input::{InputState, LookInput, LookMode};
use glam::{UVec2, Vec2};
use tracing::{debug, error, info, instrument, trace, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use crate::error::AppError;
use crate::frame_clock::FrameClock;
use crate::scene::Scene;

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Window title with the overlay text appended.
pub fn window_title(base: &str, overlay_text: &str) -> String {
    if overlay_text.is_empty() {
        base.to_string()
    } else {
        format!("{base} - {overlay_text}")
    }
}

/// Grab modes to try for `mode`, best first.
///
/// Raw look only needs device deltas, so the pointer can be locked. Relative
/// look reads `CursorMoved`, so the pointer must stay free to move inside
/// the window.
fn grab_modes(mode: LookMode) -> &'static [CursorGrabMode] {
    match mode {
        LookMode::Raw => &[CursorGrabMode::Locked, CursorGrabMode::Confined],
        LookMode::Relative => &[CursorGrabMode::Confined],
    }
}

fn apply_cursor_grab(window: &Window, mode: LookMode) {
    let mut last_error = None;
    for &grab in grab_modes(mode) {
        match window.set_cursor_grab(grab) {
            Ok(()) => {
                debug!(?grab, %mode, "cursor grabbed");
                return;
            }
            Err(e) => last_error = Some(e),
        }
    }
    if let Some(e) = last_error {
        warn!(%mode, "cursor grab unavailable: {e}");
    }
}

/// Record the outcome of a cursor warp. A refused warp keeps the position
/// the platform last reported, and only the first refusal is logged.
fn record_warp<E: fmt::Display>(state: &mut InputState, position: Vec2, result: Result<(), E>) {
    match result {
        Ok(()) => state.set_cursor_position(position),
        Err(e) => {
            if state.cursor.note_warp_refused() {
                warn!("cursor warp unavailable, using reported positions: {e}");
            }
        }
    }
}

/// [`LookInput`] over a live window: cursor commands reach the OS, queries
/// come from the event-fed [`InputState`].
struct WindowInput<'a> {
    window: &'a Window,
    state: &'a mut InputState,
}

impl LookInput for WindowInput<'_> {
    fn drain_raw_motion(&mut self) -> Vec2 {
        self.state.drain_raw_motion()
    }

    fn cursor_position(&self) -> Vec2 {
        self.state.cursor_position()
    }

    fn set_cursor_position(&mut self, position: Vec2) {
        let target = PhysicalPosition::new(position.x as f64, position.y as f64);
        let result = self.window.set_cursor_position(target);
        record_warp(self.state, position, result);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
        self.state.set_cursor_visible(visible);
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.state.is_key_down(key)
    }

    fn key_hit(&self, key: KeyCode) -> bool {
        self.state.key_hit(key)
    }

    fn flush(&mut self) {
        self.state.flush();
    }

    fn surface_size(&self) -> UVec2 {
        self.state.surface_size()
    }
}

/// Application state: window, input, scene and clock.
pub struct App {
    config: Config,
    window: Option<Arc<Window>>,
    input: InputState,
    scene: Scene,
    clock: FrameClock,
    overlay: TextOverlay,
    title: String,
    grabbed_for: Option<LookMode>,
}

impl App {
    /// Creates the application for `config`. The window is created on resume.
    pub fn new(config: Config) -> Self {
        let size = UVec2::new(config.window.width, config.window.height);
        let scene = Scene::from_config(&config);
        let title = config.window.title.clone();
        Self {
            config,
            window: None,
            input: InputState::new(size),
            scene,
            clock: FrameClock::new(),
            overlay: TextOverlay::new(),
            title,
            grabbed_for: None,
        }
    }

    /// The scene being driven.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Re-grab the cursor when the look mode differs from the last grab.
    fn sync_cursor_grab(&mut self, window: &Window) {
        let mode = self.scene.look.mode();
        if self.grabbed_for != Some(mode) {
            apply_cursor_grab(window, mode);
            self.grabbed_for = Some(mode);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let scene = &mut self.scene;
        let input = &mut self.input;
        self.clock.tick(|time_scale| {
            {
                let mut host = WindowInput {
                    window: window.as_ref(),
                    state: &mut *input,
                };
                scene.step(Some(&mut host), time_scale);
            }
            input.end_frame();
        });

        if self.scene.exit_requested() {
            info!("Exit key pressed, shutting down");
            event_loop.exit();
            return;
        }
        self.sync_cursor_grab(&window);

        self.overlay.clear();
        self.scene.post_render(&mut self.overlay);
        let title = window_title(&self.config.window.title, &self.overlay.joined());
        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
        trace!(
            rotation = ?self.scene.camera.rotation,
            position = ?self.scene.camera.position,
            "camera"
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        self.input.cursor.on_resized(inner.width, inner.height);
        info!("Window created: {}x{}", inner.width, inner.height);

        self.sync_cursor_grab(&window);
        {
            let mut host = WindowInput {
                window: window.as_ref(),
                state: &mut self.input,
            };
            host.set_cursor_visible(false);
            self.scene.reset_look(&mut host);
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.input.cursor.on_resized(new_size.width, new_size.height);
                info!("Window resized to {}x{}", new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.keyboard.process_event(&event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.cursor.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.raw_motion.accumulate(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Creates an event loop and runs the application until it exits.
#[instrument(skip_all)]
pub fn run(config: Config) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
