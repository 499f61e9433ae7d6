//! Standalone window driving an [`OrbitCameraRig`] from winit events.
//!
//! Nothing is rendered; the window exists to exercise the rig with real
//! input. The live camera pose is written to the window title and the
//! rig's cursor requests are applied to the window.
//!
//! ```no_run
//! # use anchorcam::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("Orbit")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use glam::Vec3;
use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    camera::{CameraRig, OrbitCameraRig, Pose, Projection},
    error::RigError,
    input::{InputEvent, InputProcessor, MouseButton},
    options::Options,
    util::frame_timing::FrameClock,
};

/// How often the window title is refreshed.
const TITLE_REFRESH: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
    title: String,
    camera: Pose,
}

impl ViewerBuilder {
    /// Create a builder with default options, a camera looking at the
    /// origin from above and behind, and the title "anchorcam".
    fn new() -> Self {
        Self {
            options: Options::default(),
            title: "anchorcam".into(),
            camera: Pose::looking_at(
                Vec3::new(0.0, 4.0, -8.0),
                Vec3::ZERO,
                Vec3::Y,
            ),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the camera pose the rig attaches to.
    #[must_use]
    pub fn with_camera(mut self, camera: Pose) -> Self {
        self.camera = camera;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
            camera: self.camera,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that drives the orbit rig.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
    camera: Pose,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), RigError> {
        let event_loop =
            EventLoop::new().map_err(|e| RigError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            rig: OrbitCameraRig::attached_to(
                &self.options.camera,
                self.camera,
            ),
            input: InputProcessor::new(self.options.input.clone()),
            clock: FrameClock::from_options(&self.options.timing),
            projection: Projection::from_options(&self.options.camera, 1.0),
            last_title_refresh: Instant::now(),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| RigError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    rig: OrbitCameraRig,
    input: InputProcessor,
    clock: FrameClock,
    projection: Projection,
    last_title_refresh: Instant,
    title: String,
}

impl ViewerApp {
    fn resize(&mut self, width: f32, height: f32) {
        self.input.handle_event(InputEvent::Resized { width, height });
        self.projection.set_aspect(width, height);
    }

    /// Run one rig frame and push its outputs to the window.
    fn frame(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        let dt = self.clock.tick();
        let input = self.input.snapshot();
        self.rig.on_frame(&input, dt);
        self.rig.on_late_frame(dt);

        if let Some(glyph) = self.rig.take_cursor_request() {
            window.set_cursor(winit::window::CursorIcon::from(glyph));
        }

        if self.last_title_refresh.elapsed() >= TITLE_REFRESH {
            let pose = self.rig.camera_pose();
            let anchor_depth = self
                .projection
                .project(&pose, self.rig.anchor().position)
                .map_or(f32::NAN, |ndc| ndc.z);
            window.set_title(&format!(
                "{} | eye ({:.2}, {:.2}, {:.2}) | distance {:.2} | \
                 anchor depth {:.4} | fov {:.0} | {:.0} fps",
                self.title,
                pose.position.x,
                pose.position.y,
                pose.position.z,
                self.rig.distance(),
                anchor_depth,
                self.projection.fovy,
                self.clock.fps(),
            ));
            self.last_title_refresh = Instant::now();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 800.0));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        self.resize(inner.width as f32, inner.height as f32);
        log::info!(
            "viewer window {}x{}; middle-drag pans, right-drag orbits, \
             scroll zooms, R resets",
            inner.width,
            inner.height
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                self.resize(size.width as f32, size.height as f32);
            }

            WindowEvent::RedrawRequested => {
                if self.clock.should_render() {
                    self.frame();
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.input.handle_event(InputEvent::CursorLeft);
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(button) = MouseButton::from_winit(button) {
                    self.input.handle_event(InputEvent::MouseButton {
                        button,
                        pressed: state == ElementState::Pressed,
                    });
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * self.input.options().pixel_scroll_scale
                    }
                };
                self.input.handle_event(InputEvent::Scroll { delta: lines });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::KeyR)
                {
                    log::info!("camera reset");
                    self.rig.reset();
                }
            }

            _ => (),
        }
    }
}
