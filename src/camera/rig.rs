//! Anchored orbit/pan/zoom rig.
//!
//! The camera hangs off a pivot ("anchor") at a fixed local offset of
//! `(0, 0, -distance)`. Mouse input never moves the live pose directly: it
//! edits target values (anchor position, anchor rotation, distance) and
//! [`on_late_frame`](CameraRig::on_late_frame) chases those targets.
//!
//! | Input                | Effect                                        |
//! |----------------------|-----------------------------------------------|
//! | middle drag          | pan the anchor in the camera's view plane     |
//! | right drag           | orbit (yaw/pitch) around the anchor           |
//! | scroll               | dolly toward/away from the anchor             |
//!
//! Zooming past the minimum distance pushes the anchor forward instead, so
//! the camera can keep travelling into the scene.

use glam::{EulerRot, Quat, Vec2, Vec3};

use super::cursor::CursorGlyph;
use super::damping::SmoothDamp;
use super::pose::Pose;
use crate::input::FrameInput;
use crate::options::CameraOptions;

/// Closest the camera may sit to its anchor.
pub const MIN_DISTANCE: f32 = 0.5;
/// Time constant for anchor and camera-offset smoothing, in seconds.
pub const POSITION_SMOOTH_TIME: f32 = 0.05;
/// Anchor rotation slerp factor per second of frame time.
pub const ROTATION_SMOOTH_RATE: f32 = 16.0;
/// Fraction of zoom overshoot converted into forward anchor travel.
const ZOOM_PUSH_FACTOR: f32 = -0.1;
/// Scroll values strictly inside `(-SCROLL_DEAD_ZONE, SCROLL_DEAD_ZONE)`
/// are ignored.
const SCROLL_DEAD_ZONE: f32 = 0.01;

/// Lifecycle a host drives once per rendered frame.
///
/// Call order within a frame is fixed: every `on_frame` for the frame, then
/// `on_late_frame`.
pub trait CameraRig {
    /// Take control of a camera currently at `camera`.
    fn on_attach(&mut self, camera: Pose);
    /// Consume this frame's input.
    fn on_frame(&mut self, input: &FrameInput, dt: f32);
    /// Advance smoothing after all input for the frame is applied.
    fn on_late_frame(&mut self, dt: f32);
    /// Camera world pose to render with.
    fn camera_pose(&self) -> Pose;
}

/// Drag currently steering the rig. Zoom is instantaneous and has no mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// No drag in progress.
    #[default]
    Idle,
    /// Middle-button drag moving the anchor.
    Panning,
    /// Right-button drag orbiting around the anchor.
    Rotating,
}

/// State captured at attach time and restored by [`OrbitCameraRig::reset`].
#[derive(Debug, Clone, Copy)]
struct HomeState {
    anchor: Pose,
    distance: f32,
    yaw: f32,
    pitch: f32,
}

/// Mouse-driven orbit camera around a movable anchor.
#[derive(Debug, Clone)]
pub struct OrbitCameraRig {
    rotation_sensitivity: f32,
    move_sensitivity: f32,
    zoom_sensitivity: f32,

    /// Live pivot pose.
    anchor: Pose,
    /// Live camera position in anchor space.
    camera_offset: Vec3,
    /// Pivot-to-camera radius the offset is smoothed toward.
    distance: f32,

    target_anchor_position: Vec3,
    target_rotation: Quat,
    anchor_spring: SmoothDamp,
    offset_spring: SmoothDamp,

    /// Accumulated orbit angles in degrees.
    yaw: f32,
    pitch: f32,

    mode: NavigationMode,
    cursor: CursorGlyph,
    pending_cursor: Option<CursorGlyph>,
    home: HomeState,
}

impl OrbitCameraRig {
    /// Create a rig attached to a camera at the origin looking down +Z.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self::attached_to(options, Pose::IDENTITY)
    }

    /// Create a rig and attach it to a camera at `camera`.
    #[must_use]
    pub fn attached_to(options: &CameraOptions, camera: Pose) -> Self {
        let distance = options.distance.max(MIN_DISTANCE);
        let mut rig = Self {
            rotation_sensitivity: options.rotation_sensitivity,
            move_sensitivity: options.move_sensitivity,
            zoom_sensitivity: options.zoom_sensitivity,
            anchor: Pose::IDENTITY,
            camera_offset: Vec3::new(0.0, 0.0, -distance),
            distance,
            target_anchor_position: Vec3::ZERO,
            target_rotation: Quat::IDENTITY,
            anchor_spring: SmoothDamp::new(POSITION_SMOOTH_TIME),
            offset_spring: SmoothDamp::new(POSITION_SMOOTH_TIME),
            yaw: 0.0,
            pitch: 0.0,
            mode: NavigationMode::Idle,
            cursor: CursorGlyph::Idle,
            pending_cursor: None,
            home: HomeState {
                anchor: Pose::IDENTITY,
                distance,
                yaw: 0.0,
                pitch: 0.0,
            },
        };
        rig.on_attach(camera);
        rig
    }

    /// Update sensitivities without disturbing the current pose.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.rotation_sensitivity = options.rotation_sensitivity;
        self.move_sensitivity = options.move_sensitivity;
        self.zoom_sensitivity = options.zoom_sensitivity;
    }

    /// Return to the pose captured by the last attach.
    pub fn reset(&mut self) {
        let home = self.home;
        self.anchor = home.anchor;
        self.distance = home.distance;
        self.camera_offset = Vec3::new(0.0, 0.0, -home.distance);
        self.yaw = home.yaw;
        self.pitch = home.pitch;
        self.target_anchor_position = home.anchor.position;
        self.target_rotation = home.anchor.rotation;
        self.anchor_spring.reset();
        self.offset_spring.reset();
        self.mode = NavigationMode::Idle;
        self.set_cursor(CursorGlyph::Idle);
        log::debug!("camera rig reset to home anchor {:?}", home.anchor);
    }

    /// Live pivot pose.
    #[must_use]
    pub fn anchor(&self) -> Pose {
        self.anchor
    }

    /// Live camera position relative to the anchor.
    #[must_use]
    pub fn camera_offset(&self) -> Vec3 {
        self.camera_offset
    }

    /// Pivot-to-camera radius. Never below [`MIN_DISTANCE`].
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Position the anchor is being smoothed toward.
    #[must_use]
    pub fn target_anchor_position(&self) -> Vec3 {
        self.target_anchor_position
    }

    /// Orientation the anchor is being smoothed toward.
    #[must_use]
    pub fn target_rotation(&self) -> Quat {
        self.target_rotation
    }

    /// Accumulated yaw in degrees.
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw
    }

    /// Accumulated pitch in degrees (positive looks down).
    #[must_use]
    pub fn pitch_degrees(&self) -> f32 {
        self.pitch
    }

    /// Drag currently in progress.
    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Most recently requested cursor glyph.
    #[must_use]
    pub fn cursor(&self) -> CursorGlyph {
        self.cursor
    }

    /// Take the cursor change requested since the last call, if any.
    ///
    /// Every request is reported, including repeats of the current glyph,
    /// so hosts can re-apply a cursor the windowing system reset.
    pub fn take_cursor_request(&mut self) -> Option<CursorGlyph> {
        self.pending_cursor.take()
    }

    fn set_cursor(&mut self, glyph: CursorGlyph) {
        self.cursor = glyph;
        self.pending_cursor = Some(glyph);
    }

    fn enter_mode(&mut self, mode: NavigationMode, glyph: CursorGlyph) {
        if self.mode != mode {
            log::debug!("camera rig {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.set_cursor(glyph);
    }

    fn leave_mode(&mut self, mode: NavigationMode) {
        if self.mode == mode {
            log::debug!("camera rig {mode:?} -> Idle");
            self.mode = NavigationMode::Idle;
        }
    }

    fn handle_pan(&mut self, input: &FrameInput, delta: Vec2, dt: f32) {
        let button = input.middle;
        if button.held {
            if button.pressed && !input.pointer_over_ui {
                self.enter_mode(NavigationMode::Panning, CursorGlyph::Move);
            }
            if self.mode != NavigationMode::Panning {
                return;
            }

            let step = delta * self.move_sensitivity * dt;
            self.target_anchor_position +=
                self.anchor.rotation * Vec3::new(-step.x, -step.y, 0.0);
        } else if button.released && !input.pointer_over_ui {
            self.set_cursor(CursorGlyph::Idle);
            self.leave_mode(NavigationMode::Panning);
        }
    }

    fn handle_rotation(&mut self, input: &FrameInput, delta: Vec2, dt: f32) {
        let button = input.right;
        if button.held {
            if button.pressed && !input.pointer_over_ui {
                self.enter_mode(NavigationMode::Rotating, CursorGlyph::Rotate);
            }
            if self.mode != NavigationMode::Rotating {
                return;
            }

            self.yaw += delta.x * self.rotation_sensitivity * dt;
            self.pitch -= delta.y * self.rotation_sensitivity * dt;
            self.target_rotation = orbit_rotation(self.yaw, self.pitch);
        } else if button.released {
            // Unlike pan, release is honored even over UI.
            self.set_cursor(CursorGlyph::Idle);
            self.leave_mode(NavigationMode::Rotating);
        }
    }

    fn handle_zoom(&mut self, input: &FrameInput, dt: f32) {
        if !input.pointer_in_viewport() && !input.pointer_over_ui {
            return;
        }

        let scroll = input.scroll;
        if (scroll > -SCROLL_DEAD_ZONE && scroll < SCROLL_DEAD_ZONE)
            || input.pointer_over_ui
        {
            return;
        }

        self.distance -= scroll * self.zoom_sensitivity * dt;
        if self.distance >= MIN_DISTANCE {
            return;
        }

        // Overshoot past the minimum becomes forward travel of the pivot.
        let push = (self.distance - MIN_DISTANCE) * ZOOM_PUSH_FACTOR;
        self.target_anchor_position += self.anchor.rotation * (Vec3::Z * push);
        log::trace!(
            "zoom clamped at {MIN_DISTANCE} (was {}), anchor pushed {push}",
            self.distance
        );
        self.distance = MIN_DISTANCE;
    }
}

impl CameraRig for OrbitCameraRig {
    fn on_attach(&mut self, camera: Pose) {
        self.anchor = Pose::new(
            camera.position + camera.forward() * self.distance,
            camera.rotation,
        );
        self.camera_offset = Vec3::new(0.0, 0.0, -self.distance);
        self.set_cursor(CursorGlyph::Idle);
        self.mode = NavigationMode::Idle;

        let (yaw, pitch, _roll) = camera.rotation.to_euler(EulerRot::YXZ);
        self.yaw = yaw.to_degrees();
        self.pitch = pitch.to_degrees();

        self.target_anchor_position = self.anchor.position;
        self.target_rotation = camera.rotation;
        self.anchor_spring.reset();
        self.offset_spring.reset();

        self.home = HomeState {
            anchor: self.anchor,
            distance: self.distance,
            yaw: self.yaw,
            pitch: self.pitch,
        };
        log::debug!(
            "camera rig attached: anchor {:?}, distance {}",
            self.anchor.position,
            self.distance
        );
    }

    fn on_frame(&mut self, input: &FrameInput, dt: f32) {
        let delta = input.mouse_delta * self.distance;
        self.handle_pan(input, delta, dt);
        self.handle_rotation(input, delta, dt);
        self.handle_zoom(input, dt);
    }

    fn on_late_frame(&mut self, dt: f32) {
        self.anchor.position = self.anchor_spring.step(
            self.anchor.position,
            self.target_anchor_position,
            dt,
        );

        let t = (dt * ROTATION_SMOOTH_RATE).clamp(0.0, 1.0);
        self.anchor.rotation =
            self.anchor.rotation.slerp(self.target_rotation, t).normalize();

        self.camera_offset = self.offset_spring.step(
            self.camera_offset,
            Vec3::new(0.0, 0.0, -self.distance),
            dt,
        );
    }

    fn camera_pose(&self) -> Pose {
        self.anchor
            .compose(Pose::new(self.camera_offset, Quat::IDENTITY))
    }
}

/// Orientation for the given yaw and pitch (degrees): yaw about Y, then
/// pitch about the yawed X axis, no roll.
fn orbit_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw.to_radians(), pitch.to_radians(), 0.0)
}
