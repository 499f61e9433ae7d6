use glam::Vec2;

use super::event::MouseButton;

/// Per-frame state of one mouse button.
///
/// `pressed` and `released` are edges: they are true only for the frame in
/// which the transition happened. A press and release inside the same frame
/// leaves `held` false with both edges set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Button is down at the end of the frame.
    pub held: bool,
    /// Button went down during the frame.
    pub pressed: bool,
    /// Button went up during the frame.
    pub released: bool,
}

impl ButtonState {
    /// A button that went down this frame and is still held.
    pub const JUST_PRESSED: Self = Self {
        held: true,
        pressed: true,
        released: false,
    };
    /// A button held since an earlier frame.
    pub const HELD: Self = Self {
        held: true,
        pressed: false,
        released: false,
    };
    /// A button that went up this frame.
    pub const JUST_RELEASED: Self = Self {
        held: false,
        pressed: false,
        released: true,
    };

    pub(crate) fn press(&mut self) {
        self.held = true;
        self.pressed = true;
    }

    pub(crate) fn release(&mut self) {
        self.held = false;
        self.released = true;
    }

    pub(crate) fn clear_edges(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}

/// Viewport rectangle anchored at the origin, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in physical pixels.
    pub width: f32,
    /// Height in physical pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half-open containment test: `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.x < self.width
            && point.y >= 0.0
            && point.y < self.height
    }
}

/// Everything the rig reads in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Mouse movement in axis units (x right, y up).
    pub mouse_delta: Vec2,
    /// Left button state (unused by the orbit rig).
    pub left: ButtonState,
    /// Right button state.
    pub right: ButtonState,
    /// Middle button state.
    pub middle: ButtonState,
    /// Scroll axis value (positive = zoom in).
    pub scroll: f32,
    /// Pointer position in viewport pixels, `None` when outside the window.
    pub pointer_position: Option<Vec2>,
    /// Current viewport size.
    pub viewport: Viewport,
    /// Whether the pointer is over an interactive UI element.
    pub pointer_over_ui: bool,
}

impl FrameInput {
    /// State of the given button.
    #[must_use]
    pub fn button(&self, button: MouseButton) -> ButtonState {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    /// Whether the pointer is known and inside the viewport.
    #[must_use]
    pub fn pointer_in_viewport(&self) -> bool {
        self.pointer_position
            .is_some_and(|p| self.viewport.contains(p))
    }
}
