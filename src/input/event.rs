/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// folds them into one [`FrameInput`](super::FrameInput) per frame.
///
/// # Example
///
/// ```
/// use anchorcam::input::{InputEvent, InputProcessor, MouseButton};
///
/// let mut input = InputProcessor::default();
/// input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Right,
///     pressed: true,
/// });
/// assert!(input.snapshot().right.pressed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute position inside the viewport.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (downward).
        y: f32,
    },
    /// Cursor left the viewport.
    CursorLeft,
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, in lines (positive = away from the user, zoom in).
    Scroll {
        /// Scroll amount in wheel lines.
        delta: f32,
    },
    /// Viewport resized.
    Resized {
        /// Width in physical pixels.
        width: f32,
        /// Height in physical pixels.
        height: f32,
    },
    /// Result of the host's UI hit test for the current pointer position.
    PointerOverUi {
        /// Whether an interactive UI element is under the pointer.
        over: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button. Drives rotation.
    Right,
    /// Middle mouse button (wheel click). Drives panning.
    Middle,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button, ignoring back/forward/other buttons.
    #[must_use]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use super::*;

    #[test]
    fn winit_buttons_map_to_rig_buttons() {
        use winit::event::MouseButton as Winit;

        assert_eq!(MouseButton::from_winit(Winit::Left), Some(MouseButton::Left));
        assert_eq!(
            MouseButton::from_winit(Winit::Right),
            Some(MouseButton::Right)
        );
        assert_eq!(
            MouseButton::from_winit(Winit::Middle),
            Some(MouseButton::Middle)
        );
    }

    #[test]
    fn extra_winit_buttons_are_ignored() {
        use winit::event::MouseButton as Winit;

        assert_eq!(MouseButton::from_winit(Winit::Back), None);
        assert_eq!(MouseButton::from_winit(Winit::Forward), None);
        assert_eq!(MouseButton::from_winit(Winit::Other(7)), None);
    }
}
