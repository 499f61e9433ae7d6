//! Folds raw platform events into per-frame snapshots.
//!
//! Window systems deliver input as a stream of events; the rig expects a
//! polled view (axis deltas, button edges, scroll amount) once per frame.
//! `InputProcessor` owns the transient state that bridges the two.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::state::{ButtonState, FrameInput, Viewport};
use crate::options::InputOptions;

/// Accumulates [`InputEvent`]s between frames.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input.handle_event(event);
///
/// // Once per frame:
/// let frame = input.snapshot();
/// rig.on_frame(&frame, dt);
/// rig.on_late_frame(dt);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Scaling from raw units to axis units.
    options: InputOptions,
    /// Last known cursor position, `None` once the cursor leaves.
    pointer: Option<Vec2>,
    /// Pixel travel since the last snapshot (x right, y up).
    pending_delta: Vec2,
    /// Wheel lines since the last snapshot.
    pending_scroll: f32,
    left: ButtonState,
    right: ButtonState,
    middle: ButtonState,
    viewport: Viewport,
    pointer_over_ui: bool,
}

impl InputProcessor {
    /// Create a processor with the given scaling options.
    #[must_use]
    pub fn new(options: InputOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the scaling options. Pending input is kept.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Current scaling options.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Record one raw event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let position = Vec2::new(x, y);
                if let Some(last) = self.pointer {
                    // Screen y grows downward; axis y grows upward.
                    self.pending_delta +=
                        Vec2::new(position.x - last.x, last.y - position.y);
                }
                self.pointer = Some(position);
            }
            InputEvent::CursorLeft => self.pointer = None,
            InputEvent::MouseButton { button, pressed } => {
                let state = self.button_mut(button);
                if pressed {
                    state.press();
                } else {
                    state.release();
                }
            }
            InputEvent::Scroll { delta } => self.pending_scroll += delta,
            InputEvent::Resized { width, height } => {
                self.viewport = Viewport::new(width, height);
            }
            InputEvent::PointerOverUi { over } => self.pointer_over_ui = over,
        }
    }

    /// Build the input for the current frame and start a new one.
    ///
    /// Button edges, mouse travel and scroll are consumed; held state,
    /// pointer position, viewport and UI occlusion carry over.
    pub fn snapshot(&mut self) -> FrameInput {
        let frame = FrameInput {
            mouse_delta: self.pending_delta * self.options.mouse_axis_scale,
            left: self.left,
            right: self.right,
            middle: self.middle,
            scroll: self.pending_scroll * self.options.scroll_scale,
            pointer_position: self.pointer,
            viewport: self.viewport,
            pointer_over_ui: self.pointer_over_ui,
        };

        self.pending_delta = Vec2::ZERO;
        self.pending_scroll = 0.0;
        self.left.clear_edges();
        self.right.clear_edges();
        self.middle.clear_edges();

        frame
    }

    fn button_mut(&mut self, button: MouseButton) -> &mut ButtonState {
        match button {
            MouseButton::Left => &mut self.left,
            MouseButton::Right => &mut self.right,
            MouseButton::Middle => &mut self.middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn first_cursor_sample_produces_no_delta() {
        let mut input = InputProcessor::default();
        input.handle_event(moved(100.0, 100.0));
        assert_eq!(input.snapshot().mouse_delta, Vec2::ZERO);
    }

    #[test]
    fn delta_is_scaled_and_y_flipped() {
        let mut input = InputProcessor::default();
        input.handle_event(moved(100.0, 100.0));
        input.handle_event(moved(110.0, 90.0));
        input.handle_event(moved(120.0, 80.0));

        let frame = input.snapshot();
        assert!((frame.mouse_delta - Vec2::new(2.0, 2.0)).length() < 1e-5);

        // Travel is consumed by the snapshot.
        assert_eq!(input.snapshot().mouse_delta, Vec2::ZERO);
    }

    #[test]
    fn cursor_left_breaks_the_delta_chain() {
        let mut input = InputProcessor::default();
        input.handle_event(moved(100.0, 100.0));
        input.handle_event(InputEvent::CursorLeft);
        input.handle_event(moved(500.0, 500.0));

        let frame = input.snapshot();
        assert_eq!(frame.mouse_delta, Vec2::ZERO);
        assert_eq!(frame.pointer_position, Some(Vec2::new(500.0, 500.0)));
    }

    #[test]
    fn pointer_tracks_cursor_until_it_leaves() {
        let mut input = InputProcessor::default();
        assert_eq!(input.pointer(), None);

        input.handle_event(moved(30.0, 40.0));
        assert_eq!(input.pointer(), Some(Vec2::new(30.0, 40.0)));

        input.handle_event(InputEvent::CursorLeft);
        assert_eq!(input.pointer(), None);
        assert_eq!(input.snapshot().pointer_position, None);
    }

    #[test]
    fn set_options_rescales_pending_input() {
        let mut input = InputProcessor::new(InputOptions::default());
        input.handle_event(moved(0.0, 0.0));
        input.handle_event(moved(10.0, 0.0));
        input.handle_event(InputEvent::Scroll { delta: 2.0 });

        input.set_options(InputOptions {
            mouse_axis_scale: 1.0,
            scroll_scale: 0.5,
            ..InputOptions::default()
        });
        assert_eq!(input.options().mouse_axis_scale, 1.0);

        let frame = input.snapshot();
        assert_eq!(frame.mouse_delta, Vec2::new(10.0, 0.0));
        assert_eq!(frame.scroll, 1.0);
    }

    #[test]
    fn button_edges_last_one_frame() {
        let mut input = InputProcessor::default();
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: true,
        });

        assert_eq!(input.snapshot().middle, ButtonState::JUST_PRESSED);
        assert_eq!(input.snapshot().middle, ButtonState::HELD);

        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: false,
        });
        assert_eq!(input.snapshot().middle, ButtonState::JUST_RELEASED);
        assert_eq!(input.snapshot().middle, ButtonState::default());
    }

    #[test]
    fn click_inside_one_frame_sets_both_edges() {
        let mut input = InputProcessor::default();
        for pressed in [true, false] {
            input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed,
            });
        }
        let right = input.snapshot().right;
        assert!(!right.held);
        assert!(right.pressed);
        assert!(right.released);
    }

    #[test]
    fn scroll_accumulates_in_axis_units() {
        let mut input = InputProcessor::default();
        input.handle_event(InputEvent::Scroll { delta: 1.0 });
        input.handle_event(InputEvent::Scroll { delta: 2.0 });
        assert!((input.snapshot().scroll - 0.3).abs() < 1e-6);
        assert_eq!(input.snapshot().scroll, 0.0);
    }

    #[test]
    fn persistent_state_carries_over() {
        let mut input = InputProcessor::default();
        input.handle_event(InputEvent::Resized {
            width: 640.0,
            height: 480.0,
        });
        input.handle_event(InputEvent::PointerOverUi { over: true });
        input.handle_event(moved(10.0, 10.0));

        let _ = input.snapshot();
        let frame = input.snapshot();
        assert_eq!(frame.viewport, Viewport::new(640.0, 480.0));
        assert!(frame.pointer_over_ui);
        assert!(frame.pointer_in_viewport());
    }
}
