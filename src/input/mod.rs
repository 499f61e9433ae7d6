//! Input handling: platform-agnostic events, the per-frame snapshot the rig
//! consumes, and the processor that turns one into the other.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into per-frame snapshots.
pub mod processor;
/// Per-frame button, viewport and pointer state.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
pub use state::{ButtonState, FrameInput, Viewport};
