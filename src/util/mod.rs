//! Shared utilities for hosts driving the rig.

/// Delta time, FPS smoothing and frame limiting.
pub mod frame_timing;
