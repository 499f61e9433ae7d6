//! Camera rig for interactive 3D viewing.
//!
//! Provides the anchored orbit rig, the pose and projection math it
//! produces, the spring used to smooth it, and the cursor glyphs it
//! requests from the host.

/// Cursor glyphs requested by the rig.
pub mod cursor;
/// Critically damped spring smoothing.
pub mod damping;
/// Rigid poses, view and projection matrices.
pub mod pose;
/// Mouse-driven orbit/pan/zoom rig and its host lifecycle.
pub mod rig;

pub use cursor::CursorGlyph;
pub use damping::SmoothDamp;
pub use pose::{Pose, Projection};
pub use rig::{CameraRig, NavigationMode, OrbitCameraRig, MIN_DISTANCE};
