use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Rig sensitivities, starting distance and projection parameters.
pub struct CameraOptions {
    /// Degrees of yaw/pitch per axis unit per second while rotating.
    #[schemars(title = "Rotate Sensitivity", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub rotation_sensitivity: f32,
    /// Anchor travel per axis unit per second while panning.
    #[schemars(title = "Move Sensitivity", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub move_sensitivity: f32,
    /// Distance change per scroll unit per second.
    #[schemars(title = "Zoom Sensitivity", range(min = 10.0, max = 5000.0), extend("step" = 10.0))]
    pub zoom_sensitivity: f32,
    /// Distance from the rotation pivot point at attach time.
    #[schemars(title = "Distance", range(min = 0.5, max = 500.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            rotation_sensitivity: 50.0,
            move_sensitivity: 5.0,
            zoom_sensitivity: 1000.0,
            distance: 10.0,
            fovy: 60.0,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}
