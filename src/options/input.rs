use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Conversion from raw window events to rig axis units.
pub struct InputOptions {
    /// Axis units per physical pixel of cursor travel.
    #[schemars(title = "Mouse Axis Scale", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_axis_scale: f32,
    /// Scroll axis units per wheel line.
    #[schemars(title = "Scroll Scale", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub scroll_scale: f32,
    /// Wheel lines per pixel of touchpad scroll.
    #[schemars(skip)]
    pub pixel_scroll_scale: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            mouse_axis_scale: 0.1,
            scroll_scale: 0.1,
            pixel_scroll_scale: 0.01,
        }
    }
}
