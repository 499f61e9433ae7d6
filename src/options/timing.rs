use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Frame pacing for hosts that use [`FrameClock`](crate::util::frame_timing::FrameClock).
pub struct TimingOptions {
    /// Frame rate cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
    /// Upper bound for a single frame's delta time, in seconds.
    #[schemars(skip)]
    pub max_frame_time: f32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            target_fps: 0,
            max_frame_time: 1.0 / 3.0,
        }
    }
}
