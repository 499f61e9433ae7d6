use web_time::{Duration, Instant};

use crate::options::TimingOptions;

/// Per-frame delta time with FPS smoothing and optional frame limiting.
pub struct FrameClock {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Upper bound returned by [`tick`](Self::tick) (0 = no bound)
    max_frame_time: f32,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock with the given FPS target (0 = unlimited) and
    /// per-frame delta cap in seconds (0 = uncapped).
    #[must_use]
    pub fn new(target_fps: u32, max_frame_time: f32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            max_frame_time,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Create a clock from [`TimingOptions`].
    #[must_use]
    pub fn from_options(options: &TimingOptions) -> Self {
        Self::new(options.target_fps, options.max_frame_time)
    }

    /// Returns true if enough time has passed since the last tick to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Advance to a new frame and return its delta time in seconds.
    ///
    /// Long stalls (window drags, breakpoints) are clamped to the
    /// configured maximum so the rig never integrates a huge step.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        if self.max_frame_time > 0.0 {
            frame_time.min(self.max_frame_time)
        } else {
            frame_time
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_clock_always_renders() {
        let clock = FrameClock::new(0, 0.25);
        assert!(clock.should_render());
    }

    #[test]
    fn tick_respects_max_frame_time() {
        let mut clock = FrameClock::new(0, 0.001);
        std::thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt <= 0.001);
        assert!(dt > 0.0);
    }

    #[test]
    fn uncapped_tick_reports_elapsed_time() {
        let mut clock = FrameClock::new(0, 0.0);
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.tick() >= 0.004);
    }

    #[test]
    fn limited_clock_waits_for_frame_budget() {
        let mut clock = FrameClock::new(1, 0.0);
        let _ = clock.tick();
        assert!(!clock.should_render());
    }

    #[test]
    fn fps_starts_at_reasonable_default() {
        let clock = FrameClock::from_options(&TimingOptions::default());
        assert_eq!(clock.fps(), 60.0);
    }
}
