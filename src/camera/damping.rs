//! Critically damped spring smoothing.
//!
//! The rig never snaps its pose to a target; each frame the live value
//! chases the target with a spring whose velocity persists between frames.
//! This keeps motion continuous when the target keeps moving (a pan drag)
//! and settles without overshoot once it stops.

use glam::Vec3;

/// Floor for the smoothing time constant.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Spring state for smoothing a [`Vec3`] toward a moving target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothDamp {
    /// Approximate time to reach the target, in seconds.
    smooth_time: f32,
    /// Maximum speed in units per second.
    max_speed: f32,
    /// Velocity carried into the next step.
    velocity: Vec3,
}

impl SmoothDamp {
    /// Create a spring with the given time constant and no speed cap.
    #[must_use]
    pub fn new(smooth_time: f32) -> Self {
        Self {
            smooth_time: smooth_time.max(MIN_SMOOTH_TIME),
            max_speed: f32::INFINITY,
            velocity: Vec3::ZERO,
        }
    }

    /// Cap the speed at which the value may approach its target.
    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Current spring velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Time constant in seconds.
    #[must_use]
    pub fn smooth_time(&self) -> f32 {
        self.smooth_time
    }

    /// Drop any accumulated velocity.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// Advance the spring by `dt` seconds and return the new value.
    ///
    /// A zero `dt` returns `current` unchanged.
    pub fn step(&mut self, current: Vec3, target: Vec3, dt: f32) -> Vec3 {
        let omega = 2.0 / self.smooth_time;
        let x = omega * dt;
        // Pade-style approximation of exp(-x), accurate for small x.
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let mut change = current - target;
        let max_change = self.max_speed * self.smooth_time;
        if change.length() > max_change {
            change = change.normalize_or_zero() * max_change;
        }
        let clamped_target = current - change;

        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * decay;
        let mut output = clamped_target + (change + temp) * decay;

        // Overshoot guard: never pass the real target.
        if (target - current).dot(output - target) > 0.0 {
            output = target;
            self.velocity = Vec3::ZERO;
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut spring = SmoothDamp::new(0.05);
        let current = Vec3::new(1.0, 2.0, 3.0);
        let out = spring.step(current, Vec3::ZERO, 0.0);
        assert_eq!(out, current);
        assert_eq!(spring.velocity(), Vec3::ZERO);
    }

    #[test]
    fn converges_without_overshoot() {
        let mut spring = SmoothDamp::new(0.05);
        let target = Vec3::new(10.0, 0.0, 0.0);
        let mut value = Vec3::ZERO;

        for _ in 0..120 {
            value = spring.step(value, target, DT);
            assert!(value.x <= target.x + 1e-5, "overshot: {}", value.x);
        }
        assert!((value - target).length() < 1e-3);
    }

    #[test]
    fn moves_monotonically_toward_target() {
        let mut spring = SmoothDamp::new(0.05);
        let target = Vec3::new(0.0, -4.0, 0.0);
        let mut value = Vec3::ZERO;
        let mut previous_gap = (target - value).length();

        for _ in 0..30 {
            value = spring.step(value, target, DT);
            let gap = (target - value).length();
            assert!(gap <= previous_gap);
            previous_gap = gap;
        }
    }

    #[test]
    fn max_speed_limits_travel() {
        let mut capped = SmoothDamp::new(0.05).with_max_speed(1.0);
        let mut free = SmoothDamp::new(0.05);
        let target = Vec3::new(100.0, 0.0, 0.0);

        let capped_out = capped.step(Vec3::ZERO, target, DT);
        let free_out = free.step(Vec3::ZERO, target, DT);
        assert!(capped_out.x < free_out.x);
        assert!(capped_out.x < 0.1);
    }

    #[test]
    fn reset_clears_velocity() {
        let mut spring = SmoothDamp::new(0.05);
        let _ = spring.step(Vec3::ZERO, Vec3::X, DT);
        assert_ne!(spring.velocity(), Vec3::ZERO);
        spring.reset();
        assert_eq!(spring.velocity(), Vec3::ZERO);
    }

    #[test]
    fn smooth_time_is_floored() {
        assert_eq!(SmoothDamp::new(0.0).smooth_time(), MIN_SMOOTH_TIME);
    }
}
