//! Timed transitions
//!
//! A tween converges a scalar over a fixed duration with an easing curve,
//! landing exactly on the target when the duration elapses.

use crate::easing::Easing;

/// Duration and easing for timed transitions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing applied to linear progress
    pub easing: Easing,
}

impl TimingConfig {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: Easing::EaseInOutQuad,
        }
    }
}

/// A fixed-duration interpolation between two values
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    config: TimingConfig,
    from: f32,
    to: f32,
    elapsed_ms: f32,
}

impl Tween {
    pub fn new(config: TimingConfig, from: f32, to: f32) -> Self {
        Self {
            config,
            from,
            to,
            elapsed_ms: 0.0,
        }
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.config.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.config.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current eased value; exactly `to` once finished
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.config.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// The value this tween lands on
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.config.duration_ms as f32
    }

    /// Advance the tween by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if self.is_finished() {
            return;
        }
        self.elapsed_ms += dt_ms;
        if self.is_finished() {
            self.elapsed_ms = self.config.duration_ms as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lands_exactly_on_target() {
        let mut tween = Tween::new(TimingConfig::default(), 800.0, 500.0);

        // 300 ms at 60 fps is 18 frames
        for _ in 0..18 {
            tween.tick(1000.0 / 60.0);
        }

        assert!(tween.is_finished());
        assert_eq!(tween.value(), 500.0);
    }

    #[test]
    fn test_midpoint_of_linear_tween() {
        let config = TimingConfig::new(200, Easing::Linear);
        let mut tween = Tween::new(config, 0.0, 100.0);

        tween.tick(100.0);
        assert!((tween.value() - 50.0).abs() < 1e-4);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_overshooting_tick_clamps() {
        let config = TimingConfig::new(100, Easing::EaseOutQuad);
        let mut tween = Tween::new(config, 0.0, 50.0);

        tween.tick(1000.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 50.0);
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let config = TimingConfig::new(0, Easing::Linear);
        let tween = Tween::new(config, 10.0, 20.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 20.0);
    }
}
