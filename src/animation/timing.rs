// SPDX-License-Identifier: MPL-2.0
//! Fixed-duration interpolation curves.

use std::time::Duration;

/// Easing curve applied to normalized timing progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out, the default for UI fades.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Progress of a timing curve started from an arbitrary value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingState {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub elapsed: Duration,
    pub easing: Easing,
}

impl TimingState {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Advances the curve and returns the time left over past its end.
    pub fn step(&mut self, dt: Duration) -> Duration {
        let left = self.duration.saturating_sub(self.elapsed);
        self.elapsed = (self.elapsed + dt).min(self.duration);
        dt.saturating_sub(left)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        super::lerp(self.from, self.to, self.easing.apply(t))
    }
}
