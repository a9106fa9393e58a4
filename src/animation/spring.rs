// SPDX-License-Identifier: MPL-2.0
//! Damped spring integration.
//!
//! The spring pulls a value toward its target with a force proportional to the
//! displacement (`stiffness`) and resists motion with a force proportional to
//! the velocity (`damping`). Low damping relative to stiffness overshoots the
//! target before settling.

use std::time::Duration;

/// Fixed integration step. Frame deltas are split into substeps of at most
/// this length so stiff springs stay stable at low frame rates.
const SUBSTEP: Duration = Duration::from_millis(1);

/// Displacement below which a spring may come to rest.
pub const REST_DISPLACEMENT: f32 = 0.01;

/// Speed (units per second) below which a spring may come to rest.
pub const REST_SPEED: f32 = 2.0;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Creates a spring with unit mass.
    #[must_use]
    pub const fn new(damping: f32, stiffness: f32) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    /// Ratio of the actual damping to critical damping.
    ///
    /// Below `1.0` the spring is underdamped and overshoots its target.
    #[must_use]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(10.0, 100.0)
    }
}

/// Position and velocity of a value under spring motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub position: f32,
    pub velocity: f32,
}

impl SpringState {
    /// Integrates the spring toward `target` for `dt`.
    ///
    /// Uses semi-implicit Euler with fixed substeps.
    pub fn step(&mut self, target: f32, config: &SpringConfig, dt: Duration) {
        let mut remaining = dt;
        while !remaining.is_zero() {
            let h = remaining.min(SUBSTEP);
            remaining -= h;
            let h = h.as_secs_f32();

            let spring_force = -config.stiffness * (self.position - target);
            let damping_force = -config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / config.mass;

            self.velocity += acceleration * h;
            self.position += self.velocity * h;
        }
    }

    /// Returns true once the value is close enough and slow enough to snap.
    #[must_use]
    pub fn is_at_rest(&self, target: f32) -> bool {
        (self.position - target).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &mut SpringState, target: f32, config: &SpringConfig, frames: u32) -> f32 {
        let mut peak = state.position;
        for _ in 0..frames {
            state.step(target, config, Duration::from_millis(16));
            peak = peak.max(state.position);
        }
        peak
    }

    #[test]
    fn underdamped_spring_overshoots_then_settles() {
        let config = SpringConfig::new(15.0, 100.0);
        assert!(config.damping_ratio() < 1.0);

        let mut state = SpringState {
            position: 0.0,
            velocity: 0.0,
        };
        let peak = run(&mut state, 22.0, &config, 200);

        assert!(peak > 22.0, "expected overshoot, peak was {peak}");
        assert!(state.is_at_rest(22.0));
    }

    #[test]
    fn overdamped_spring_never_overshoots() {
        let config = SpringConfig::new(60.0, 100.0);
        let mut state = SpringState {
            position: 0.0,
            velocity: 0.0,
        };
        let peak = run(&mut state, 10.0, &config, 400);

        assert!(peak <= 10.0 + REST_DISPLACEMENT);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let config = SpringConfig::default();
        let mut state = SpringState {
            position: 3.0,
            velocity: 1.5,
        };
        state.step(10.0, &config, Duration::ZERO);
        assert_eq!(state.position, 3.0);
        assert_eq!(state.velocity, 1.5);
    }

    #[test]
    fn rest_requires_both_position_and_speed() {
        let moving = SpringState {
            position: 5.0,
            velocity: 50.0,
        };
        assert!(!moving.is_at_rest(5.0));

        let far = SpringState {
            position: 4.0,
            velocity: 0.0,
        };
        assert!(!far.is_at_rest(5.0));
    }
}
