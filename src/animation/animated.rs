// SPDX-License-Identifier: MPL-2.0
//! A single animated scalar.

use super::spring::{SpringConfig, SpringState};
use super::timing::{Easing, TimingState};
use std::collections::VecDeque;
use std::time::Duration;

/// One leg of an animation: where to go and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Spring { target: f32, config: SpringConfig },
    Timing {
        target: f32,
        duration: Duration,
        easing: Easing,
    },
}

impl Motion {
    #[must_use]
    pub fn spring(target: f32, config: SpringConfig) -> Self {
        Motion::Spring { target, config }
    }

    /// Timing motion with the default ease-in-out curve.
    #[must_use]
    pub fn timing(target: f32, duration: Duration) -> Self {
        Motion::Timing {
            target,
            duration,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        match self {
            Motion::Spring { target, .. } | Motion::Timing { target, .. } => *target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Driver {
    Spring {
        state: SpringState,
        target: f32,
        config: SpringConfig,
    },
    Timing(TimingState),
}

/// A scalar that animates toward targets over time.
///
/// Calling [`Animated::animate`] while a motion is in flight retargets from the
/// current value: springs keep their velocity, timing curves restart from
/// wherever the value currently is.
#[derive(Debug, Clone, PartialEq)]
pub struct Animated {
    value: f32,
    velocity: f32,
    driver: Option<Driver>,
    queue: VecDeque<Motion>,
}

impl Animated {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            driver: None,
            queue: VecDeque::new(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the animation will settle on once every queued motion has run.
    #[must_use]
    pub fn target(&self) -> f32 {
        if let Some(last) = self.queue.back() {
            return last.target();
        }
        match &self.driver {
            Some(Driver::Spring { target, .. }) => *target,
            Some(Driver::Timing(timing)) => timing.to,
            None => self.value,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_some()
    }

    /// Starts a motion from the current value, replacing anything in flight.
    pub fn animate(&mut self, motion: Motion) {
        self.queue.clear();
        self.start(motion);
    }

    /// Runs motions back to back, each starting where the previous one
    /// settled.
    pub fn animate_sequence(&mut self, motions: impl IntoIterator<Item = Motion>) {
        self.queue = motions.into_iter().collect();
        match self.queue.pop_front() {
            Some(first) => self.start(first),
            None => self.driver = None,
        }
    }

    fn start(&mut self, motion: Motion) {
        self.driver = Some(match motion {
            Motion::Spring { target, config } => Driver::Spring {
                state: SpringState {
                    position: self.value,
                    velocity: self.velocity,
                },
                target,
                config,
            },
            Motion::Timing {
                target,
                duration,
                easing,
            } => {
                self.velocity = 0.0;
                Driver::Timing(TimingState::new(self.value, target, duration, easing))
            }
        });
    }

    /// Advances the animation by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let mut remaining = dt;

        while let Some(driver) = self.driver.as_mut() {
            let finished = match driver {
                Driver::Spring {
                    state,
                    target,
                    config,
                } => {
                    state.step(*target, config, remaining);
                    remaining = Duration::ZERO;
                    self.value = state.position;
                    self.velocity = state.velocity;

                    if state.is_at_rest(*target) {
                        self.value = *target;
                        self.velocity = 0.0;
                        true
                    } else {
                        false
                    }
                }
                Driver::Timing(timing) => {
                    remaining = timing.step(remaining);
                    self.value = timing.value();
                    timing.is_finished()
                }
            };

            if !finished {
                break;
            }

            match self.queue.pop_front() {
                Some(next) => self.start(next),
                None => {
                    self.driver = None;
                    break;
                }
            }

            if remaining.is_zero() {
                break;
            }
        }
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(value: &mut Animated) {
        for _ in 0..1_000 {
            if !value.is_animating() {
                return;
            }
            value.advance(FRAME);
        }
        panic!("animation did not settle");
    }

    #[test]
    fn idle_value_reports_itself_as_target() {
        let value = Animated::new(12.0);
        assert_eq!(value.target(), 12.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn spring_settles_exactly_on_target() {
        let mut value = Animated::new(0.0);
        value.animate(Motion::spring(45.0, SpringConfig::new(20.0, 150.0)));
        assert_eq!(value.target(), 45.0);

        settle(&mut value);
        assert_eq!(value.value(), 45.0);
    }

    #[test]
    fn timing_settles_after_its_duration() {
        let mut value = Animated::new(0.0);
        value.animate(Motion::timing(1.0, Duration::from_millis(200)));

        value.advance(Duration::from_millis(100));
        assert!(value.is_animating());
        assert!(value.value() > 0.0 && value.value() < 1.0);

        value.advance(Duration::from_millis(100));
        assert!(!value.is_animating());
        assert_eq!(value.value(), 1.0);
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut value = Animated::new(0.0);
        value.animate(Motion::spring(100.0, SpringConfig::new(20.0, 150.0)));
        for _ in 0..5 {
            value.advance(FRAME);
        }
        let midway = value.value();
        assert!(midway > 0.0 && midway < 100.0);

        value.animate(Motion::spring(0.0, SpringConfig::new(20.0, 150.0)));
        value.advance(Duration::from_millis(1));
        // No snap: one millisecond later the value is still near where it was.
        assert!((value.value() - midway).abs() < 1.0);

        settle(&mut value);
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn retargeted_timing_fades_from_partial_value() {
        let mut value = Animated::new(0.0);
        value.animate(Motion::timing(1.0, Duration::from_millis(200)));
        value.advance(Duration::from_millis(100));
        let partial = value.value();

        value.animate(Motion::timing(0.0, Duration::from_millis(150)));
        value.advance(Duration::ZERO);
        assert_eq!(value.value(), partial);
    }

    #[test]
    fn sequence_runs_each_leg_in_order() {
        let config = SpringConfig::new(15.0, 100.0);
        let mut scale = Animated::new(1.0);
        scale.animate_sequence([Motion::spring(0.8, config), Motion::spring(1.0, config)]);
        assert_eq!(scale.target(), 1.0);

        let mut lowest = scale.value();
        for _ in 0..1_000 {
            if !scale.is_animating() {
                break;
            }
            scale.advance(FRAME);
            lowest = lowest.min(scale.value());
        }

        assert!(lowest < 0.85, "squash never happened, lowest {lowest}");
        assert_eq!(scale.value(), 1.0);
    }

    #[test]
    fn animate_discards_queued_legs() {
        let config = SpringConfig::new(15.0, 100.0);
        let mut scale = Animated::new(1.0);
        scale.animate_sequence([Motion::spring(0.8, config), Motion::spring(1.0, config)]);
        scale.animate(Motion::spring(2.0, config));
        assert_eq!(scale.target(), 2.0);

        settle(&mut scale);
        assert_eq!(scale.value(), 2.0);
    }
}
