// SPDX-License-Identifier: MPL-2.0
//! Virtual-time scheduler for delayed animation steps.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    fire_at: Duration,
    step: T,
}

/// Holds steps that become due after a delay measured in frame time.
///
/// The scheduler owns its own clock, advanced only through
/// [`Scheduler::advance`], so it never depends on wall-clock timers.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduler<T> {
    now: Duration,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `step` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, step: T) {
        let fire_at = self.now + delay;
        // Keep sorted by fire time; equal times fire in scheduling order.
        let index = self.pending.partition_point(|p| p.fire_at <= fire_at);
        self.pending.insert(index, Pending { fire_at, step });
    }

    /// Drops every pending step and returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time until the earliest pending step fires, if any.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .first()
            .map(|p| p.fire_at.saturating_sub(self.now))
    }

    /// Moves the clock forward and returns the steps that became due, in
    /// firing order.
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        self.now += dt;
        let due = self.pending.partition_point(|p| p.fire_at <= self.now);
        self.pending.drain(..due).map(|p| p.step).collect()
    }
}
