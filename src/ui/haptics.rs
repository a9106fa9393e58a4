// SPDX-License-Identifier: MPL-2.0
//! Haptic feedback seam.
//!
//! Haptics are a platform service: the menu only asks for a pulse and never
//! waits for it. Desktop targets have no actuator, so the default
//! implementation records the request in the log.

use std::cell::RefCell;

/// Strength of an impact pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Fire-and-forget haptic trigger.
pub trait HapticFeedback {
    fn impact(&self, style: ImpactStyle);
}

/// Haptics backend for platforms without an actuator.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn impact(&self, style: ImpactStyle) {
        log::debug!("haptic impact requested: {style:?}");
    }
}

/// Swallows every request. Used when haptics are disabled in the settings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn impact(&self, _style: ImpactStyle) {}
}

/// Records requested pulses, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    impacts: RefCell<Vec<ImpactStyle>>,
}

impl RecordingHaptics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn impacts(&self) -> Vec<ImpactStyle> {
        self.impacts.borrow().clone()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn impact(&self, style: ImpactStyle) {
        self.impacts.borrow_mut().push(style);
    }
}

/// Picks the backend matching the `menu.haptics` setting.
#[must_use]
pub fn backend(enabled: bool) -> Box<dyn HapticFeedback> {
    if enabled {
        Box::new(LogHaptics)
    } else {
        Box::new(NoHaptics)
    }
}
