// SPDX-License-Identifier: MPL-2.0
//! Toggle size domain type.
//!
//! This module provides a type-safe wrapper for the theme toggle track width.

use crate::config::{DEFAULT_TOGGLE_SIZE, MAX_TOGGLE_SIZE, MIN_TOGGLE_SIZE};
use crate::ui::design_tokens::sizing;

/// Track width of the theme toggle, in logical pixels.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (40–120).
///
/// # Example
///
/// ```
/// use iced_dock::ui::state::ToggleSize;
///
/// let size = ToggleSize::new(60.0);
/// assert_eq!(size.value(), 60.0);
///
/// // Values outside range are clamped
/// let too_wide = ToggleSize::new(500.0);
/// assert_eq!(too_wide.value(), 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleSize(f32);

impl ToggleSize {
    /// Creates a new toggle size, clamping to valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_TOGGLE_SIZE, MAX_TOGGLE_SIZE))
        } else {
            Self::default()
        }
    }

    /// Returns the track width.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Horizontal distance the thumb travels between the two positions.
    #[must_use]
    pub fn thumb_travel(self) -> f32 {
        self.0 - 2.0 * sizing::TOGGLE_TRACK_PADDING - sizing::TOGGLE_THUMB
    }
}

impl Default for ToggleSize {
    fn default() -> Self {
        Self(DEFAULT_TOGGLE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(ToggleSize::new(0.0).value(), MIN_TOGGLE_SIZE);
        assert_eq!(ToggleSize::new(1_000.0).value(), MAX_TOGGLE_SIZE);
    }

    #[test]
    fn new_rejects_non_finite_values() {
        assert_eq!(ToggleSize::new(f32::NAN), ToggleSize::default());
        assert_eq!(ToggleSize::new(f32::INFINITY), ToggleSize::default());
    }

    #[test]
    fn default_thumb_travel_matches_track_geometry() {
        // 50 wide track, 2px padding on each side, 24px thumb.
        assert_eq!(ToggleSize::default().thumb_travel(), 22.0);
    }
}
