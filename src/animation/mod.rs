// SPDX-License-Identifier: MPL-2.0
//! Frame-driven animation engine.
//!
//! Every animated property in the UI is an [`Animated`] value advanced by the
//! elapsed time between display frames. Values are driven either by a
//! physically modelled [`spring`] or by a fixed-duration [`timing`] curve, and
//! retargeting an in-flight value continues from its current position and
//! velocity instead of snapping.
//!
//! Delayed sub-steps (for example "fade the list in 200 ms after the menu
//! starts growing") are held in a virtual-time [`Scheduler`] advanced by the
//! same frame deltas, which keeps the whole engine deterministic under test.
//!
//! # Example
//!
//! ```
//! use iced_dock::animation::{Animated, Motion, SpringConfig};
//! use std::time::Duration;
//!
//! let mut width = Animated::new(140.0);
//! width.animate(Motion::spring(350.0, SpringConfig::new(20.0, 150.0)));
//!
//! for _ in 0..120 {
//!     width.advance(Duration::from_millis(16));
//! }
//! assert!(!width.is_animating());
//! assert_eq!(width.value(), 350.0);
//! ```

mod animated;
mod scheduler;
pub mod spring;
pub mod timing;

pub use animated::{Animated, Motion};
pub use scheduler::Scheduler;
pub use spring::SpringConfig;
pub use timing::Easing;

use std::time::Duration;

/// Longest frame delta fed into the engine.
///
/// A stalled frame (window dragged, system sleep) would otherwise integrate a
/// single huge step.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(64);

/// Clamps a measured frame delta to [`MAX_FRAME_DELTA`].
#[must_use]
pub fn clamp_frame_delta(delta: Duration) -> Duration {
    delta.min(MAX_FRAME_DELTA)
}

/// Linear interpolation between two scalars.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Linear interpolation between two colors, component-wise (alpha included).
#[must_use]
pub fn mix(from: iced::Color, to: iced::Color, t: f32) -> iced::Color {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    iced::Color {
        r: lerp(from.r, to.r, t),
        g: lerp(from.g, to.g, t),
        b: lerp(from.b, to.b, t),
        a: lerp(from.a, to.a, t),
    }
}
