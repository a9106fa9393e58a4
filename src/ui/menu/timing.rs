// SPDX-License-Identifier: MPL-2.0
//! Motion constants of the floating menu.
//!
//! Opening reads as "chrome grows, then content appears"; closing as "content
//! disappears, then chrome shrinks". The delays below keep text inside the
//! container while it is still animating.

use crate::animation::SpringConfig;
use std::time::Duration;

/// Width, height, horizontal offset and plus-icon rotation.
pub const GEOMETRY_SPRING: SpringConfig = SpringConfig::new(20.0, 150.0);

/// Vertical slide of the entry list.
pub const LIST_SPRING: SpringConfig = SpringConfig::new(18.0, 120.0);

/// Compact "chat" cluster fading back in on close.
pub const CHAT_RETURN_SPRING: SpringConfig = SpringConfig::new(15.0, 120.0);

// ==========================================================================
// Opening
// ==========================================================================

/// Backdrop fade, both directions.
pub const BACKDROP_FADE: Duration = Duration::from_millis(200);

/// Compact cluster fade-out.
pub const CHAT_FADE_OUT: Duration = Duration::from_millis(150);

/// Wait before the header and list appear.
pub const CONTENT_REVEAL_DELAY: Duration = Duration::from_millis(200);

pub const TITLE_FADE_IN: Duration = Duration::from_millis(200);

pub const ITEMS_FADE_IN: Duration = Duration::from_millis(250);

// ==========================================================================
// Closing
// ==========================================================================

/// Header and list fade-out.
pub const CONTENT_FADE_OUT: Duration = Duration::from_millis(150);

/// Wait before the compact cluster returns.
pub const CHAT_RETURN_DELAY: Duration = Duration::from_millis(100);

/// Wait before the container shrinks, measured from the tap.
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(150);

// ==========================================================================
// Targets
// ==========================================================================

/// Resting vertical offset of the hidden entry list.
pub const LIST_HIDDEN_OFFSET: f32 = 50.0;

/// Plus icon rotation while expanded, turning "+" into "×".
pub const EXPANDED_ROTATION: f32 = 45.0;

const _: () = {
    // Content must not start fading in before the backdrop is up, and the
    // container must not shrink before the content is gone.
    assert!(CONTENT_REVEAL_DELAY.as_millis() >= BACKDROP_FADE.as_millis());
    assert!(COLLAPSE_DELAY.as_millis() >= CONTENT_FADE_OUT.as_millis());
    assert!(CHAT_RETURN_DELAY.as_millis() < COLLAPSE_DELAY.as_millis());
};
