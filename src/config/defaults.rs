// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toggle**: Theme toggle track width bounds
//! - **Menu**: Floating menu behavior switches
//! - **Window**: Initial window geometry

// ==========================================================================
// Toggle Defaults
// ==========================================================================

/// Default track width of the theme toggle.
pub const DEFAULT_TOGGLE_SIZE: f32 = 50.0;

/// Minimum track width. Must leave room for the thumb to travel.
pub const MIN_TOGGLE_SIZE: f32 = 40.0;

/// Maximum track width.
pub const MAX_TOGGLE_SIZE: f32 = 120.0;

// ==========================================================================
// Menu Defaults
// ==========================================================================

/// Whether opening the menu requests a haptic pulse.
pub const DEFAULT_MENU_HAPTICS: bool = true;

/// Whether a new tap cancels delayed steps of the transition it reverses.
pub const DEFAULT_CANCEL_PENDING_ON_REVERSE: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width, a portrait phone-sized canvas.
pub const DEFAULT_WINDOW_WIDTH: f32 = 390.0;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 844.0;

/// Smallest window width that still fits the compact menu with margins.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Smallest window height that still fits the header and the expanded menu.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOGGLE_SIZE >= MIN_TOGGLE_SIZE);
    assert!(DEFAULT_TOGGLE_SIZE <= MAX_TOGGLE_SIZE);
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
};
