// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`theme_toggle`] - Animated light/dark switch
//! - [`menu`] - Floating menu that expands over a tinted backdrop
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Validated value types (toggle size)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/dark palettes and the startup theme mode
//! - [`icons`] - Vector glyphs drawn on a canvas
//! - [`haptics`] - Haptic feedback seam

pub mod design_tokens;
pub mod haptics;
pub mod icons;
pub mod menu;
pub mod state;
pub mod theme_toggle;
pub mod theming;
