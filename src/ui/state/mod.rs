// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Validated value types shared by the components and the configuration
//! layer.

pub mod toggle_size;

// Re-export commonly used types for convenience
pub use toggle_size::ToggleSize;
