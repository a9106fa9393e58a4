// SPDX-License-Identifier: MPL-2.0
//! Light/dark palettes and the startup theme mode.
//!
//! Every palette is a pure lookup keyed on the `is_dark` flag owned by the
//! root. Nothing here is animated; the toggle track is the only surface that
//! cross-fades, and it does so from its own colors.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::Deserialize;

/// Colors of the root screen (background and header text).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub background: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            text_primary: palette::BLACK,
            text_secondary: palette::GRAY_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::BLACK,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_500,
        }
    }

    #[must_use]
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Colors of the floating menu in both of its states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPalette {
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub separator: Color,
    pub border: Color,
    pub accent: Color,
    pub shadow_alpha: f32,
    /// Tint laid over the screen behind the expanded menu.
    pub backdrop: Color,
}

impl MenuPalette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            text: palette::BLACK,
            text_secondary: palette::GRAY_600,
            separator: palette::GRAY_100,
            border: palette::GRAY_100,
            accent: palette::LIME,
            shadow_alpha: opacity::MENU_SHADOW_LIGHT,
            backdrop: Color {
                a: opacity::BACKDROP_TINT,
                ..palette::WHITE
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            text: palette::WHITE,
            text_secondary: palette::GRAY_500,
            separator: palette::GRAY_800,
            border: palette::GRAY_800,
            accent: palette::LIME,
            shadow_alpha: opacity::MENU_SHADOW_DARK,
            backdrop: Color {
                a: opacity::BACKDROP_TINT,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Theme chosen at startup. After launch only the toggle changes the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Fall back to light, the app's own default, on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }
}
