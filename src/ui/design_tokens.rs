// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and spacing value used by the toggle, the floating menu and
the root header lives here.

## Organization

- **Palette**: Base colors (system grays plus the entry accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_dock::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP_TINT,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Elevated dark surface (#1C1C1E).
    pub const GRAY_900: Color = Color::from_rgb(0.110, 0.110, 0.118);
    /// Dark separator (#38383A).
    pub const GRAY_800: Color = Color::from_rgb(0.220, 0.220, 0.227);
    /// Secondary text on light surfaces (#6D6D70).
    pub const GRAY_600: Color = Color::from_rgb(0.427, 0.427, 0.439);
    /// Secondary text on dark surfaces (#8E8E93).
    pub const GRAY_500: Color = Color::from_rgb(0.557, 0.557, 0.576);
    /// Light separator and light toggle track (#E5E5E7).
    pub const GRAY_100: Color = Color::from_rgb(0.898, 0.898, 0.906);

    // Accents
    /// Menu accent (#AFFF00).
    pub const LIME: Color = Color::from_rgb(0.686, 1.0, 0.0);
    /// Sun glyph and search entry (#FF9500).
    pub const ORANGE: Color = Color::from_rgb(1.0, 0.584, 0.0);
    /// #FF3B30
    pub const RED: Color = Color::from_rgb(1.0, 0.231, 0.188);
    /// #34C759
    pub const GREEN: Color = Color::from_rgb(0.204, 0.780, 0.349);
    /// #32D74B
    pub const GREEN_BRIGHT: Color = Color::from_rgb(0.196, 0.843, 0.294);
    /// #FF2D92
    pub const PINK: Color = Color::from_rgb(1.0, 0.176, 0.573);
    /// #5856D6
    pub const INDIGO: Color = Color::from_rgb(0.345, 0.337, 0.839);
    /// #007AFF
    pub const BLUE: Color = Color::from_rgb(0.0, 0.478, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const THUMB_SHADOW: f32 = 0.1;
    pub const MENU_SHADOW_LIGHT: f32 = 0.15;
    pub const BACKDROP_TINT: f32 = 0.3;
    pub const MENU_SHADOW_DARK: f32 = 0.4;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 40.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 14.0;
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;
    pub const ICON_XL: f32 = 28.0;

    // Theme toggle
    pub const TOGGLE_TRACK_HEIGHT: f32 = 28.0;
    pub const TOGGLE_TRACK_PADDING: f32 = 2.0;
    pub const TOGGLE_THUMB: f32 = 24.0;

    // Floating menu
    pub const MENU_COMPACT_WIDTH: f32 = 140.0;
    pub const MENU_COMPACT_HEIGHT: f32 = 60.0;
    pub const MENU_EXPANDED_HEIGHT: f32 = 280.0;
    /// Horizontal margin kept free on each side of the expanded menu.
    pub const MENU_SIDE_MARGIN: f32 = 20.0;
    pub const MENU_BOTTOM_MARGIN: f32 = 32.0;
    pub const MENU_PADDING_X: f32 = 16.0;
    pub const MENU_PADDING_Y: f32 = 15.0;
    pub const MENU_SEPARATOR_HEIGHT: f32 = 24.0;
    /// Vertical gap between list rows.
    pub const MENU_ROW_GAP: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Root page title
    pub const TITLE_LG: f32 = 34.0;

    /// Compact "Chat" label
    pub const TITLE_MD: f32 = 20.0;

    /// Expanded menu header
    pub const TITLE_SM: f32 = 18.0;

    /// Root subtitle
    pub const BODY_LG: f32 = 17.0;

    /// Menu rows
    pub const BODY: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Hairline around the floating menu
    pub const WIDTH_HAIRLINE: f32 = 0.5;

    /// Separators
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const TOGGLE: f32 = 14.0;
    pub const MENU: f32 = 18.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Floating menu elevation, tinted by the menu palette.
    #[must_use]
    pub fn menu(alpha: f32) -> Shadow {
        Shadow {
            color: Color {
                a: alpha,
                ..palette::BLACK
            },
            offset: Vector { x: 0.0, y: 8.0 },
            blur_radius: 20.0,
        }
    }

    /// Thumb shadow on the theme toggle.
    pub const THUMB: Shadow = Shadow {
        color: Color {
            a: opacity::THUMB_SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP_TINT > 0.0 && opacity::BACKDROP_TINT < 1.0);

    // The thumb must fit inside the track
    assert!(
        sizing::TOGGLE_THUMB + 2.0 * sizing::TOGGLE_TRACK_PADDING <= sizing::TOGGLE_TRACK_HEIGHT
    );

    // The expanded menu must be taller than the compact pill
    assert!(sizing::MENU_EXPANDED_HEIGHT > sizing::MENU_COMPACT_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
};
