// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_dock::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_dock::ui::icons::{Glyph, GlyphCanvas};
    use iced_dock::ui::menu::MENU_ENTRIES;
    use iced_dock::ui::theming::{ColorScheme, MenuPalette, ThemeMode};

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::LIME;
        let _ = spacing::MD;
        let _ = opacity::BACKDROP_TINT;
        let _ = sizing::ICON_LG;
    }

    #[test]
    fn root_scheme_switches_correctly() {
        let light = ColorScheme::for_theme(false);
        let dark = ColorScheme::for_theme(true);

        // Background and text invert between light and dark
        assert!(light.background.r > dark.background.r);
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn menu_palette_keeps_accent_and_tint_strength() {
        let light = MenuPalette::for_theme(false);
        let dark = MenuPalette::for_theme(true);

        assert_eq!(light.accent, dark.accent);
        assert_eq!(light.backdrop.a, dark.backdrop.a);
        assert!(light.shadow_alpha < dark.shadow_alpha);
    }

    #[test]
    fn explicit_theme_modes_resolve() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn first_entry_uses_brand_accent() {
        assert_eq!(MENU_ENTRIES[0].accent, palette::LIME);
    }

    #[test]
    fn glyph_canvas_builders_compose() {
        let canvas = GlyphCanvas::new(Glyph::Add, palette::BLACK, sizing::ICON_MD)
            .rotation(45.0)
            .scale(0.8);
        let _element: iced::Element<'static, ()> = canvas.into_element();
    }
}
