// SPDX-License-Identifier: MPL-2.0
//! Static entries of the expanded menu.

use crate::ui::design_tokens::palette;
use crate::ui::icons::Glyph;
use iced::Color;

/// One row of the expanded list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuEntry {
    /// Stable, unique identifier.
    pub id: u32,
    pub glyph: Glyph,
    /// Fluent message id of the row label.
    pub label_key: &'static str,
    pub accent: Color,
}

/// The ten entries, in display order.
pub const MENU_ENTRIES: [MenuEntry; 10] = [
    MenuEntry {
        id: 1,
        glyph: Glyph::ChatBubble,
        label_key: "menu-entry-chat",
        accent: palette::LIME,
    },
    MenuEntry {
        id: 2,
        glyph: Glyph::Search,
        label_key: "menu-entry-search",
        accent: palette::ORANGE,
    },
    MenuEntry {
        id: 3,
        glyph: Glyph::Heart,
        label_key: "menu-entry-favorites",
        accent: palette::RED,
    },
    MenuEntry {
        id: 4,
        glyph: Glyph::Person,
        label_key: "menu-entry-profile",
        accent: palette::GREEN,
    },
    MenuEntry {
        id: 5,
        glyph: Glyph::Settings,
        label_key: "menu-entry-settings",
        accent: palette::GRAY_500,
    },
    MenuEntry {
        id: 6,
        glyph: Glyph::Notifications,
        label_key: "menu-entry-notifications",
        accent: palette::PINK,
    },
    MenuEntry {
        id: 7,
        glyph: Glyph::Bookmark,
        label_key: "menu-entry-bookmarks",
        accent: palette::INDIGO,
    },
    MenuEntry {
        id: 8,
        glyph: Glyph::Camera,
        label_key: "menu-entry-camera",
        accent: palette::GREEN_BRIGHT,
    },
    MenuEntry {
        id: 9,
        glyph: Glyph::Mail,
        label_key: "menu-entry-messages",
        accent: palette::BLUE,
    },
    MenuEntry {
        id: 10,
        glyph: Glyph::Calendar,
        label_key: "menu-entry-calendar",
        accent: palette::RED,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_ordered() {
        let ids: Vec<u32> = MENU_ENTRIES.iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn label_keys_are_unique() {
        let keys: HashSet<&str> = MENU_ENTRIES.iter().map(|e| e.label_key).collect();
        assert_eq!(keys.len(), MENU_ENTRIES.len());
    }

    #[test]
    fn ninth_entry_is_mail() {
        assert_eq!(MENU_ENTRIES[8].id, 9);
        assert_eq!(MENU_ENTRIES[8].glyph, Glyph::Mail);
    }
}
