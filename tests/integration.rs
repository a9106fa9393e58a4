// SPDX-License-Identifier: MPL-2.0
use iced_dock::animation::{Animated, Motion, Scheduler, SpringConfig};
use iced_dock::app::{App, Flags, Message};
use iced_dock::config::{self, Config};
use iced_dock::i18n::fluent::I18n;
use iced_dock::ui::haptics::{ImpactStyle, RecordingHaptics};
use iced_dock::ui::menu::{self, Geometry, MenuOptions, Phase, MENU_ENTRIES};
use iced_dock::ui::state::ToggleSize;
use iced_dock::ui::theme_toggle;
use std::time::Duration;
use tempfile::tempdir;

const FRAME: Duration = Duration::from_millis(16);

fn settle_menu(state: &mut menu::State) {
    for _ in 0..1_000 {
        if !state.is_animating() {
            return;
        }
        state.advance(FRAME);
    }
    panic!("menu did not settle");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    std::fs::write(
        &temp_config_file_path,
        "[general]\nlanguage = \"en-US\"\ntheme_mode = \"light\"\n",
    )
    .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("menu-expanded-title"), "Main Menu");

    // 2. Change config to fr
    std::fs::write(
        &temp_config_file_path,
        "[general]\nlanguage = \"fr\"\ntheme_mode = \"light\"\n",
    )
    .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("menu-expanded-title"), "Menu Principal");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_settings_file_drives_startup_state() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"dark\"\n\n[toggle]\nsize = 70.0\n\n[menu]\nhaptics = false\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let (app, _) = App::with_config(Flags::default(), &config);
    assert!(app.is_dark());
    assert_eq!(app.toggle().size(), ToggleSize::new(70.0));
    assert_eq!(app.toggle().thumb_offset(), 70.0 - 28.0);
}

#[test]
fn test_toggle_scenario() {
    let mut toggle = theme_toggle::State::default();

    assert_eq!(
        toggle.update(theme_toggle::Message::Pressed),
        theme_toggle::Event::ThemeChanged(true)
    );
    assert_eq!(toggle.rotation_target(), 180.0);
    assert_eq!(toggle.track_color_target(), theme_toggle::TRACK_DARK);

    assert_eq!(
        toggle.update(theme_toggle::Message::Pressed),
        theme_toggle::Event::ThemeChanged(false)
    );
    assert_eq!(toggle.rotation_target(), 360.0);
    assert_eq!(toggle.track_color_target(), theme_toggle::TRACK_LIGHT);
}

#[test]
fn test_toggle_and_menu_share_root_theme() {
    let flags = Flags {
        lang: Some("en-US".into()),
        ..Flags::default()
    };
    let (mut app, _) = App::with_config(flags, &Config::default());

    let _ = app.update(Message::Toggle(theme_toggle::Message::Pressed));
    let _ = app.update(Message::Menu(menu::Message::ToggleRequested));
    for _ in 0..200 {
        app.advance(FRAME);
    }

    assert!(app.is_dark());
    assert!(app.toggle().is_dark());
    assert_eq!(app.menu().phase(), Phase::Expanded);
    assert!(!app.is_animating());
}

#[test]
fn test_menu_scenario_and_backdrop_collapse() {
    let haptics = RecordingHaptics::new();
    let mut state = menu::State::new(390.0, MenuOptions::default());

    assert_eq!(
        state.update(menu::Message::ToggleRequested, &haptics),
        menu::Event::Expanded
    );
    let target = state.geometry_target();
    assert_eq!(target.width, 350.0);
    assert_eq!(target.height, 280.0);
    assert_eq!(target.rotation, 45.0);
    settle_menu(&mut state);

    assert_eq!(
        state.update(menu::Message::BackdropPressed, &haptics),
        menu::Event::Collapsed
    );
    state.advance(Duration::from_millis(150));
    assert_eq!(state.geometry_target(), Geometry::COMPACT);

    settle_menu(&mut state);
    assert_eq!(state.geometry(), Geometry::COMPACT);
    assert_eq!(haptics.impacts(), vec![ImpactStyle::Medium]);
}

#[test]
fn test_menu_entries_are_fixed() {
    let ids: Vec<u32> = MENU_ENTRIES.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(MENU_ENTRIES[0].label_key, "menu-entry-chat");
}

#[test]
fn test_engine_pieces_compose() {
    let mut scheduler = Scheduler::new();
    let mut value = Animated::new(0.0);
    scheduler.schedule(Duration::from_millis(100), 1.0_f32);

    for _ in 0..10 {
        for target in scheduler.advance(FRAME) {
            value.animate(Motion::spring(target, SpringConfig::default()));
        }
        value.advance(FRAME);
    }
    assert!(value.is_animating());
    assert!(value.value() > 0.0);
}
