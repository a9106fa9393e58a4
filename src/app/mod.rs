// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the toggle and the menu.
//!
//! The `App` struct owns the single theme flag and passes it down at view
//! time; components report back through events. Frame ticks and window
//! geometry are the only inputs besides user interaction.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::fonts::{self, FontGate};
use crate::i18n::fluent::I18n;
use crate::ui::haptics::{self, HapticFeedback};
use crate::ui::{menu, theme_toggle};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    is_dark: bool,
    toggle: theme_toggle::State,
    menu: menu::State,
    haptics: Box<dyn HapticFeedback>,
    fonts: FontGate,
    screen_size: Size,
    /// Timestamp of the previous frame while animating.
    last_frame: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_dark", &self.is_dark)
            .field("menu_phase", &self.menu.phase())
            .field("fonts_ready", &self.fonts.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Flags::default(), &Config::default()).0
    }
}

impl App {
    /// Loads the settings file, then builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app, task) = Self::with_config(flags, &config);

        if let Some(key) = config_warning {
            log::warn!("{}", app.i18n.tr(&key));
        }
        (app, task)
    }

    /// Builds the initial state from already loaded settings and starts
    /// loading the bundled fonts.
    pub fn with_config(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let is_dark = flags.dark || config.general.theme_mode.is_dark();
        let screen_size = Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
        let (fonts, font_task) =
            fonts::load_bundled(|name, result| Message::FontLoaded { name, result });

        log::info!(
            "starting with theme mode {:?} (dark = {is_dark})",
            config.general.theme_mode
        );

        let app = App {
            i18n,
            is_dark,
            toggle: theme_toggle::State::new(config.toggle.size(), is_dark),
            menu: menu::State::new(screen_size.width, config.menu.options()),
            haptics: haptics::backend(config.menu.haptics_enabled()),
            fonts,
            screen_size,
            last_frame: None,
        };
        (app, font_task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Current theme flag, the single source of truth for every palette.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub fn menu(&self) -> &menu::State {
        &self.menu
    }

    #[must_use]
    pub fn toggle(&self) -> &theme_toggle::State {
        &self.toggle
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.toggle.is_animating() || self.menu.is_animating()
    }

    #[must_use]
    pub fn fonts_ready(&self) -> bool {
        self.fonts.is_open()
    }

    /// Advances every animation without waiting for display frames.
    pub fn advance(&mut self, dt: Duration) {
        update::advance(&mut self.update_context(), dt);
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.is_animating()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            is_dark: &mut self.is_dark,
            toggle: &mut self.toggle,
            menu: &mut self.menu,
            haptics: self.haptics.as_ref(),
            fonts: &mut self.fonts,
            screen_size: &mut self.screen_size,
            last_frame: &mut self.last_frame,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Toggle(toggle_message) => {
                update::handle_toggle_message(&mut ctx, toggle_message)
            }
            Message::Menu(menu_message) => update::handle_menu_message(&mut ctx, menu_message),
            Message::Frame(now) => update::handle_frame(&mut ctx, now),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::FontLoaded { name, result } => {
                update::handle_font_loaded(&mut ctx, &name, result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            is_dark: self.is_dark,
            toggle: &self.toggle,
            menu: &self.menu,
            fonts_ready: self.fonts.is_open(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::menu::Phase;

    fn app() -> App {
        let flags = Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        };
        App::with_config(flags, &Config::default()).0
    }

    fn settle(app: &mut App) {
        for _ in 0..1_000 {
            if !app.is_animating() {
                return;
            }
            app.advance(Duration::from_millis(16));
        }
        panic!("app did not settle");
    }

    #[test]
    fn starts_light_and_idle() {
        let app = app();
        assert!(!app.is_dark());
        assert_eq!(app.theme(), Theme::Light);
        assert!(!app.is_animating());
        assert_eq!(app.menu().phase(), Phase::Compact);
    }

    #[test]
    fn dark_flag_overrides_configured_mode() {
        let flags = Flags {
            dark: true,
            ..Flags::default()
        };
        let (app, _) = App::with_config(flags, &Config::default());
        assert!(app.is_dark());
        assert!(app.toggle().is_dark());
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn title_is_localized() {
        assert_eq!(app().title(), "Iced Dock");
    }

    #[test]
    fn toggle_event_updates_root_theme() {
        let mut app = app();
        let _ = app.update(Message::Toggle(theme_toggle::Message::Pressed));
        assert!(app.is_dark());
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::Toggle(theme_toggle::Message::Pressed));
        assert!(!app.is_dark());
    }

    #[test]
    fn menu_round_trip_through_messages() {
        let mut app = app();
        let _ = app.update(Message::Menu(menu::Message::ToggleRequested));
        assert!(app.menu().is_expanded());
        settle(&mut app);

        let _ = app.update(Message::Menu(menu::Message::EntryPressed(4)));
        assert!(app.menu().is_expanded());

        let _ = app.update(Message::Menu(menu::Message::BackdropPressed));
        assert!(!app.menu().is_expanded());
        settle(&mut app);
        assert_eq!(app.menu().geometry(), menu::Geometry::COMPACT);
    }

    #[test]
    fn frames_advance_with_measured_deltas() {
        let mut app = app();
        let _ = app.update(Message::Toggle(theme_toggle::Message::Pressed));

        let start = Instant::now();
        let _ = app.update(Message::Frame(start));
        assert_eq!(app.toggle().thumb_offset(), 0.0);

        let _ = app.update(Message::Frame(start + Duration::from_millis(16)));
        assert!(app.toggle().thumb_offset() > 0.0);
    }

    #[test]
    fn frame_clock_resets_once_idle() {
        let mut app = app();
        let _ = app.update(Message::Frame(Instant::now()));
        assert!(app.last_frame.is_none());
    }

    #[test]
    fn resize_reaches_menu() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 900.0)));
        assert_eq!(app.menu().screen_width(), 600.0);
        assert_eq!(app.screen_size, Size::new(600.0, 900.0));
    }

    #[test]
    fn failed_font_still_opens_gate() {
        let mut app = app();
        app.fonts = FontGate::new(1);
        assert!(!app.fonts_ready());

        let _ = app.update(Message::FontLoaded {
            name: "InstrumentSerif-Italic.ttf".into(),
            result: Err(crate::error::FontError::LoadFailed(
                "InstrumentSerif-Italic.ttf".into(),
            )),
        });
        assert!(app.fonts_ready());
    }
}
