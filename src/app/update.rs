// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.
//!
//! Each handler receives an [`UpdateContext`] borrowing the pieces of `App`
//! it may touch, which keeps the components testable without a runtime.

use super::Message;
use crate::animation::clamp_frame_delta;
use crate::error::FontError;
use crate::fonts::FontGate;
use crate::i18n::fluent::I18n;
use crate::ui::haptics::HapticFeedback;
use crate::ui::{menu, theme_toggle};
use iced::{Size, Task};
use std::time::{Duration, Instant};

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: &'a mut bool,
    pub toggle: &'a mut theme_toggle::State,
    pub menu: &'a mut menu::State,
    pub haptics: &'a dyn HapticFeedback,
    pub fonts: &'a mut FontGate,
    pub screen_size: &'a mut Size,
    pub last_frame: &'a mut Option<Instant>,
}

pub fn handle_toggle_message(
    ctx: &mut UpdateContext<'_>,
    message: theme_toggle::Message,
) -> Task<Message> {
    match ctx.toggle.update(message) {
        theme_toggle::Event::ThemeChanged(is_dark) => {
            *ctx.is_dark = is_dark;
            log::info!("theme changed, dark = {is_dark}");
        }
    }
    Task::none()
}

pub fn handle_menu_message(ctx: &mut UpdateContext<'_>, message: menu::Message) -> Task<Message> {
    match ctx.menu.update(message, ctx.haptics) {
        menu::Event::EntryActivated(id) => {
            log::info!("menu entry {id} activated");
        }
        menu::Event::Expanded | menu::Event::Collapsed | menu::Event::None => {}
    }
    Task::none()
}

/// Advances every animation by the time since the previous frame.
///
/// The first frame after an idle period only records its timestamp.
pub fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let dt = ctx
        .last_frame
        .map(|last| clamp_frame_delta(now.saturating_duration_since(last)))
        .unwrap_or(Duration::ZERO);
    *ctx.last_frame = Some(now);

    advance(ctx, dt);

    if !ctx.toggle.is_animating() && !ctx.menu.is_animating() {
        *ctx.last_frame = None;
    }
    Task::none()
}

pub fn advance(ctx: &mut UpdateContext<'_>, dt: Duration) {
    ctx.toggle.advance(dt);
    ctx.menu.advance(dt);
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.screen_size = size;
    ctx.menu.set_screen_width(size.width);
    Task::none()
}

pub fn handle_font_loaded(
    ctx: &mut UpdateContext<'_>,
    name: &str,
    result: Result<(), FontError>,
) -> Task<Message> {
    match result {
        Ok(()) => log::info!("font loaded: {name}"),
        Err(err) => log::warn!("{} ({err})", ctx.i18n.tr(err.i18n_key())),
    }
    ctx.fonts.resolve();
    Task::none()
}
