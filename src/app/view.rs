// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The root is a stack of three layers: the header screen, the menu backdrop
//! (only while it is visible) and the floating menu itself.

use super::Message;
use crate::fonts;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::{menu, theme_toggle};
use iced::widget::{text, Column, Container, Row, Space, Stack};
use iced::{alignment, Background, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
    pub toggle: &'a theme_toggle::State,
    pub menu: &'a menu::State,
    pub fonts_ready: bool,
}

/// Renders the root screen with the menu layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_theme(ctx.is_dark);
    let background = move |_theme: &Theme| iced::widget::container::Style {
        background: Some(Background::Color(colors.background)),
        ..Default::default()
    };

    // Nothing is drawn until the bundled fonts are registered.
    if !ctx.fonts_ready {
        return Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(background)
            .into();
    }

    let titles = Column::new()
        .push(
            text(ctx.i18n.tr("header-title"))
                .size(typography::TITLE_LG)
                .font(fonts::SERIF)
                .color(colors.text_primary),
        )
        .push(
            text(ctx.i18n.tr("header-subtitle"))
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .spacing(spacing::XS);

    let header = Row::new()
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(ctx.toggle.view().map(Message::Toggle))
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XL, sizing::MENU_SIDE_MARGIN]);

    let screen = Container::new(
        Column::new()
            .push(header)
            .push(Space::new().height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(background);

    let menu_ctx = menu::ViewContext {
        i18n: ctx.i18n,
        is_dark: ctx.is_dark,
    };

    let mut layers = Stack::new().push(screen);
    if let Some(backdrop) = menu::backdrop(ctx.menu, menu_ctx) {
        layers = layers.push(backdrop.map(Message::Menu));
    }
    layers
        .push(menu::view(ctx.menu, menu_ctx).map(Message::Menu))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
