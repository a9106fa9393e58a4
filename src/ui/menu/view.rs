// SPDX-License-Identifier: MPL-2.0
//! Rendering of the floating menu and its backdrop.
//!
//! iced has no generic opacity or blur, so animated opacity is applied by
//! scaling the alpha of every color drawn, and the backdrop is a flat tint.

use super::entries::MenuEntry;
use super::state::{Message, State};
use crate::fonts;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons::{self, Glyph, GlyphCanvas};
use crate::ui::theming::MenuPalette;
use iced::widget::{container, mouse_area, scrollable, text, Column, Container, Row, Space};
use iced::{alignment, mouse, Background, Border, Color, Element, Length, Theme};

/// Dependencies passed down by the root at view time.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
}

/// Scales the alpha channel of a color.
fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Full-screen tint behind the expanded menu, `None` once fully hidden.
pub fn backdrop<'a>(state: &State, ctx: ViewContext<'_>) -> Option<Element<'a, Message>> {
    if !state.backdrop_visible() {
        return None;
    }

    let tint = fade(MenuPalette::for_theme(ctx.is_dark).backdrop, state.backdrop_opacity());
    let layer = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(tint)),
            ..Default::default()
        });

    let mut area = mouse_area(layer);
    if state.backdrop_interactive() {
        area = area.on_press(Message::BackdropPressed);
    }
    Some(area.into())
}

/// Menu layer, filling the screen with the container anchored at the bottom.
pub fn view<'a>(state: &State, ctx: ViewContext<'_>) -> Element<'a, Message> {
    let palette = MenuPalette::for_theme(ctx.is_dark);
    let geometry = state.geometry();

    let content = if state.shows_expanded_content() {
        expanded_content(state, ctx, &palette)
    } else {
        compact_content(state, ctx, &palette)
    };

    let panel = Container::new(content)
        .width(Length::Fixed(geometry.width.max(0.0)))
        .height(Length::Fixed(geometry.height.max(0.0)))
        .padding([sizing::MENU_PADDING_Y, sizing::MENU_PADDING_X])
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(palette.surface)),
            border: Border {
                color: palette.border,
                width: border::WIDTH_HAIRLINE,
                radius: radius::MENU.into(),
            },
            shadow: shadow::menu(palette.shadow_alpha),
            ..Default::default()
        });

    let row = Row::new()
        .push(Space::new().width(Length::Fixed(state.left().max(0.0))))
        .push(panel);

    Column::new()
        .push(Space::new().height(Length::Fill))
        .push(row)
        .push(Space::new().height(Length::Fixed(sizing::MENU_BOTTOM_MARGIN)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Accent plus, rotated by the geometry spring into a cross.
fn plus_icon(state: &State, palette: &MenuPalette, size: f32) -> GlyphCanvas {
    GlyphCanvas::new(Glyph::Add, palette.accent, size)
        .rotation(state.geometry().rotation)
}

/// Plus affordance toggling the menu.
fn plus_button<'a>(state: &State, palette: &MenuPalette, size: f32) -> Element<'a, Message> {
    mouse_area(plus_icon(state, palette, size).into_element())
        .on_press(Message::ToggleRequested)
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn vertical_rule<'a>(color: Color) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(border::WIDTH_SM))
        .height(Length::Fixed(sizing::MENU_SEPARATOR_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        })
        .into()
}

fn horizontal_rule<'a>(color: Color) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(border::WIDTH_SM))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        })
        .into()
}

/// Chat cluster, separator and plus icon.
fn compact_content<'a>(
    state: &State,
    ctx: ViewContext<'_>,
    palette: &MenuPalette,
) -> Element<'a, Message> {
    let chat_alpha = state.chat_opacity();

    let chat = Row::new()
        .push(icons::glyph(
            Glyph::ChatBubble,
            fade(palette.accent, chat_alpha),
            sizing::ICON_MD,
        ))
        .push(
            text(ctx.i18n.tr("menu-compact-chat"))
                .size(typography::TITLE_MD)
                .font(fonts::SERIF_ITALIC)
                .color(fade(palette.text, chat_alpha)),
        )
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    Row::new()
        .push(chat)
        .push(Space::new().width(Length::Fill))
        .push(vertical_rule(palette.separator))
        .push(Space::new().width(Length::Fill))
        .push(plus_button(state, palette, sizing::ICON_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Header, separator and the scrollable entry list.
fn expanded_content<'a>(
    state: &State,
    ctx: ViewContext<'_>,
    palette: &MenuPalette,
) -> Element<'a, Message> {
    let title_alpha = state.title_opacity();
    let items_alpha = state.items_opacity();

    let header = Row::new()
        .push(
            text(ctx.i18n.tr("menu-expanded-title"))
                .size(typography::TITLE_SM)
                .font(fonts::SERIF_ITALIC)
                .color(fade(palette.text, title_alpha)),
        )
        .push(Space::new().width(Length::Fill))
        .push(plus_button(state, palette, sizing::ICON_XL))
        .align_y(alignment::Vertical::Center);

    let rows = state
        .entries()
        .iter()
        .fold(Column::new().spacing(sizing::MENU_ROW_GAP), |column, entry| {
            column.push(entry_row(entry, ctx, palette, items_alpha))
        });

    let list = scrollable(rows)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::hidden(),
        ))
        .width(Length::Fill)
        .height(Length::Fill);

    let list = Column::new()
        .push(Space::new().height(Length::Fixed(state.items_offset().max(0.0))))
        .push(list)
        .height(Length::Fill);

    Column::new()
        .push(header)
        .push(Space::new().height(Length::Fixed(spacing::MD)))
        .push(horizontal_rule(fade(palette.separator, title_alpha)))
        .push(Space::new().height(Length::Fixed(spacing::SM)))
        .push(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn entry_row<'a>(
    entry: &MenuEntry,
    ctx: ViewContext<'_>,
    palette: &MenuPalette,
    alpha: f32,
) -> Element<'a, Message> {
    let row = Row::new()
        .push(icons::glyph(entry.glyph, fade(entry.accent, alpha), sizing::ICON_LG))
        .push(Space::new().width(Length::Fixed(spacing::MD)))
        .push(
            text(ctx.i18n.tr(entry.label_key))
                .size(typography::BODY_LG)
                .color(fade(palette.text, alpha)),
        )
        .push(Space::new().width(Length::Fill))
        .push(icons::glyph(
            Glyph::ChevronForward,
            fade(palette.text_secondary, alpha),
            sizing::ICON_SM,
        ))
        .width(Length::Fill)
        .padding([spacing::SM, spacing::XXS])
        .align_y(alignment::Vertical::Center);

    mouse_area(row)
        .on_press(Message::EntryPressed(entry.id))
        .interaction(mouse::Interaction::Pointer)
        .into()
}
