// SPDX-License-Identifier: MPL-2.0
//! Widget rendering for the flash stack.
//!
//! Flashes render as small cards with a severity-colored border in the
//! bottom-right corner. The card's colors are multiplied by the flash's
//! current opacity, which produces the fade-out.

use super::message::Flash;
use super::manager::{Manager, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Renders a single flash card at its current opacity.
fn view_flash<'a>(flash: &'a Flash, i18n: &'a I18n) -> Element<'a, Message> {
    let alpha = flash.opacity();
    let accent = flash.severity().color();

    let message_text = if flash.message_args().is_empty() {
        i18n.tr(flash.message_key())
    } else {
        let args: Vec<(&str, &str)> = flash
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(flash.message_key(), &args)
    };

    let message_widget = Text::new(message_text)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, alpha)),
        });

    let dismiss_button = button(Text::new("×").size(typography::BODY))
        .on_press(Message::Dismiss(flash.id()))
        .padding(spacing::XXS)
        .style(button::text);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::FLASH_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| flash_container_style(theme, accent, alpha))
        .into()
}

/// Renders the whole flash stack, bottom-right, newest on top.
pub fn view_stack<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> =
        manager.iter().map(|flash| view_flash(flash, i18n)).collect();

    if cards.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn flash_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(with_alpha(bg, alpha))),
        border: iced::Border {
            color: with_alpha(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}
