// SPDX-License-Identifier: MPL-2.0
//! Validation error banner shown above a form.
//!
//! Renders one bullet-prefixed line per message inside a red-accented block.
//! The banner is owned by the form that produced it, so two forms on screen
//! can never fight over a shared node, and it carries no dismiss timer: it
//! stays until the next submit attempt replaces or clears it.

use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{Color, Element, Length, Theme};

/// Builds the banner element for a non-empty list of localized messages.
pub fn view<'a, Message: 'a>(messages: &[String]) -> Element<'a, Message> {
    let mut lines = Column::new().spacing(spacing::XXS);
    for message in messages {
        lines = lines.push(
            Text::new(format!("\u{2022} {message}"))
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    Container::new(lines)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(banner_style)
        .into()
}

fn banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: 0.08,
            ..palette::ERROR_500
        })),
        border: iced::Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_style_uses_error_accent() {
        let style = banner_style(&Theme::Light);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn banner_renders_for_multiple_messages() {
        let messages = vec![
            "Please select a vehicle.".to_string(),
            "Please enter a destination.".to_string(),
        ];
        let _element: Element<'_, ()> = view(&messages);
    }
}
