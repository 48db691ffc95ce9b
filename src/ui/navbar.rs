// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar switching between the screens.

use crate::app::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(i18n: &'a I18n, current: Screen) -> Element<'a, Message> {
    let entries = [
        (Screen::Booking, "nav-booking"),
        (Screen::Leave, "nav-leave"),
        (Screen::Settings, "nav-settings"),
    ];

    let mut row = Row::new().spacing(spacing::XS).padding(spacing::XS);
    for (screen, key) in entries {
        let mut entry = button(Text::new(i18n.tr(key)));
        if screen == current {
            entry = entry.style(button::primary);
        } else {
            entry = entry.style(button::text).on_press(Message::SwitchScreen(screen));
        }
        row = row.push(entry);
    }

    Container::new(row).width(Length::Fill).into()
}
