// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar and the active screen, with the flash stack laid over
//! the content in the bottom-right corner.

use super::{App, Message, Screen};
use crate::ui::{flash, navbar, settings};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.screen {
            Screen::Booking => self.booking.view(&self.i18n).map(Message::Booking),
            Screen::Leave => self.leave.view(&self.i18n).map(Message::Leave),
            Screen::Settings => settings::view(&self.i18n),
        };

        let base = Column::new()
            .push(navbar::view(&self.i18n, self.screen))
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );

        let overlay = flash::view_stack(&self.flashes, &self.i18n).map(Message::Flash);

        Stack::new()
            .push(base)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
