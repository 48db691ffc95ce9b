//! This module defines the UI for the application's settings view. It
//! currently provides a language selection submenu, allowing users to choose
//! their preferred display language.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Text},
    Element, Length,
};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE);

    let mut language_column = Column::new()
        .push(Text::new(i18n.tr("select-language-label")))
        .spacing(spacing::XS);

    for locale in &i18n.available_locales {
        let display_name = locale.to_string();

        // Look up the translated language name, e.g. "language-name-ar".
        let translated_name = i18n.tr(&format!("language-name-{locale}"));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name
        } else {
            format!("{translated_name} ({display_name})")
        };

        let is_current = i18n.current_locale() == locale;
        let mut language_button = Button::new(Text::new(button_text))
            .on_press(Message::LanguageSelected(locale.clone()));
        if is_current {
            language_button = language_button.style(button::primary);
        } else {
            language_button = language_button.style(button::secondary);
        }

        language_column = language_column.push(language_button);
    }

    Column::new()
        .push(title)
        .push(language_column)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
