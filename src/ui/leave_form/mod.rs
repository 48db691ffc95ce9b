// SPDX-License-Identifier: MPL-2.0
//! The leave request form with its paired departure/return inputs.
//!
//! When the form appears, an empty departure defaults to the next full hour
//! and becomes its own minimum. Every departure edit re-applies the pairing
//! rule: the return minimum follows the departure, and a return that is
//! blank or not after the departure is bumped to departure + 1 hour.
//! Failed submits surface as error flashes, so the form reports them
//! through [`Event::Rejected`] and the app turns them into flashes.

use crate::domain::leave::{finalize, LeaveDraft, LeaveError, LeaveRequest};
use crate::domain::roster::{FieldLocale, Manager};
use crate::domain::schedule::{self, FieldEdit, PairField};
use crate::i18n::fluent::I18n;
use crate::ui::booking_form::Choice;
use crate::ui::design_tokens::{sizing, spacing, typography};
use chrono::NaiveDateTime;
use iced::widget::{button, pick_list, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    ManagerPicked(Choice),
    DepartureChanged(String),
    ReturnChanged(String),
    ReasonChanged(String),
    DestinationChanged(String),
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submitted(LeaveRequest),
    /// Submission failed; the app flashes the error.
    Rejected(LeaveError),
}

#[derive(Debug)]
pub struct State {
    managers: Vec<Manager>,
    draft: LeaveDraft,
}

impl State {
    pub fn new(managers: Vec<Manager>, now: NaiveDateTime) -> Self {
        let mut state = Self {
            managers,
            draft: LeaveDraft::default(),
        };
        state.apply_edits(schedule::seed_pair(&state.draft.departure, now));
        state
    }

    pub fn reset(&mut self, now: NaiveDateTime) {
        self.draft = LeaveDraft::default();
        self.apply_edits(schedule::seed_pair(&self.draft.departure, now));
    }

    pub fn draft(&self) -> &LeaveDraft {
        &self.draft
    }

    fn apply_edits(&mut self, edits: Vec<FieldEdit>) {
        for edit in edits {
            match edit {
                FieldEdit::SetValue(PairField::Departure, value) => self.draft.departure = value,
                FieldEdit::SetValue(PairField::Return, value) => self.draft.return_value = value,
                FieldEdit::SetMinimum(PairField::Departure, value) => {
                    self.draft.departure_min = value;
                }
                FieldEdit::SetMinimum(PairField::Return, value) => self.draft.return_min = value,
            }
        }
    }

    pub fn update(&mut self, message: Message, locale: FieldLocale) -> Event {
        match message {
            Message::ManagerPicked(choice) => {
                if let Some(manager) = self.managers.get(choice.index) {
                    self.draft.manager_name = Some(manager.name.clone());
                    self.draft.manager_name_ar = manager.name_ar.clone();
                }
                Event::None
            }
            Message::DepartureChanged(value) => {
                self.draft.departure = value;
                self.apply_edits(schedule::departure_changed(
                    &self.draft.departure,
                    &self.draft.return_value,
                ));
                Event::None
            }
            Message::ReturnChanged(value) => {
                self.draft.return_value = value;
                Event::None
            }
            Message::ReasonChanged(value) => {
                match locale {
                    FieldLocale::English => self.draft.reason = value,
                    FieldLocale::Arabic => self.draft.reason_ar = value,
                }
                Event::None
            }
            Message::DestinationChanged(value) => {
                match locale {
                    FieldLocale::English => self.draft.destination = value,
                    FieldLocale::Arabic => self.draft.destination_ar = value,
                }
                Event::None
            }
            Message::Submit => match finalize(&self.draft, locale) {
                Ok(request) => Event::Submitted(request),
                Err(error) => Event::Rejected(error),
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let locale = FieldLocale::from_language(i18n.current_locale());

        let manager_choices: Vec<Choice> = self
            .managers
            .iter()
            .enumerate()
            .map(|(index, m)| Choice {
                index,
                label: m.localized_name(locale).to_string(),
            })
            .collect();
        let selected_manager = self.draft.manager_name.as_deref().and_then(|name| {
            let index = self.managers.iter().position(|m| m.name == name)?;
            manager_choices.get(index).cloned()
        });

        let (reason, destination) = match locale {
            FieldLocale::English => (&self.draft.reason, &self.draft.destination),
            FieldLocale::Arabic => (&self.draft.reason_ar, &self.draft.destination_ar),
        };

        let form = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("leave-title")).size(typography::TITLE))
            .push(datetime_field(
                i18n,
                "leave-departure-label",
                &self.draft.departure,
                &self.draft.departure_min,
                Message::DepartureChanged,
            ))
            .push(datetime_field(
                i18n,
                "leave-return-label",
                &self.draft.return_value,
                &self.draft.return_min,
                Message::ReturnChanged,
            ))
            .push(labeled(
                i18n.tr("leave-reason-label"),
                text_input("", reason)
                    .on_input(Message::ReasonChanged)
                    .width(Length::Fill),
            ))
            .push(labeled(
                i18n.tr("leave-destination-label"),
                text_input("", destination)
                    .on_input(Message::DestinationChanged)
                    .width(Length::Fill),
            ))
            .push(labeled(
                i18n.tr("leave-manager-label"),
                pick_list(manager_choices, selected_manager, Message::ManagerPicked)
                    .placeholder(i18n.tr("booking-manager-placeholder"))
                    .width(Length::Fill),
            ))
            .push(
                button(Text::new(i18n.tr("leave-submit")))
                    .on_press(Message::Submit)
                    .style(button::primary),
            );

        Container::new(form.max_width(sizing::FORM_WIDTH))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::LG)
            .into()
    }
}

/// A datetime input with its minimum-allowed value shown underneath.
fn datetime_field<'a>(
    i18n: &'a I18n,
    label_key: &str,
    value: &str,
    minimum: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS).push(
        Text::new(i18n.tr(label_key)).size(typography::CAPTION),
    );
    column = column.push(
        text_input(&i18n.tr("datetime-placeholder"), value)
            .on_input(on_input)
            .width(Length::Fill),
    );
    if !minimum.is_empty() {
        column = column.push(
            Text::new(i18n.tr_with_args("field-minimum", &[("min", minimum)]))
                .size(typography::CAPTION),
        );
    }
    column.into()
}

fn labeled<'a>(label: String, widget: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(widget)
        .into()
}
