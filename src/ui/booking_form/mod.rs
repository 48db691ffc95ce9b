// SPDX-License-Identifier: MPL-2.0
//! The car booking form.
//!
//! Required fields are checked only on submit. A failed submit keeps the
//! draft, stores the failures in this component's state, and renders them as
//! a banner above the form; the next attempt rebuilds the list from scratch
//! so the banner is replaced, never stacked. A successful submit emits
//! [`Event::Submitted`] and leaves follow-up (flash, reset) to the caller.

use crate::domain::booking::{finalize, BookingDraft, BookingRequest, ValidationError};
use crate::domain::roster::{FieldLocale, Manager, Vehicle};
use crate::domain::schedule;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_banner;
use crate::ui::design_tokens::{sizing, spacing, typography};
use chrono::NaiveDateTime;
use iced::widget::{button, pick_list, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};
use std::fmt;

/// A pick-list entry: roster index plus its localized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub index: usize,
    pub label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    VehiclePicked(Choice),
    ManagerPicked(Choice),
    DepartureChanged(String),
    DestinationChanged(String),
    PurposeChanged(String),
    Submit,
}

/// What the update produced, for the app to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submitted(BookingRequest),
}

#[derive(Debug)]
pub struct State {
    vehicles: Vec<Vehicle>,
    managers: Vec<Manager>,
    draft: BookingDraft,
    errors: Vec<ValidationError>,
}

impl State {
    /// Creates the form with an empty draft, then applies the generic
    /// defaulting rule: the empty departure input gets the current local
    /// time truncated to the minute.
    pub fn new(vehicles: Vec<Vehicle>, managers: Vec<Manager>, now: NaiveDateTime) -> Self {
        let mut state = Self {
            vehicles,
            managers,
            draft: BookingDraft::default(),
            errors: Vec::new(),
        };
        state.apply_defaults(now);
        state
    }

    fn apply_defaults(&mut self, now: NaiveDateTime) {
        if let Some(filled) = schedule::fill_empty_datetime(&self.draft.planned_departure, now) {
            self.draft.planned_departure = filled;
        }
    }

    /// Clears the draft and banner after a successful submission.
    pub fn reset(&mut self, now: NaiveDateTime) {
        self.draft = BookingDraft::default();
        self.errors.clear();
        self.apply_defaults(now);
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn update(&mut self, message: Message, locale: FieldLocale) -> Event {
        match message {
            Message::VehiclePicked(choice) => {
                self.draft.vehicle_id = self
                    .vehicles
                    .get(choice.index)
                    .map(|v| v.id.to_string());
                Event::None
            }
            Message::ManagerPicked(choice) => {
                if let Some(manager) = self.managers.get(choice.index) {
                    self.draft.manager_name = Some(manager.name.clone());
                    self.draft.manager_name_ar = manager.name_ar.clone();
                }
                Event::None
            }
            Message::DepartureChanged(value) => {
                self.draft.planned_departure = value;
                Event::None
            }
            Message::DestinationChanged(value) => {
                match locale {
                    FieldLocale::English => self.draft.destination = value,
                    FieldLocale::Arabic => self.draft.destination_ar = value,
                }
                Event::None
            }
            Message::PurposeChanged(value) => {
                match locale {
                    FieldLocale::English => self.draft.purpose = value,
                    FieldLocale::Arabic => self.draft.purpose_ar = value,
                }
                Event::None
            }
            Message::Submit => match finalize(&self.draft, locale) {
                Ok(request) => {
                    self.errors.clear();
                    Event::Submitted(request)
                }
                Err(errors) => {
                    self.errors = errors;
                    Event::None
                }
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let locale = FieldLocale::from_language(i18n.current_locale());

        let vehicle_choices: Vec<Choice> = self
            .vehicles
            .iter()
            .enumerate()
            .map(|(index, v)| Choice {
                index,
                label: format!("{} ({})", v.localized_name(locale), v.plate),
            })
            .collect();
        let selected_vehicle = self.draft.vehicle_id.as_deref().and_then(|id| {
            let index = self.vehicles.iter().position(|v| v.id.to_string() == id)?;
            vehicle_choices.get(index).cloned()
        });

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

        let (destination, purpose) = match locale {
            FieldLocale::English => (&self.draft.destination, &self.draft.purpose),
            FieldLocale::Arabic => (&self.draft.destination_ar, &self.draft.purpose_ar),
        };

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("booking-title")).size(typography::TITLE));

        if !self.errors.is_empty() {
            let messages: Vec<String> =
                self.errors.iter().map(|e| i18n.tr(e.i18n_key())).collect();
            form = form.push(error_banner::view(&messages));
        }

        form = form
            .push(labeled(
                i18n.tr("booking-vehicle-label"),
                pick_list(
                    vehicle_choices,
                    selected_vehicle,
                    Message::VehiclePicked,
                )
                .placeholder(i18n.tr("booking-vehicle-placeholder"))
                .width(Length::Fill),
            ))
            .push(labeled(
                i18n.tr("booking-manager-label"),
                pick_list(
                    manager_choices,
                    selected_manager,
                    Message::ManagerPicked,
                )
                .placeholder(i18n.tr("booking-manager-placeholder"))
                .width(Length::Fill),
            ))
            .push(labeled(
                i18n.tr("booking-departure-label"),
                text_input(&i18n.tr("datetime-placeholder"), &self.draft.planned_departure)
                    .on_input(Message::DepartureChanged)
                    .width(Length::Fill),
            ))
            .push(labeled(
                i18n.tr("booking-destination-label"),
                text_input("", destination)
                    .on_input(Message::DestinationChanged)
                    .width(Length::Fill),
            ))
            .push(labeled(
                i18n.tr("booking-purpose-label"),
                text_input("", purpose)
                    .on_input(Message::PurposeChanged)
                    .width(Length::Fill),
            ))
            .push(
                button(Text::new(i18n.tr("booking-submit")))
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

fn labeled<'a>(
    label: String,
    widget: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(widget)
        .into()
}
