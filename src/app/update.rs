// SPDX-License-Identifier: MPL-2.0
//! Update logic: routes messages to components and turns their events into
//! side effects (flashes, form resets, config persistence).

use super::{local_now, App, Message};
use crate::domain::roster::FieldLocale;
use crate::ui::booking_form;
use crate::ui::flash::Flash;
use crate::ui::leave_form;
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Booking(msg) => {
                let locale = FieldLocale::from_language(self.i18n.current_locale());
                match self.booking.update(msg, locale) {
                    booking_form::Event::Submitted(request) => {
                        self.flashes.push(
                            Flash::success("flash-booking-saved")
                                .with_arg("number", request.booking_number.clone()),
                        );
                        self.booking.reset(local_now());
                    }
                    booking_form::Event::None => {}
                }
            }
            Message::Leave(msg) => {
                let locale = FieldLocale::from_language(self.i18n.current_locale());
                match self.leave.update(msg, locale) {
                    leave_form::Event::Submitted(request) => {
                        self.flashes.push(
                            Flash::success("flash-leave-saved")
                                .with_arg("number", request.request_number.clone()),
                        );
                        self.leave.reset(local_now());
                    }
                    leave_form::Event::Rejected(error) => {
                        self.flashes.push(Flash::error(error.i18n_key()));
                    }
                    leave_form::Event::None => {}
                }
            }
            Message::Flash(msg) => {
                self.flashes.handle_message(&msg);
            }
            Message::SwitchScreen(screen) => {
                self.screen = screen;
            }
            Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale);
                self.save_language();
            }
            Message::Tick(_) => {
                self.flashes.tick();
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Flags, Screen};
    use crate::ui::booking_form::Choice;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn switch_screen_updates_state() {
        let mut app = app();
        let _ = app.update(Message::SwitchScreen(Screen::Leave));
        assert!(format!("{app:?}").contains("Leave"));
    }

    #[test]
    fn valid_booking_submission_flashes_and_resets() {
        let mut app = app();
        for msg in [
            booking_form::Message::VehiclePicked(Choice {
                index: 0,
                label: String::new(),
            }),
            booking_form::Message::ManagerPicked(Choice {
                index: 0,
                label: String::new(),
            }),
            booking_form::Message::DestinationChanged("Airport".to_string()),
            booking_form::Message::PurposeChanged("Guest pickup".to_string()),
            booking_form::Message::Submit,
        ] {
            let _ = app.update(Message::Booking(msg));
        }

        assert_eq!(app.flashes.len(), 1);
        assert!(app.booking.draft().vehicle_id.is_none());
        assert!(app.booking.errors().is_empty());
    }

    #[test]
    fn invalid_booking_submission_flashes_nothing() {
        let mut app = app();
        let _ = app.update(Message::Booking(booking_form::Message::Submit));
        assert!(app.flashes.is_empty());
        assert!(!app.booking.errors().is_empty());
    }

    #[test]
    fn rejected_leave_submission_flashes_the_error() {
        let mut app = app();
        // Reason and manager are blank, so the submit is rejected.
        let _ = app.update(Message::Leave(leave_form::Message::Submit));
        assert_eq!(app.flashes.len(), 1);
    }

    #[test]
    fn language_selection_switches_locale() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut app, _task) = App::new(Flags {
            lang: Some("en".to_string()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        });

        let _ = app.update(Message::LanguageSelected("ar".parse().unwrap()));
        assert_eq!(app.i18n.current_locale().to_string(), "ar");

        // The preference was persisted for the next start.
        let saved = crate::config::load_from_path(&crate::config::config_file_in(dir.path()))
            .expect("config saved");
        assert_eq!(saved.language, Some("ar".to_string()));
    }

    #[test]
    fn unreadable_config_flashes_an_info_hint() {
        use crate::ui::flash::Severity;

        let dir = tempfile::tempdir().expect("temp dir");
        // A directory where the settings file should be makes the read fail.
        std::fs::create_dir(dir.path().join("settings.toml")).expect("blocker dir");

        let (app, _task) = App::new(Flags {
            lang: Some("en".to_string()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        });

        assert_eq!(app.flashes.len(), 1);
        let flash = app.flashes.iter().next().expect("one flash");
        assert_eq!(flash.severity(), Severity::Info);
        assert_eq!(flash.message_key(), "flash-config-load-failed");
    }

    #[test]
    fn tick_drops_no_fresh_flashes() {
        let mut app = app();
        let _ = app.update(Message::Leave(leave_form::Message::Submit));
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.flashes.len(), 1);
    }
}
