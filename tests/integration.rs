// SPDX-License-Identifier: MPL-2.0
use chrono::NaiveDateTime;
use fleet_desk::config::{self, Config};
use fleet_desk::domain::booking::{validate, BookingDraft};
use fleet_desk::domain::roster::{sample_managers, sample_vehicles, FieldLocale};
use fleet_desk::domain::schedule;
use fleet_desk::i18n::fluent::I18n;
use fleet_desk::ui::booking_form::{self, Choice};
use fleet_desk::ui::leave_form;
use tempfile::tempdir;

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("test datetime")
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en
    let initial_config = Config {
        language: Some("en".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en");

    // 2. Change config to ar
    let arabic_config = Config {
        language: Some("ar".to_string()),
    };
    config::save_to_path(&arabic_config, &temp_config_file_path)
        .expect("Failed to write arabic config file");

    let loaded_arabic_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load arabic config from path");
    let i18n_ar = I18n::new(None, &loaded_arabic_config);
    assert_eq!(i18n_ar.current_locale().to_string(), "ar");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn english_validation_messages_match_the_check_order() {
    // Vehicle blank, manager selected, departure blank, destination blank,
    // purpose filled.
    let draft = BookingDraft {
        manager_name: Some("Omar Haddad".to_string()),
        purpose: "Quarterly audit".to_string(),
        ..BookingDraft::default()
    };
    let errors = validate(&draft, FieldLocale::English);

    let mut i18n = I18n::default();
    i18n.set_locale("en".parse().unwrap());
    let messages: Vec<String> = errors.iter().map(|e| i18n.tr(e.i18n_key())).collect();

    assert_eq!(
        messages,
        vec![
            "Please select a vehicle.".to_string(),
            "Please enter departure date and time.".to_string(),
            "Please enter a destination.".to_string(),
        ]
    );
}

#[test]
fn arabic_validation_messages_use_arabic_wording() {
    let errors = validate(&BookingDraft::default(), FieldLocale::Arabic);

    let mut i18n = I18n::default();
    i18n.set_locale("ar".parse().unwrap());
    let messages: Vec<String> = errors.iter().map(|e| i18n.tr(e.i18n_key())).collect();

    assert_eq!(messages[0], "يرجى اختيار سيارة.");
    assert_eq!(messages.last().unwrap(), "يرجى إدخال الغرض من الرحلة.");
}

#[test]
fn booking_flow_submits_once_every_field_is_set() {
    let mut form = booking_form::State::new(
        sample_vehicles(),
        sample_managers(),
        at("2024-01-01T10:17:42"),
    );

    // First submit fails on the four unset fields and raises the banner.
    let event = form.update(booking_form::Message::Submit, FieldLocale::English);
    assert_eq!(event, booking_form::Event::None);
    assert_eq!(form.errors().len(), 4);

    // Fill everything and resubmit.
    form.update(
        booking_form::Message::VehiclePicked(Choice {
            index: 0,
            label: String::new(),
        }),
        FieldLocale::English,
    );
    form.update(
        booking_form::Message::ManagerPicked(Choice {
            index: 0,
            label: String::new(),
        }),
        FieldLocale::English,
    );
    form.update(
        booking_form::Message::DestinationChanged("Head office".to_string()),
        FieldLocale::English,
    );
    form.update(
        booking_form::Message::PurposeChanged("Contract signing".to_string()),
        FieldLocale::English,
    );

    match form.update(booking_form::Message::Submit, FieldLocale::English) {
        booking_form::Event::Submitted(request) => {
            assert_eq!(request.destination, "Head office");
            assert_eq!(
                request.planned_departure,
                schedule::parse_datetime("2024-01-01T10:17").unwrap()
            );
        }
        booking_form::Event::None => panic!("expected a submission"),
    }
    assert!(form.errors().is_empty());
}

#[test]
fn arabic_booking_flow_accepts_arabic_fields_only() {
    let mut form = booking_form::State::new(
        sample_vehicles(),
        sample_managers(),
        at("2024-01-01T10:00:00"),
    );

    form.update(
        booking_form::Message::VehiclePicked(Choice {
            index: 1,
            label: String::new(),
        }),
        FieldLocale::Arabic,
    );
    form.update(
        booking_form::Message::ManagerPicked(Choice {
            index: 2,
            label: String::new(),
        }),
        FieldLocale::Arabic,
    );
    form.update(
        booking_form::Message::DestinationChanged("المكتب الرئيسي".to_string()),
        FieldLocale::Arabic,
    );
    form.update(
        booking_form::Message::PurposeChanged("توقيع عقد".to_string()),
        FieldLocale::Arabic,
    );

    // The English pair is still empty, yet the Arabic locale submits fine.
    match form.update(booking_form::Message::Submit, FieldLocale::Arabic) {
        booking_form::Event::Submitted(request) => {
            assert_eq!(request.destination_ar, "المكتب الرئيسي");
            assert!(request.destination.is_empty());
        }
        booking_form::Event::None => panic!("expected a submission"),
    }
}

#[test]
fn leave_flow_keeps_return_an_hour_after_departure() {
    let mut form = leave_form::State::new(sample_managers(), at("2024-01-01T09:30:00"));
    assert_eq!(form.draft().departure, "2024-01-01T10:00");

    // A stale return is pulled forward when the departure moves past it.
    form.update(
        leave_form::Message::ReturnChanged("2024-01-01T09:00".to_string()),
        FieldLocale::English,
    );
    form.update(
        leave_form::Message::DepartureChanged("2024-01-01T10:00".to_string()),
        FieldLocale::English,
    );
    assert_eq!(form.draft().return_value, "2024-01-01T11:00");
    assert_eq!(form.draft().return_min, "2024-01-01T10:00");
}

#[test]
fn partial_departure_edits_do_not_panic() {
    let mut form = leave_form::State::new(sample_managers(), at("2024-01-01T09:30:00"));
    // Typing rewrites the field character by character; intermediate values
    // are unparseable and must only refresh the minimum.
    for partial in ["2", "2024-0", "2024-01-02T0", "2024-01-02T08:3", "2024-01-02T08:30"] {
        form.update(
            leave_form::Message::DepartureChanged(partial.to_string()),
            FieldLocale::English,
        );
    }
    assert_eq!(form.draft().departure, "2024-01-02T08:30");
    assert_eq!(form.draft().return_value, "2024-01-02T09:30");
}
