// SPDX-License-Identifier: MPL-2.0
use crate::domain::roster::FieldLocale;
use chrono::{Datelike, NaiveDateTime};

/// Transient snapshot of the booking form fields, exactly as typed.
///
/// Selector fields are `None` until a choice is made; text fields start
/// empty. `None` and a blank string are treated identically by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub vehicle_id: Option<String>,
    pub manager_name: Option<String>,
    pub manager_name_ar: String,
    pub planned_departure: String,
    pub destination: String,
    pub destination_ar: String,
    pub purpose: String,
    pub purpose_ar: String,
}

/// A booking that passed validation. Only [`super::finalize`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub booking_number: String,
    pub vehicle_id: u32,
    pub manager_name: String,
    pub manager_name_ar: String,
    pub planned_departure: NaiveDateTime,
    pub destination: String,
    pub destination_ar: String,
    pub purpose: String,
    pub purpose_ar: String,
    pub active_language: FieldLocale,
}

/// Generates a booking number like `CB-2026-00042`, unique per run.
pub(super) fn generate_booking_number(departure: NaiveDateTime) -> String {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(1);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("CB-{}-{:05}", departure.year(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_numbers_are_unique_and_year_prefixed() {
        let departure =
            NaiveDateTime::parse_from_str("2026-08-28T10:00", "%Y-%m-%dT%H:%M").unwrap();
        let a = generate_booking_number(departure);
        let b = generate_booking_number(departure);
        assert_ne!(a, b);
        assert!(a.starts_with("CB-2026-"));
    }
}
