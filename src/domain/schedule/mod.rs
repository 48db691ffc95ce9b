// SPDX-License-Identifier: MPL-2.0
//! Date and time defaulting rules for form inputs.
//!
//! Two independent rules live here. The generic rule fills any empty
//! date/datetime input with the current moment. The specific rule governs a
//! departure/return datetime pair: the departure defaults to the next full
//! hour and the return is kept at least one hour after the departure.
//!
//! All functions are pure; they take the current field values and a clock
//! reading and return the edits to apply, so the rules are testable without
//! a running UI.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

/// Wire format of datetime inputs (`2024-01-01T10:00`).
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Wire format of plain date inputs (`2024-01-01`).
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Identifies a field of the departure/return pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairField {
    Departure,
    Return,
}

/// A planned change to one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    SetValue(PairField, String),
    SetMinimum(PairField, String),
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_INPUT_FORMAT).to_string()
}

pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_INPUT_FORMAT).to_string()
}

/// Parses a datetime input value, treating surrounding whitespace as noise.
/// Returns `None` for anything that is not a complete `YYYY-MM-DDTHH:MM`.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_INPUT_FORMAT).ok()
}

/// Truncates a clock reading to whole minutes.
pub fn minute_floor(now: NaiveDateTime) -> NaiveDateTime {
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// The next full hour after `now` (minutes and seconds zero).
pub fn next_full_hour(now: NaiveDateTime) -> NaiveDateTime {
    minute_floor(now)
        .with_minute(0)
        .unwrap_or(now)
        + Duration::hours(1)
}

/// Generic rule: fill an empty datetime input with the current local time
/// truncated to the minute. Returns `None` when the field already holds a
/// value, which must never be overwritten.
pub fn fill_empty_datetime(current: &str, now: NaiveDateTime) -> Option<String> {
    if current.trim().is_empty() {
        Some(format_datetime(minute_floor(now)))
    } else {
        None
    }
}

/// Generic rule: fill an empty date input with the current local date.
pub fn fill_empty_date(current: &str, today: NaiveDate) -> Option<String> {
    if current.trim().is_empty() {
        Some(format_date(today))
    } else {
        None
    }
}

/// Pair rule, applied once when the form appears: an empty departure gets
/// the next full hour after `now`, and its minimum is pinned to the same
/// instant. A pre-filled departure is left alone.
pub fn seed_pair(departure: &str, now: NaiveDateTime) -> Vec<FieldEdit> {
    if !departure.trim().is_empty() {
        return Vec::new();
    }
    let next_hour = format_datetime(next_full_hour(now));
    vec![
        FieldEdit::SetValue(PairField::Departure, next_hour.clone()),
        FieldEdit::SetMinimum(PairField::Departure, next_hour),
    ]
}

/// Pair rule, applied on every departure change. The return minimum is
/// always refreshed to the departure value; the return value itself is only
/// bumped to departure + 1 hour when it is blank, unparseable, or not
/// strictly after the departure.
pub fn departure_changed(departure: &str, return_value: &str) -> Vec<FieldEdit> {
    let mut edits = vec![FieldEdit::SetMinimum(
        PairField::Return,
        departure.trim().to_string(),
    )];

    let Some(departure_at) = parse_datetime(departure) else {
        return edits;
    };

    let needs_bump = match parse_datetime(return_value) {
        Some(return_at) => return_at <= departure_at,
        None => true,
    };
    if needs_bump {
        edits.push(FieldEdit::SetValue(
            PairField::Return,
            format_datetime(departure_at + Duration::hours(1)),
        ));
    }
    edits
}
