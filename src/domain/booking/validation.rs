// SPDX-License-Identifier: MPL-2.0
//! Submit-time validation of the booking form.
//!
//! Checks run in a fixed order regardless of locale: vehicle, approving
//! manager, planned departure, then the destination/purpose pair of the
//! active field locale. Whitespace-only values count as blank, and an absent
//! value is identical to a blank one. The error list is rebuilt from scratch
//! on every attempt, so a corrected field drops out of the next run.

use super::types::{generate_booking_number, BookingDraft, BookingRequest};
use crate::domain::roster::FieldLocale;
use crate::domain::schedule;

/// One failed required-field check. Variants map to Fluent message keys;
/// wording is resolved in the current display language at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    VehicleMissing,
    ManagerMissing,
    DepartureMissing,
    DepartureInvalid,
    DestinationMissing,
    PurposeMissing,
}

impl ValidationError {
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::VehicleMissing => "validation-vehicle-missing",
            ValidationError::ManagerMissing => "validation-manager-missing",
            ValidationError::DepartureMissing => "validation-departure-missing",
            ValidationError::DepartureInvalid => "validation-departure-invalid",
            ValidationError::DestinationMissing => "validation-destination-missing",
            ValidationError::PurposeMissing => "validation-purpose-missing",
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Runs the required-field checks and returns the failures in check order.
/// An empty result means the draft is valid.
pub fn validate(draft: &BookingDraft, locale: FieldLocale) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(draft.vehicle_id.as_deref()) {
        errors.push(ValidationError::VehicleMissing);
    }
    if is_blank(draft.manager_name.as_deref()) {
        errors.push(ValidationError::ManagerMissing);
    }
    if is_blank(Some(&draft.planned_departure)) {
        errors.push(ValidationError::DepartureMissing);
    } else if schedule::parse_datetime(&draft.planned_departure).is_none() {
        errors.push(ValidationError::DepartureInvalid);
    }

    let (destination, purpose) = match locale {
        FieldLocale::English => (&draft.destination, &draft.purpose),
        FieldLocale::Arabic => (&draft.destination_ar, &draft.purpose_ar),
    };
    if is_blank(Some(destination)) {
        errors.push(ValidationError::DestinationMissing);
    }
    if is_blank(Some(purpose)) {
        errors.push(ValidationError::PurposeMissing);
    }

    errors
}

/// Validates the draft and, on success, builds the booking request.
pub fn finalize(
    draft: &BookingDraft,
    locale: FieldLocale,
) -> Result<BookingRequest, Vec<ValidationError>> {
    let errors = validate(draft, locale);
    if !errors.is_empty() {
        return Err(errors);
    }

    // validate() guarantees presence and a parseable departure.
    let vehicle_id = draft
        .vehicle_id
        .as_deref()
        .and_then(|v| v.trim().parse().ok())
        .ok_or(vec![ValidationError::VehicleMissing])?;
    let planned_departure = schedule::parse_datetime(&draft.planned_departure)
        .ok_or(vec![ValidationError::DepartureInvalid])?;

    Ok(BookingRequest {
        booking_number: generate_booking_number(planned_departure),
        vehicle_id,
        manager_name: draft.manager_name.clone().unwrap_or_default(),
        manager_name_ar: draft.manager_name_ar.clone(),
        planned_departure,
        destination: draft.destination.trim().to_string(),
        destination_ar: draft.destination_ar.trim().to_string(),
        purpose: draft.purpose.trim().to_string(),
        purpose_ar: draft.purpose_ar.trim().to_string(),
        active_language: locale,
    })
}
