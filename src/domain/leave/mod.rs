// SPDX-License-Identifier: MPL-2.0
//! Leave request domain: the departure/return form and its checks.
//!
//! Unlike the booking form, the leave form reports only the first failed
//! check, as a flashed error rather than a banner. Checks run in a fixed
//! order: date parsing, return after departure, locale-selected reason,
//! approving manager.

use crate::domain::roster::FieldLocale;
use crate::domain::schedule;
use chrono::{Datelike, NaiveDateTime};

/// Transient snapshot of the leave form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveDraft {
    pub departure: String,
    pub departure_min: String,
    pub return_value: String,
    pub return_min: String,
    pub manager_name: Option<String>,
    pub manager_name_ar: String,
    pub reason: String,
    pub reason_ar: String,
    pub destination: String,
    pub destination_ar: String,
}

/// First failed check of a leave submission, flashed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveError {
    InvalidDateFormat,
    ReturnNotAfterDeparture,
    ReasonMissing,
    ManagerMissing,
}

impl LeaveError {
    pub fn i18n_key(self) -> &'static str {
        match self {
            LeaveError::InvalidDateFormat => "leave-error-invalid-date",
            LeaveError::ReturnNotAfterDeparture => "leave-error-return-before-departure",
            LeaveError::ReasonMissing => "leave-error-reason-missing",
            LeaveError::ManagerMissing => "leave-error-manager-missing",
        }
    }
}

/// A leave request that passed all checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    pub request_number: String,
    pub departure: NaiveDateTime,
    pub return_at: NaiveDateTime,
    pub manager_name: String,
    pub manager_name_ar: String,
    pub reason: String,
    pub reason_ar: String,
    pub destination: String,
    pub destination_ar: String,
    pub active_language: FieldLocale,
}

/// Generates a request number like `LR-2026-00007`, unique per run.
fn generate_request_number(departure: NaiveDateTime) -> String {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(1);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("LR-{}-{:05}", departure.year(), seq)
}

/// Validates a draft and builds the request, or reports the first failure.
pub fn finalize(draft: &LeaveDraft, locale: FieldLocale) -> Result<LeaveRequest, LeaveError> {
    let departure =
        schedule::parse_datetime(&draft.departure).ok_or(LeaveError::InvalidDateFormat)?;
    let return_at =
        schedule::parse_datetime(&draft.return_value).ok_or(LeaveError::InvalidDateFormat)?;

    if return_at <= departure {
        return Err(LeaveError::ReturnNotAfterDeparture);
    }

    let reason = match locale {
        FieldLocale::English => &draft.reason,
        FieldLocale::Arabic => &draft.reason_ar,
    };
    if reason.trim().is_empty() {
        return Err(LeaveError::ReasonMissing);
    }

    let manager_name = draft
        .manager_name
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or(LeaveError::ManagerMissing)?;

    Ok(LeaveRequest {
        request_number: generate_request_number(departure),
        departure,
        return_at,
        manager_name: manager_name.to_string(),
        manager_name_ar: draft.manager_name_ar.clone(),
        reason: draft.reason.trim().to_string(),
        reason_ar: draft.reason_ar.trim().to_string(),
        destination: draft.destination.trim().to_string(),
        destination_ar: draft.destination_ar.trim().to_string(),
        active_language: locale,
    })
}
