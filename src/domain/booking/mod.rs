// SPDX-License-Identifier: MPL-2.0
//! Car booking domain: form snapshot, validation, and the validated request.

mod types;
pub mod validation;

pub use types::{BookingDraft, BookingRequest};
pub use validation::{finalize, validate, ValidationError};
