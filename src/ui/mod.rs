// SPDX-License-Identifier: MPL-2.0
//! UI components and screens.

pub mod booking_form;
pub mod components;
pub mod design_tokens;
pub mod flash;
pub mod leave_form;
pub mod navbar;
pub mod settings;
