// SPDX-License-Identifier: MPL-2.0
//! The top-level screens of the application.

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Booking,
    Leave,
    Settings,
}
