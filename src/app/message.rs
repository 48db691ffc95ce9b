// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::booking_form;
use crate::ui::flash;
use crate::ui::leave_form;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Booking(booking_form::Message),
    Leave(leave_form::Message),
    Flash(flash::Message),
    SwitchScreen(Screen),
    /// A display language was chosen on the settings screen.
    LanguageSelected(LanguageIdentifier),
    /// Periodic tick driving flash fade-out and expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ar`, `en`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
