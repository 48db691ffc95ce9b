// SPDX-License-Identifier: MPL-2.0
//! `fleet_desk` is a small bilingual vehicle booking and leave request desk
//! application built with the Iced GUI framework.
//!
//! It validates the booking form on submit with localized (English/Arabic)
//! error messages, defaults date and time inputs to the current moment,
//! keeps a departure/return pair consistent, and shows flash messages that
//! dismiss themselves. It demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
