// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization system.
//! Translation files are embedded at build time, the display language is
//! resolved from CLI flag, config file, or OS locale, and messages can be
//! formatted with named arguments (e.g. a booking number).

pub mod fluent;
