// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared by the screens.

pub mod error_banner;
