// SPDX-License-Identifier: MPL-2.0
//! Domain types and rules, independent of any widget state.
//!
//! Everything in here is pure: snapshots of form values go in, validation
//! results or planned field edits come out. The `app` and `ui` layers apply
//! the results to widget state.

pub mod booking;
pub mod leave;
pub mod roster;
pub mod schedule;
