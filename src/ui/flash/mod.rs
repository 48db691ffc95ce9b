// SPDX-License-Identifier: MPL-2.0
//! Transient flash messages that dismiss themselves.
//!
//! Every flash starts fading five seconds after it appears, fades over 0.4
//! seconds, and is then dropped. A dismiss button allows closing one early.
//! The booking form's validation banner is a separate component and never
//! auto-dismisses.
//!
//! # Components
//!
//! - [`message`] - Core `Flash` struct with severity and fade timing
//! - [`manager`] - `Manager` owning the live flash list
//! - [`banner`] - widget rendering for the flash stack

mod banner;
mod manager;
mod message;

pub use banner::view_stack;
pub use message::{Flash, FlashId, Severity};
pub use manager::{Manager, Message};
