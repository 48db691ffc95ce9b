// SPDX-License-Identifier: MPL-2.0
//! Flash lifecycle management: push, periodic expiry, manual dismissal.

use super::message::{Flash, FlashId};
use std::collections::VecDeque;

/// Messages for flash state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific flash by ID before its timer runs out.
    Dismiss(FlashId),
}

/// Owns the live flash messages, newest first.
#[derive(Debug, Default)]
pub struct Manager {
    flashes: VecDeque<Flash>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, flash: Flash) {
        self.flashes.push_front(flash);
    }

    /// Drops every flash whose fade has completed. Called from the periodic
    /// tick while any flash is alive.
    pub fn tick(&mut self) {
        self.flashes.retain(|f| !f.expired());
    }

    pub fn dismiss(&mut self, id: FlashId) -> bool {
        let before = self.flashes.len();
        self.flashes.retain(|f| f.id() != id);
        self.flashes.len() != before
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flash> {
        self.flashes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flashes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }
}
