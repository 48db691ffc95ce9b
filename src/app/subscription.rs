// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// How often flash timers are checked while any flash is alive.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

impl App {
    /// Runs the periodic tick only while flash messages exist, so an idle
    /// window produces no wakeups.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.flashes.is_empty() {
            Subscription::none()
        } else {
            time::every(TICK_INTERVAL).map(Message::Tick)
        }
    }
}
