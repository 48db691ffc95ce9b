// SPDX-License-Identifier: MPL-2.0
//! Core flash message data and fade timing.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Delay before a flash starts fading out.
pub const DISMISS_DELAY: Duration = Duration::from_secs(5);
/// Length of the opacity fade. The flash is removed when the fade ends.
pub const FADE_DURATION: Duration = Duration::from_millis(400);

/// Unique identifier for a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashId(u64);

impl FlashId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for FlashId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity controls the accent color of the flash card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// A transient message displayed until its fade completes.
#[derive(Debug, Clone)]
pub struct Flash {
    id: FlashId,
    severity: Severity,
    /// The i18n key for the flash text, resolved at render time.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Flash {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: FlashId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> FlashId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Current opacity: fully opaque until the dismiss delay, then a linear
    /// ramp to zero over the fade duration.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        Self::opacity_at(self.age())
    }

    /// Opacity for a given age, separated out so timing is testable.
    #[must_use]
    pub fn opacity_at(age: Duration) -> f32 {
        if age <= DISMISS_DELAY {
            return 1.0;
        }
        let faded = age - DISMISS_DELAY;
        if faded >= FADE_DURATION {
            0.0
        } else {
            1.0 - faded.as_secs_f32() / FADE_DURATION.as_secs_f32()
        }
    }

    /// Whether the fade has completed and the flash should be dropped.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.age() >= DISMISS_DELAY + FADE_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_ids_are_unique() {
        assert_ne!(Flash::success("a").id(), Flash::success("a").id());
    }

    #[test]
    fn fresh_flash_is_fully_opaque() {
        assert_eq!(Flash::opacity_at(Duration::ZERO), 1.0);
        assert_eq!(Flash::opacity_at(Duration::from_secs(4)), 1.0);
        assert_eq!(Flash::opacity_at(DISMISS_DELAY), 1.0);
    }

    #[test]
    fn opacity_ramps_down_during_fade() {
        let mid_fade = DISMISS_DELAY + FADE_DURATION / 2;
        let opacity = Flash::opacity_at(mid_fade);
        assert!(opacity > 0.0 && opacity < 1.0);
    }

    #[test]
    fn opacity_is_zero_after_fade() {
        assert_eq!(Flash::opacity_at(DISMISS_DELAY + FADE_DURATION), 0.0);
        assert_eq!(Flash::opacity_at(Duration::from_secs(60)), 0.0);
    }

    #[test]
    fn new_flash_is_not_expired() {
        assert!(!Flash::success("flash-booking-saved").expired());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Error.color());
        assert_ne!(Severity::Success.color(), Severity::Info.color());
    }

    #[test]
    fn builder_collects_message_args() {
        let flash = Flash::success("flash-leave-saved").with_arg("number", "LR-2026-00001");
        assert_eq!(flash.message_args().len(), 1);
        assert_eq!(flash.message_key(), "flash-leave-saved");
    }
}
