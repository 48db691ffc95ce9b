// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the forms, localization, flash messages,
//! and configuration persistence, and translates component events into side
//! effects. Policy decisions (window sizing, language persistence) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::domain::roster::{sample_managers, sample_vehicles};
use crate::i18n::fluent::I18n;
use crate::ui::booking_form;
use crate::ui::flash::{self, Flash};
use crate::ui::leave_form;
use chrono::NaiveDateTime;
use iced::{window, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state bridging the form screens, localization,
/// flash messages, and the persisted language preference.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    booking: booking_form::State,
    leave: leave_form::State,
    flashes: flash::Manager,
    /// Where the settings file lives when `--config-dir` was given.
    config_path: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("flashes", &self.flashes.len())
            .finish()
    }
}

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let now = local_now();
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            booking: booking_form::State::new(sample_vehicles(), sample_managers(), now),
            leave: leave_form::State::new(sample_managers(), now),
            flashes: flash::Manager::new(),
            config_path: None,
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_path = flags
            .config_dir
            .as_deref()
            .map(|dir| config::config_file_in(std::path::Path::new(dir)));

        let mut load_failed = false;
        let config = match &config_path {
            Some(path) if path.exists() => config::load_from_path(path),
            Some(_) => Ok(Config::default()),
            None => config::load(),
        }
        .unwrap_or_else(|_| {
            load_failed = true;
            Config::default()
        });

        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            config_path,
            ..Self::default()
        };
        // The app still starts with defaults, so this is a hint, not an error.
        if load_failed {
            app.flashes.push(Flash::info("flash-config-load-failed"));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Persists the chosen display language to the settings file.
    fn save_language(&mut self) {
        let config = Config {
            language: Some(self.i18n.current_locale().to_string()),
        };
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&config, path),
            None => config::save(&config),
        };
        if result.is_err() {
            self.flashes.push(Flash::error("flash-config-save-failed"));
        }
    }
}
