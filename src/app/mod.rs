// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the domains together (range picker, gallery, modal,
//! notifications) and translates messages into side effects like the range
//! fetch. Policy decisions — validation before any request, the
//! stale-generation guard, the scroll lock — stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::apod::ApodClient;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::{gallery, modal, notifications, range_picker};
use iced::{window, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 920;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    client: ApodClient,
    range_picker: range_picker::State,
    gallery: gallery::State,
    modal: modal::State,
    notices: notifications::Manager,
    /// Stamp of the most recent range fetch; completions carrying an older
    /// stamp lost the race and are dropped.
    fetch_generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", self.gallery.phase())
            .field("modal_open", &self.modal.is_open())
            .field("fetch_generation", &self.fetch_generation)
            .finish()
    }
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
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
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

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default config");
            config::Config::default()
        });

        let i18n = I18n::new(flags.lang.clone(), &config);
        let api_key = flags
            .api_key
            .unwrap_or_else(|| config.api_key().to_string());
        let today = chrono::Local::now().date_naive();

        let app = App {
            i18n,
            client: ApodClient::new(api_key),
            range_picker: range_picker::State::new(today),
            gallery: gallery::State::new(),
            modal: modal::State::new(),
            notices: notifications::Manager::new(),
            fetch_generation: 0,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
