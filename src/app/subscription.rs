// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources: raw keyboard events, for the Escape close path, and a
//! periodic tick that drives toast auto-dismiss. The tick only runs while
//! toasts are on screen so an idle window schedules nothing.

use super::{App, Message};
use crate::ui::notifications;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

impl App {
    pub(crate) fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            escape_subscription(),
            tick_subscription(self.notices.has_notices()),
        ])
    }
}

fn escape_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        // A widget that already handled the key keeps it.
        if let event::Status::Captured = status {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        }
    })
}

fn tick_subscription(has_notices: bool) -> Subscription<Message> {
    if has_notices {
        time::every(Duration::from_millis(500))
            .map(|_| Message::Notices(notifications::Message::Tick))
    } else {
        Subscription::none()
    }
}
