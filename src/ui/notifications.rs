// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! A bounded set of toasts in the top-right corner. Warnings dismiss
//! themselves after a few seconds via the tick subscription; errors stay
//! until dismissed. Message text is resolved from i18n keys at render time.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Color, Element, Length};
use std::time::{Duration, Instant};

/// Maximum number of toasts on screen; older ones are dropped first.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

impl NoticeId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Validation feedback; auto-dismisses.
    Warning,
    /// Needs attention; dismissed manually.
    Error,
}

impl Severity {
    pub fn color(&self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    fn auto_dismiss_after(&self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    id: NoticeId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notice {
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NoticeId::next(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    pub fn id(&self) -> NoticeId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    fn expired(&self) -> bool {
        self.severity
            .auto_dismiss_after()
            .is_some_and(|after| self.created_at.elapsed() >= after)
    }
}

#[derive(Debug, Default)]
pub struct Manager {
    visible: Vec<Notice>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast, dropping the oldest one when the screen is full.
    pub fn push(&mut self, notice: Notice) {
        self.visible.push(notice);
        if self.visible.len() > MAX_VISIBLE {
            self.visible.remove(0);
        }
    }

    pub fn dismiss(&mut self, id: NoticeId) {
        self.visible.retain(|notice| notice.id() != id);
    }

    /// Drops every toast whose auto-dismiss window has passed. Driven by the
    /// tick subscription, which only runs while toasts are on screen.
    pub fn tick(&mut self) {
        self.visible.retain(|notice| !notice.expired());
    }

    pub fn has_notices(&self) -> bool {
        !self.visible.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.visible.iter()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NoticeId),
    Tick,
}

pub fn update(manager: &mut Manager, message: Message) {
    match message {
        Message::Dismiss(id) => manager.dismiss(id),
        Message::Tick => manager.tick(),
    }
}

/// Renders the toast stack as a top-right overlay layer.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut stack = Column::new().spacing(spacing::XS);
    for notice in manager.iter() {
        stack = stack.push(toast(notice, i18n));
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .padding(spacing::MD)
        .into()
}

fn toast<'a>(notice: &'a Notice, i18n: &'a I18n) -> Element<'a, Message> {
    let message = Text::new(i18n.tr(notice.message_key())).size(typography::CAPTION);

    let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(styles::button::dismiss)
        .on_press(Message::Dismiss(notice.id()));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(notice.severity().color()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notices());
    }

    #[test]
    fn notice_ids_are_unique() {
        let a = Notice::warning("validation-missing-start");
        let b = Notice::warning("validation-missing-start");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn push_drops_the_oldest_beyond_the_cap() {
        let mut manager = Manager::new();
        let first = Notice::error("first");
        let first_id = first.id();
        manager.push(first);

        for _ in 0..MAX_VISIBLE {
            manager.push(Notice::error("later"));
        }

        assert_eq!(manager.iter().count(), MAX_VISIBLE);
        assert!(manager.iter().all(|notice| notice.id() != first_id));
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut manager = Manager::new();
        let notice = Notice::warning("validation-missing-end");
        let id = notice.id();
        manager.push(notice);

        update(&mut manager, Message::Dismiss(id));
        assert!(!manager.has_notices());
    }

    #[test]
    fn tick_keeps_errors_but_not_expired_warnings() {
        let mut manager = Manager::new();
        manager.push(Notice::error("gallery-error"));

        // A warning created in the past, beyond its dismiss window.
        let mut stale = Notice::warning("validation-missing-start");
        stale.created_at = Instant::now() - Duration::from_secs(6);
        manager.push(stale);

        update(&mut manager, Message::Tick);

        let remaining: Vec<Severity> = manager.iter().map(Notice::severity).collect();
        assert_eq!(remaining, [Severity::Error]);
    }

    #[test]
    fn fresh_warnings_survive_a_tick() {
        let mut manager = Manager::new();
        manager.push(Notice::warning("validation-missing-start"));
        update(&mut manager, Message::Tick);
        assert!(manager.has_notices());
    }
}
