// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is composed as layers: the base column (range picker over the
//! gallery), the modal overlay when one is open, and the toast stack on top.

use super::{App, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::{gallery, modal, notifications, range_picker};
use iced::widget::{Column, Stack};
use iced::{Element, Length};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let picker = range_picker::view(&self.range_picker, &self.i18n).map(Message::RangePicker);

        let gallery_area =
            gallery::view(&self.gallery, &self.i18n, self.modal.is_scroll_locked())
                .map(Message::Gallery);

        let base = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(picker)
            .push(gallery_area);

        let mut layers = Stack::new().push(base);

        if self.modal.is_open() {
            let thumbnail = self
                .modal
                .current()
                .and_then(|item| self.gallery.thumbnail(item.date));
            layers = layers.push(
                modal::view(&self.modal, &self.i18n, thumbnail).map(Message::Modal),
            );
        }

        if self.notices.has_notices() {
            layers = layers.push(notifications::view(&self.notices, &self.i18n).map(Message::Notices));
        }

        layers.into()
    }
}
