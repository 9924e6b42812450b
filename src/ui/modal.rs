// SPDX-License-Identifier: MPL-2.0
//! Detail modal: a two-state overlay showing one gallery entry at full size.
//!
//! Three independent close paths all funnel into the same `close`: the close
//! control, a press on the dimmed backdrop, and the Escape key. A press on
//! the card itself is swallowed before it can reach the backdrop. While the
//! modal is visible the gallery underneath is scroll-locked.

use crate::apod::ApodItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{
    button, center, mouse_area, opaque, scrollable, space, Column, Container, Image,
    Row, Space, Text,
};
use iced::{ContentFit, Element, Length};

/// The single modal instance's state, owned by the application root.
#[derive(Debug, Default)]
pub struct State {
    visible: bool,
    current: Option<ApodItem>,
    scroll_locked: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `item` and locks the gallery scroll behind the overlay.
    /// Opening while already open replaces the displayed entry.
    pub fn open(&mut self, item: ApodItem) {
        self.current = Some(item);
        self.visible = true;
        self.scroll_locked = true;
    }

    /// Hides the overlay and releases the scroll lock. Idempotent.
    pub fn close(&mut self) {
        self.visible = false;
        self.scroll_locked = false;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn current(&self) -> Option<&ApodItem> {
        self.current.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
    BackdropPressed,
    EscapePressed,
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ClosePressed | Message::BackdropPressed | Message::EscapePressed => state.close(),
    }
}

/// Renders the overlay layer. Only called while the modal is open.
pub fn view<'a>(state: &'a State, i18n: &'a I18n, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let Some(item) = state.current() else {
        return Space::new().into();
    };

    let close_button = button(Text::new("✕").size(typography::TITLE_SM))
        .padding(spacing::XXS)
        .style(styles::button::dismiss)
        .on_press(Message::ClosePressed);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(space::horizontal())
        .push(close_button);

    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(
            Text::new(i18n.tr("modal-image-loading")).size(typography::BODY),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::thumb_placeholder)
        .into(),
    };

    let title = Text::new(item.title.as_str()).size(typography::TITLE_MD);
    let date = Text::new(item.long_date())
        .size(typography::CAPTION)
        .color(palette::GRAY_200);
    let explanation = scrollable(
        Text::new(item.explanation.as_str()).size(typography::BODY),
    )
    .height(Length::Fixed(sizing::MODAL_TEXT_HEIGHT));

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(picture)
            .push(title)
            .push(date)
            .push(explanation),
    )
    .max_width(sizing::MODAL_MAX_WIDTH)
    .padding(spacing::LG)
    .style(styles::overlay::surface);

    // The inner opaque swallows presses on the card; only presses that reach
    // the dimmed backdrop close the modal.
    let backdrop = mouse_area(center(opaque(card)).style(styles::overlay::backdrop))
        .on_press(Message::BackdropPressed);

    opaque(backdrop).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::MediaType;
    use chrono::NaiveDate;

    fn item() -> ApodItem {
        ApodItem {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            title: "A".to_string(),
            url: "u1".to_string(),
            explanation: "e1".to_string(),
            media_type: MediaType::Image,
        }
    }

    #[test]
    fn open_sets_content_visibility_and_scroll_lock() {
        let mut state = State::new();
        assert!(!state.is_open());
        assert!(!state.is_scroll_locked());

        state.open(item());
        assert!(state.is_open());
        assert!(state.is_scroll_locked());
        assert_eq!(state.current().map(|i| i.title.as_str()), Some("A"));
    }

    #[test]
    fn every_close_path_hides_and_unlocks() {
        for message in [
            Message::ClosePressed,
            Message::BackdropPressed,
            Message::EscapePressed,
        ] {
            let mut state = State::new();
            state.open(item());

            update(&mut state, message);
            assert!(!state.is_open());
            assert!(!state.is_scroll_locked());
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = State::new();
        state.open(item());

        update(&mut state, Message::EscapePressed);
        update(&mut state, Message::EscapePressed);
        assert!(!state.is_open());
        assert!(!state.is_scroll_locked());
    }

    #[test]
    fn reopening_replaces_the_displayed_entry() {
        let mut state = State::new();
        state.open(item());

        let mut second = item();
        second.title = "B".to_string();
        state.open(second);

        assert!(state.is_open());
        assert_eq!(state.current().map(|i| i.title.as_str()), Some("B"));
    }
}
