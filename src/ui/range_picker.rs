// SPDX-License-Identifier: MPL-2.0
//! Range picker: the two date inputs and the fetch control.
//!
//! The picker is deliberately dumb. It holds raw input text and reports a
//! fetch request upward; presence and calendar validation live in
//! `apod::date_range` where the application applies them before any request.

use crate::apod::date_range::{self, ISO_FORMAT};
use crate::apod::item;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::alignment::Vertical;
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Default)]
pub struct State {
    start: String,
    end: String,
}

impl State {
    /// Starts with the default range: nine days ago through `today`.
    pub fn new(today: NaiveDate) -> Self {
        let range = date_range::default_range(today);
        Self {
            start: range.start.format(ISO_FORMAT).to_string(),
            end: range.end.format(ISO_FORMAT).to_string(),
        }
    }

    pub fn start_text(&self) -> &str {
        &self.start
    }

    pub fn end_text(&self) -> &str {
        &self.end
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    StartEdited(String),
    EndEdited(String),
    FetchPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    FetchRequested,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::StartEdited(text) => {
            state.start = text;
            Event::None
        }
        Message::EndEdited(text) => {
            state.end = text;
            Event::None
        }
        Message::FetchPressed => Event::FetchRequested,
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let start_input = text_input(&i18n.tr("range-placeholder"), &state.start)
        .on_input(Message::StartEdited)
        .on_submit(Message::FetchPressed)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::DATE_INPUT_WIDTH));

    let end_input = text_input(&i18n.tr("range-placeholder"), &state.end)
        .on_input(Message::EndEdited)
        .on_submit(Message::FetchPressed)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::DATE_INPUT_WIDTH));

    let fetch_button = button(Text::new(i18n.tr("range-fetch-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::FetchPressed);

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(labeled(i18n.tr("range-start-label"), start_input.into()))
        .push(labeled(i18n.tr("range-end-label"), end_input.into()))
        .push(fetch_button);

    let archive_start = item::format_long_date(date_range::archive_start());
    let hint = Text::new(i18n.tr_with_args("range-archive-hint", &[("date", archive_start.as_str())]))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::XS)
        .push(controls)
        .push(hint)
        .into()
}

fn labeled(label: String, input: Element<'_, Message>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        )
        .push(input)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_carries_the_default_range() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let state = State::new(today);
        assert_eq!(state.start_text(), "2024-06-01");
        assert_eq!(state.end_text(), "2024-06-10");
    }

    #[test]
    fn edits_update_the_raw_text() {
        let mut state = State::default();
        assert!(matches!(
            update(&mut state, Message::StartEdited("2024-01-01".to_string())),
            Event::None
        ));
        assert!(matches!(
            update(&mut state, Message::EndEdited("oops".to_string())),
            Event::None
        ));
        assert_eq!(state.start_text(), "2024-01-01");
        assert_eq!(state.end_text(), "oops");
    }

    #[test]
    fn fetch_press_raises_the_event_without_validating() {
        // Validation is the application's job; the picker just reports.
        let mut state = State::default();
        assert!(matches!(
            update(&mut state, Message::FetchPressed),
            Event::FetchRequested
        ));
    }
}
