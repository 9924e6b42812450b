// SPDX-License-Identifier: MPL-2.0
//! Gallery component: fetch phases, payload classification, and the card grid.
//!
//! The gallery owns the outcome of the most recent range fetch. Every new
//! payload replaces the previous one wholesale, thumbnails included; there is
//! no incremental diffing. Video and other non-image entries are dropped at
//! render time, never shown.

use crate::apod::ApodItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, scrollable, Column, Container, Image, Row, Text};
use iced::{ContentFit, Element, Length};
use std::collections::HashMap;

/// Cards per grid row.
const CARDS_PER_ROW: usize = 3;

/// Where the most recent fetch stands.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    /// Nothing fetched yet (startup).
    #[default]
    Idle,
    /// A range fetch is in flight.
    Loading,
    /// The fetch succeeded; the payload is held here.
    Loaded(Vec<ApodItem>),
    /// The fetch failed; the cause went to the log, not the user.
    Failed,
}

/// Classification of a loaded payload, decided before any card is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// This many image-typed entries become cards.
    Cards(usize),
    /// The feed answered with an empty array.
    EmptyFeed,
    /// Entries came back, but none of them is an image.
    AllNonImage,
}

#[derive(Debug, Default)]
pub struct State {
    phase: Phase,
    /// Resolved thumbnail bytes, keyed by entry date (one entry per day).
    thumbnails: HashMap<NaiveDate, Handle>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn set_loading(&mut self) {
        self.phase = Phase::Loading;
    }

    pub fn set_failed(&mut self) {
        self.phase = Phase::Failed;
    }

    /// Replaces the gallery content with a fresh payload. Thumbnails from the
    /// previous payload are discarded along with it.
    pub fn set_items(&mut self, items: Vec<ApodItem>) {
        self.thumbnails.clear();
        self.phase = Phase::Loaded(items);
    }

    /// Classifies the loaded payload; `None` outside the loaded phase.
    pub fn outcome(&self) -> Option<RenderOutcome> {
        let Phase::Loaded(items) = &self.phase else {
            return None;
        };

        if items.is_empty() {
            return Some(RenderOutcome::EmptyFeed);
        }

        let cards = items.iter().filter(|item| item.is_image()).count();
        if cards == 0 {
            Some(RenderOutcome::AllNonImage)
        } else {
            Some(RenderOutcome::Cards(cards))
        }
    }

    /// Image-typed entries in feed order.
    pub fn image_items(&self) -> impl Iterator<Item = &ApodItem> {
        let items = match &self.phase {
            Phase::Loaded(items) => items.as_slice(),
            _ => &[],
        };
        items.iter().filter(|item| item.is_image())
    }

    fn image_item(&self, date: NaiveDate) -> Option<&ApodItem> {
        self.image_items().find(|item| item.date == date)
    }

    pub fn thumbnail(&self, date: NaiveDate) -> Option<&Handle> {
        self.thumbnails.get(&date)
    }

    pub fn insert_thumbnail(&mut self, date: NaiveDate, handle: Handle) {
        self.thumbnails.insert(date, handle);
    }

    /// Dates and URLs of cards still waiting for their image bytes.
    pub fn missing_thumbnails(&self) -> Vec<(NaiveDate, String)> {
        self.image_items()
            .filter(|item| !self.thumbnails.contains_key(&item.date))
            .map(|item| (item.date, item.url.clone()))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A card was activated; carries the card's entry date.
    CardPressed(NaiveDate),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the detail modal for this entry.
    OpenDetail(ApodItem),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::CardPressed(date) => match state.image_item(date) {
            Some(item) => Event::OpenDetail(item.clone()),
            None => Event::None,
        },
    }
}

/// Renders the gallery area for the current phase.
///
/// `scroll_locked` is set while the modal is open; the grid is then rendered
/// without its scrollable so no wheel input moves the page underneath.
pub fn view<'a>(state: &'a State, i18n: &'a I18n, scroll_locked: bool) -> Element<'a, Message> {
    match &state.phase {
        Phase::Idle => placeholder("✨", i18n.tr("gallery-idle")),
        Phase::Loading => placeholder("🚀", i18n.tr("gallery-loading")),
        Phase::Failed => placeholder("❌", i18n.tr("gallery-error")),
        Phase::Loaded(_) => match state.outcome() {
            Some(RenderOutcome::EmptyFeed) => placeholder("🔭", i18n.tr("gallery-empty")),
            Some(RenderOutcome::AllNonImage) => placeholder("🎬", i18n.tr("gallery-all-videos")),
            _ => grid(state, scroll_locked),
        },
    }
}

fn grid(state: &State, scroll_locked: bool) -> Element<'_, Message> {
    let items: Vec<&ApodItem> = state.image_items().collect();

    let mut rows = Column::new().spacing(spacing::MD).padding(spacing::XS);
    for chunk in items.chunks(CARDS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::MD);
        for &item in chunk {
            row = row.push(card(state, item));
        }
        rows = rows.push(row);
    }

    if scroll_locked {
        Container::new(rows)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        scrollable(rows)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn card<'a>(state: &'a State, item: &'a ApodItem) -> Element<'a, Message> {
    let thumb: Element<'a, Message> = match state.thumbnail(item.date) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMB_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new("✦").size(sizing::PLACEHOLDER_GLYPH))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMB_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::thumb_placeholder)
            .into(),
    };

    let title = Text::new(item.title.as_str()).size(typography::TITLE_SM);
    let date = Text::new(item.long_date())
        .size(typography::CAPTION)
        .color(palette::GRAY_200);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(thumb)
        .push(title)
        .push(date);

    button(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::button::card)
        .on_press(Message::CardPressed(item.date))
        .into()
}

fn placeholder<'a>(glyph: &'a str, message: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(glyph).size(sizing::PLACEHOLDER_GLYPH))
        .push(
            Text::new(message)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
