// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::apod::{date_range, ApodItem};
use crate::error::FetchError;
use crate::ui::notifications::Notice;
use crate::ui::{gallery, modal, notifications, range_picker};
use chrono::NaiveDate;
use iced::widget::image;
use iced::Task;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RangePicker(msg) => {
                match range_picker::update(&mut self.range_picker, msg) {
                    range_picker::Event::None => Task::none(),
                    range_picker::Event::FetchRequested => self.start_fetch(),
                }
            }
            Message::FetchCompleted { generation, result } => {
                self.on_fetch_completed(generation, result)
            }
            Message::ThumbnailFetched {
                generation,
                date,
                result,
            } => {
                self.on_thumbnail_fetched(generation, date, result);
                Task::none()
            }
            Message::Gallery(msg) => {
                match gallery::update(&mut self.gallery, msg) {
                    gallery::Event::None => {}
                    gallery::Event::OpenDetail(item) => self.modal.open(item),
                }
                Task::none()
            }
            Message::Modal(msg) => {
                modal::update(&mut self.modal, msg);
                Task::none()
            }
            Message::EscapePressed => {
                // The cancel key only means "close" while the modal is up.
                if self.modal.is_open() {
                    modal::update(&mut self.modal, modal::Message::EscapePressed);
                }
                Task::none()
            }
            Message::Notices(msg) => {
                notifications::update(&mut self.notices, msg);
                Task::none()
            }
        }
    }

    /// Validates the picker text and, if it holds a full range, starts the
    /// fetch. Validation failures surface as a toast and no request is made.
    fn start_fetch(&mut self) -> Task<Message> {
        let range = match date_range::parse(
            self.range_picker.start_text(),
            self.range_picker.end_text(),
        ) {
            Ok(range) => range,
            Err(err) => {
                self.notices.push(Notice::warning(err.i18n_key()));
                return Task::none();
            }
        };

        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.gallery.set_loading();

        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_range(&range).await },
            move |result| Message::FetchCompleted { generation, result },
        )
    }

    fn on_fetch_completed(
        &mut self,
        generation: u64,
        result: Result<Vec<ApodItem>, FetchError>,
    ) -> Task<Message> {
        if generation != self.fetch_generation {
            tracing::debug!(generation, "discarding completion of a superseded fetch");
            return Task::none();
        }

        match result {
            Ok(items) => {
                self.gallery.set_items(items);
                self.spawn_thumbnail_fetches(generation)
            }
            Err(err) => {
                // The user sees one generic message; the cause is log-only.
                tracing::error!(error = %err, "range fetch failed");
                self.gallery.set_failed();
                Task::none()
            }
        }
    }

    fn spawn_thumbnail_fetches(&self, generation: u64) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .gallery
            .missing_thumbnails()
            .into_iter()
            .map(|(date, url)| {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        client
                            .fetch_image(&url)
                            .await
                            .map(image::Handle::from_bytes)
                    },
                    move |result| Message::ThumbnailFetched {
                        generation,
                        date,
                        result,
                    },
                )
            })
            .collect();

        Task::batch(tasks)
    }

    fn on_thumbnail_fetched(
        &mut self,
        generation: u64,
        date: NaiveDate,
        result: Result<image::Handle, FetchError>,
    ) {
        if generation != self.fetch_generation {
            tracing::debug!(generation, %date, "discarding thumbnail of a superseded fetch");
            return;
        }

        match result {
            Ok(handle) => self.gallery.insert_thumbnail(date, handle),
            Err(err) => {
                // The card keeps its placeholder; nothing else degrades.
                tracing::warn!(error = %err, %date, "thumbnail fetch failed");
            }
        }
    }
}
