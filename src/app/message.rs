// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::apod::ApodItem;
use crate::error::FetchError;
use crate::ui::{gallery, modal, notifications, range_picker};
use chrono::NaiveDate;
use iced::widget::image;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    RangePicker(range_picker::Message),
    Gallery(gallery::Message),
    Modal(modal::Message),
    Notices(notifications::Message),
    /// A range fetch finished. Stale generations are discarded.
    FetchCompleted {
        generation: u64,
        result: Result<Vec<ApodItem>, FetchError>,
    },
    /// A card's image bytes arrived (or failed to).
    ThumbnailFetched {
        generation: u64,
        date: NaiveDate,
        result: Result<image::Handle, FetchError>,
    },
    /// Escape was pressed somewhere in the window.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional APOD access token, taking precedence over the config file.
    pub api_key: Option<String>,
}
