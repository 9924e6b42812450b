// SPDX-License-Identifier: MPL-2.0
//! One entry of the APOD feed as the API serves it.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Classification of a feed entry's payload.
///
/// The feed documents `image` and `video` today; anything it grows in the
/// future decodes to `Other` instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    Other,
}

impl MediaType {
    /// Parses the feed's `media_type` string.
    pub fn from_feed(value: &str) -> Self {
        match value {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Other,
        }
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(MediaType::from_feed(&raw))
    }
}

/// A single day's entry. Produced fresh per request and owned by the gallery
/// for one render cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApodItem {
    pub date: NaiveDate,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub media_type: MediaType,
}

impl ApodItem {
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }

    /// Long-form date for cards and the modal, e.g. "June 1, 2024".
    pub fn long_date(&self) -> String {
        format_long_date(self.date)
    }
}

/// Formats a date the way the feed's audience reads it: full month name,
/// unpadded day, four-digit year.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "date": "2024-06-01",
        "title": "A",
        "url": "u1",
        "explanation": "e1",
        "media_type": "image",
        "hdurl": "u1-hd",
        "service_version": "v1"
    }"#;

    #[test]
    fn deserializes_feed_entry_and_ignores_extra_fields() {
        let item: ApodItem = serde_json::from_str(SAMPLE).expect("entry should decode");
        assert_eq!(item.title, "A");
        assert_eq!(item.url, "u1");
        assert_eq!(item.explanation, "e1");
        assert_eq!(item.media_type, MediaType::Image);
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn unknown_media_type_decodes_to_other() {
        assert_eq!(MediaType::from_feed("image"), MediaType::Image);
        assert_eq!(MediaType::from_feed("video"), MediaType::Video);
        assert_eq!(MediaType::from_feed("hologram"), MediaType::Other);
    }

    #[test]
    fn long_date_is_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_long_date(date), "June 1, 2024");

        let date = NaiveDate::from_ymd_opt(1995, 6, 16).unwrap();
        assert_eq!(format_long_date(date), "June 16, 1995");
    }

    #[test]
    fn is_image_only_for_image_entries() {
        let mut item: ApodItem = serde_json::from_str(SAMPLE).unwrap();
        assert!(item.is_image());

        item.media_type = MediaType::Video;
        assert!(!item.is_image());
    }

    #[test]
    fn malformed_date_fails_decoding() {
        let broken = SAMPLE.replace("2024-06-01", "not-a-date");
        assert!(serde_json::from_str::<ApodItem>(&broken).is_err());
    }
}
