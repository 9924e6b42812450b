// SPDX-License-Identifier: MPL-2.0
//! Date-range defaults and validation for the range picker.
//!
//! The archive starts on June 16, 1995, and the picker defaults to the last
//! nine days. Ordering of start against end is deliberately not validated
//! here; the upstream API answers a reversed range with its own error, which
//! surfaces through the normal fetch-failure path.

use chrono::{Duration, NaiveDate};
use std::fmt;

/// Wire format of the feed's date query parameters and fields.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Number of days covered by the default range, ending today.
pub const DEFAULT_SPAN_DAYS: i64 = 9;

/// A validated pair of calendar dates; both are guaranteed present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn start_param(&self) -> String {
        self.start.format(ISO_FORMAT).to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format(ISO_FORMAT).to_string()
    }
}

/// Why a pair of input strings did not yield a [`DateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    MissingStart,
    MissingEnd,
    InvalidStart,
    InvalidEnd,
}

impl RangeError {
    /// Returns the i18n message key for the validation toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RangeError::MissingStart => "validation-missing-start",
            RangeError::MissingEnd => "validation-missing-end",
            RangeError::InvalidStart => "validation-invalid-start",
            RangeError::InvalidEnd => "validation-invalid-end",
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::MissingStart => write!(f, "start date is missing"),
            RangeError::MissingEnd => write!(f, "end date is missing"),
            RangeError::InvalidStart => write!(f, "start date is not a calendar date"),
            RangeError::InvalidEnd => write!(f, "end date is not a calendar date"),
        }
    }
}

/// First day of the APOD archive.
pub fn archive_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).unwrap()
}

/// The range the picker starts with: nine days ago through `today`.
pub fn default_range(today: NaiveDate) -> DateRange {
    DateRange {
        start: today - Duration::days(DEFAULT_SPAN_DAYS),
        end: today,
    }
}

/// Validates the picker's two input strings.
///
/// Presence is checked first (blank fields are the common case), then each
/// field must parse as an ISO calendar date. No ordering check.
pub fn parse(start_text: &str, end_text: &str) -> Result<DateRange, RangeError> {
    let start_text = start_text.trim();
    let end_text = end_text.trim();

    if start_text.is_empty() {
        return Err(RangeError::MissingStart);
    }
    if end_text.is_empty() {
        return Err(RangeError::MissingEnd);
    }

    let start = NaiveDate::parse_from_str(start_text, ISO_FORMAT)
        .map_err(|_| RangeError::InvalidStart)?;
    let end =
        NaiveDate::parse_from_str(end_text, ISO_FORMAT).map_err(|_| RangeError::InvalidEnd)?;

    Ok(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_spans_nine_days_ending_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let range = default_range(today);
        assert_eq!(range.end, today);
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn parse_accepts_iso_dates() {
        let range = parse("2024-06-01", "2024-06-02").expect("range should parse");
        assert_eq!(range.start_param(), "2024-06-01");
        assert_eq!(range.end_param(), "2024-06-02");
    }

    #[test]
    fn blank_fields_are_missing_not_invalid() {
        assert_eq!(parse("", "2024-06-02"), Err(RangeError::MissingStart));
        assert_eq!(parse("2024-06-01", "   "), Err(RangeError::MissingEnd));
        // Start is reported first when both are blank.
        assert_eq!(parse("", ""), Err(RangeError::MissingStart));
    }

    #[test]
    fn garbage_fields_are_invalid() {
        assert_eq!(parse("yesterday", "2024-06-02"), Err(RangeError::InvalidStart));
        assert_eq!(parse("2024-06-01", "2024-13-40"), Err(RangeError::InvalidEnd));
    }

    #[test]
    fn reversed_ranges_are_not_rejected() {
        // Ordering is the upstream API's call, not ours.
        let range = parse("2024-06-10", "2024-06-01").expect("reversed range should parse");
        assert!(range.start > range.end);
    }

    #[test]
    fn archive_start_is_first_apod_day() {
        assert_eq!(
            archive_start(),
            NaiveDate::from_ymd_opt(1995, 6, 16).unwrap()
        );
    }

    #[test]
    fn validation_errors_map_to_distinct_messages() {
        let keys = [
            RangeError::MissingStart.i18n_key(),
            RangeError::MissingEnd.i18n_key(),
            RangeError::InvalidStart.i18n_key(),
            RangeError::InvalidEnd.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
