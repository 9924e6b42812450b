// SPDX-License-Identifier: MPL-2.0
//! `astro_gallery` is a NASA Astronomy Picture of the Day browser built with
//! the Iced GUI framework.
//!
//! The user picks a date range, the APOD feed is fetched once per request,
//! and image entries become a clickable card gallery with a detail modal.
//! The crate also demonstrates internationalization with Fluent and user
//! preference management.

#![doc(html_root_url = "https://docs.rs/astro_gallery/0.1.0")]

pub mod apod;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
