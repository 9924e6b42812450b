// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`range_picker`] - Date inputs and the fetch control
//! - [`gallery`] - Card grid, fetch phases, and placeholders
//! - [`modal`] - Detail overlay for one selected entry
//! - [`notifications`] - Toast notifications for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)

pub mod design_tokens;
pub mod gallery;
pub mod modal;
pub mod notifications;
pub mod range_picker;
pub mod styles;
