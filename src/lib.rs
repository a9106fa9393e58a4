// SPDX-License-Identifier: MPL-2.0
//! `iced_dock` is a small animated UI built with the Iced GUI framework.
//!
//! It pairs a spring-animated light/dark toggle with a floating menu that
//! grows in place into a full-width panel, and demonstrates internationalization
//! with Fluent, user preference management, and a deterministic animation engine.

#![doc(html_root_url = "https://docs.rs/iced_dock/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod fonts;
pub mod i18n;
pub mod ui;
