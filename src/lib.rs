// SPDX-License-Identifier: MPL-2.0
//! `iced_feed` is a social-feed screen built with the Iced GUI framework.
//!
//! Each post card shows an image, a title, its creator and a comments panel
//! that expands and collapses with an eased height animation kept in sync
//! with a rotating chevron. Posts come from a seeded mock generator or a
//! TOML fixture file.

#![doc(html_root_url = "https://docs.rs/iced_feed/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed_source;
pub mod ui;
