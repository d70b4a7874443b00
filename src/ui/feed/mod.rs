// SPDX-License-Identifier: MPL-2.0
//! Feed screen and the widgets it is built from.
//!
//! - [`screen`] - search header, "Your Feed" heading and the card column
//! - [`post_card`] - one post with its animated comments panel
//! - [`comment_list`] / [`comment_item`] - the comments panel content
//! - [`images`] - cover and avatar images with placeholders

pub mod comment_item;
pub mod comment_list;
pub mod images;
pub mod post_card;
pub mod screen;

pub use post_card::{CardKey, PostCard};
pub use screen::{Event, FeedSettings, Message, State};
