// SPDX-License-Identifier: MPL-2.0
//! Data sources that supply the ordered sequence of posts to the feed.
//!
//! The feed screen never fetches or caches data itself: it asks a
//! [`FeedSource`] for a fresh list and reconciles its cards against it.
//! Two sources exist:
//!
//! - [`MockFeed`]: deterministic random posts from a seed
//! - [`FixtureFeed`]: posts read from a TOML file, for demos and tests

mod fixture;
mod mock;

pub use fixture::{parse_fixture, FixtureFeed};
pub use mock::MockFeed;

use crate::domain::feed::Post;
use crate::error::Result;

/// Something that can produce the feed's posts.
pub trait FeedSource {
    /// Produces the current list of posts in display order.
    ///
    /// Calling it again is a refresh: ids stay stable for posts that still
    /// exist, while their content (e.g. comment count) may change.
    fn load(&mut self) -> Result<Vec<Post>>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
