// SPDX-License-Identifier: MPL-2.0
//! Feed fixtures loaded from TOML.
//!
//! ```toml
//! [[posts]]
//! id = 1
//! title = "Golden hour"
//! creator_name = "Alex"
//! image = "file:///home/alex/pictures/bay.jpg"
//!
//! [[posts.comments]]
//! author = "Author1"
//! text = "This is a super cool comment"
//! like_count = 3
//! ```
//!
//! Every field is optional. Missing strings become empty, missing images
//! become placeholders and missing or negative like counts become zero. A
//! missing `id` is numbered after the highest explicit one; a repeated
//! explicit `id` is an error.

use super::FeedSource;
use crate::domain::feed::{Comment, ImageSource, LikeCount, Post, PostId};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    posts: Vec<PostRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostRecord {
    id: Option<u64>,
    image: String,
    title: String,
    creator_name: String,
    creator_image: String,
    comments: Vec<CommentRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CommentRecord {
    author: String,
    text: String,
    author_image: String,
    like_count: Option<i64>,
}

impl CommentRecord {
    fn into_comment(self) -> Comment {
        Comment::new(
            self.author,
            self.text,
            &self.author_image,
            self.like_count
                .map_or(LikeCount::ZERO, LikeCount::from_signed),
        )
    }
}

impl PostRecord {
    fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            image: ImageSource::from_uri(&self.image),
            title: self.title,
            creator_name: self.creator_name,
            creator_image: ImageSource::from_uri(&self.creator_image),
            comments: self
                .comments
                .into_iter()
                .map(CommentRecord::into_comment)
                .collect(),
        }
    }
}

/// Parses fixture TOML into posts, preserving file order.
///
/// Explicit ids must be unique. Posts without an id are numbered after the
/// highest explicit id, in file order, so the result never repeats an id.
pub fn parse_fixture(content: &str) -> Result<Vec<Post>> {
    let file: FixtureFile =
        toml::from_str(content).map_err(|err| Error::Fixture(err.to_string()))?;

    let mut explicit = HashSet::new();
    for id in file.posts.iter().filter_map(|record| record.id) {
        if !explicit.insert(id) {
            return Err(Error::Fixture(format!(
                "duplicate post id {}",
                PostId::new(id)
            )));
        }
    }

    let mut next_id = explicit.iter().copied().max().unwrap_or(0);
    file.posts
        .into_iter()
        .map(|record| -> Result<Post> {
            let id = match record.id {
                Some(id) => id,
                None => {
                    next_id = next_id.checked_add(1).ok_or_else(|| {
                        Error::Fixture("no post id left for a post without `id`".to_string())
                    })?;
                    next_id
                }
            };
            Ok(record.into_post(PostId::new(id)))
        })
        .collect()
}

/// Feed read from a TOML file on every load.
#[derive(Debug, Clone)]
pub struct FixtureFeed {
    path: PathBuf,
}

impl FixtureFeed {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedSource for FixtureFeed {
    fn load(&mut self) -> Result<Vec<Post>> {
        let content = fs::read_to_string(&self.path)?;
        parse_fixture(&content)
    }

    fn describe(&self) -> String {
        format!("fixture {}", self.path.display())
    }
}
