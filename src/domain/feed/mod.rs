// SPDX-License-Identifier: MPL-2.0
//! Feed records: posts and their comments.
//!
//! Records are immutable once built. UI components only ever borrow them;
//! a data refresh replaces whole records rather than editing them.

mod newtypes;

pub use newtypes::{ImageSource, LikeCount, PostId};

/// One comment under a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub author_image: ImageSource,
    pub like_count: LikeCount,
}

impl Comment {
    /// Builds a comment from raw fields, resolving the avatar reference.
    #[must_use]
    pub fn new(
        author: impl Into<String>,
        text: impl Into<String>,
        author_image: &str,
        like_count: LikeCount,
    ) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            author_image: ImageSource::from_uri(author_image),
            like_count,
        }
    }
}

/// One post in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub image: ImageSource,
    pub title: String,
    pub creator_name: String,
    pub creator_image: ImageSource,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Number of comments, as consumed by the disclosure sizing.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Case-insensitive match of `query` against title and creator name.
    ///
    /// A blank query matches every post.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.creator_name.to_lowercase().contains(&needle)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::post_with_comments;
    use super::*;

    #[test]
    fn comment_count_reflects_comments() {
        assert_eq!(post_with_comments(1, 0).comment_count(), 0);
        assert_eq!(post_with_comments(1, 3).comment_count(), 3);
    }

    #[test]
    fn blank_query_matches_everything() {
        let post = post_with_comments(1, 0);
        assert!(post.matches_query(""));
        assert!(post.matches_query("   "));
    }

    #[test]
    fn query_matches_title_and_creator_case_insensitively() {
        let post = post_with_comments(7, 0);
        assert!(post.matches_query("post 7"));
        assert!(post.matches_query("CREATOR"));
        assert!(!post.matches_query("sunset"));
    }

    #[test]
    fn comment_new_resolves_placeholder_avatar_to_missing() {
        let comment = Comment::new("Author1", "Nice", "author-image-url", LikeCount::ZERO);
        assert_eq!(comment.author_image, ImageSource::Missing);
    }
}
