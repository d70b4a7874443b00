// SPDX-License-Identifier: MPL-2.0
//! Seeded random feed generator.

use super::FeedSource;
use crate::domain::feed::{Comment, ImageSource, LikeCount, Post, PostId};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const TITLES: &[&str] = &[
    "Golden hour over the bay",
    "First snow of the season",
    "Street food night market",
    "Morning run by the river",
    "New mural downtown",
    "Weekend hike summit",
    "Homemade sourdough",
    "Vintage camera haul",
];

const CREATORS: &[&str] = &[
    "Alex Rivera",
    "Sam Okafor",
    "Mina Park",
    "Jordan Blake",
    "Priya Natarajan",
    "Leo Martin",
];

const AUTHORS: &[&str] = &["Author1", "Author2", "Author3", "Kai", "Noor", "Tess", "Ravi"];

const COMMENT_TEXTS: &[&str] = &[
    "This is a super cool comment",
    "This is another great comment",
    "I love this post!",
    "Where was this taken?",
    "The colors are amazing",
    "Saving this for later",
];

/// Deterministic random feed.
///
/// Each [`load`](FeedSource::load) derives its content from the current
/// seed and then advances it, so a refresh yields new content while post
/// ids stay `1..=post_count`.
#[derive(Debug, Clone)]
pub struct MockFeed {
    seed: u64,
    post_count: u32,
    max_comments: u32,
}

impl MockFeed {
    #[must_use]
    pub fn new(seed: u64, post_count: u32, max_comments: u32) -> Self {
        Self {
            seed,
            post_count,
            max_comments,
        }
    }

    /// Seed that the next `load` will use.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn generate(&self) -> Vec<Post> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=u64::from(self.post_count))
            .map(|id| generate_post(&mut rng, id, self.max_comments))
            .collect()
    }
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn generate_post(rng: &mut StdRng, id: u64, max_comments: u32) -> Post {
    let comment_count = rng.random_range(0..=max_comments);
    let comments = (0..comment_count)
        .map(|_| {
            Comment::new(
                pick(rng, AUTHORS),
                pick(rng, COMMENT_TEXTS),
                "",
                LikeCount::new(rng.random_range(0..500)),
            )
        })
        .collect();

    Post {
        id: PostId::new(id),
        image: ImageSource::Remote(format!("https://picsum.photos/seed/{id}/600/400")),
        title: pick(rng, TITLES).to_string(),
        creator_name: pick(rng, CREATORS).to_string(),
        creator_image: ImageSource::Missing,
        comments,
    }
}

impl FeedSource for MockFeed {
    fn load(&mut self) -> Result<Vec<Post>> {
        let posts = self.generate();
        self.seed = self.seed.wrapping_add(1);
        Ok(posts)
    }

    fn describe(&self) -> String {
        format!(
            "mock feed (seed {}, {} posts, up to {} comments)",
            self.seed, self.post_count, self.max_comments
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_same_feed() {
        let first = MockFeed::new(42, 5, 4).load().expect("mock load");
        let second = MockFeed::new(42, 5, 4).load().expect("mock load");
        assert_eq!(first, second);
    }

    #[test]
    fn ids_are_stable_across_refreshes() {
        let mut feed = MockFeed::new(1, 4, 3);
        let ids = |posts: &[Post]| posts.iter().map(|p| p.id).collect::<Vec<_>>();

        let first = feed.load().expect("mock load");
        let second = feed.load().expect("mock load");

        assert_eq!(ids(&first), ids(&second));
        assert_eq!(feed.seed(), 3);
    }

    #[test]
    fn comment_count_respects_bound() {
        let posts = MockFeed::new(9, 20, 2).load().expect("mock load");
        assert!(posts.iter().all(|p| p.comment_count() <= 2));
    }

    #[test]
    fn zero_max_comments_produces_empty_lists() {
        let posts = MockFeed::new(9, 3, 0).load().expect("mock load");
        assert!(posts.iter().all(|p| p.comments.is_empty()));
    }
}
