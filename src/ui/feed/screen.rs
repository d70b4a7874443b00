// SPDX-License-Identifier: MPL-2.0
//! Feed screen: header with search, "Your Feed" heading and the post cards.
//!
//! The screen keeps the full post list from the data source and one mounted
//! [`PostCard`] per post that passes the search filter. Cards are keyed by
//! post id, so data refreshes and filter changes keep the disclosure state
//! of every card that stays on screen.

use super::post_card::{self, CardKey, PostCard};
use crate::domain::feed::{Post, PostId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::disclosure::SizePolicy;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, scrollable, text_input, Column, Container, Row, Text},
    Element, Font, Length,
};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Layout and timing shared by every card on the screen.
#[derive(Debug, Clone, Copy)]
pub struct FeedSettings {
    pub policy: SizePolicy,
    pub duration: Duration,
}

/// Messages emitted by the feed screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    Refresh,
    Card(CardKey, post_card::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    RefreshRequested,
}

/// Feed screen state.
#[derive(Debug)]
pub struct State {
    settings: FeedSettings,
    posts: Vec<Post>,
    cards: Vec<PostCard>,
    query: String,
    next_generation: u64,
}

impl State {
    #[must_use]
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            settings,
            posts: Vec::new(),
            cards: Vec::new(),
            query: String::new(),
            next_generation: 0,
        }
    }

    /// Replaces the post list with fresh data from the source.
    ///
    /// Cards for posts that are still present keep their disclosure state
    /// and pick up the new comment count. Only the first post with a given
    /// id is kept, so every card maps to exactly one post.
    pub fn apply_posts(&mut self, posts: Vec<Post>) {
        let mut seen = HashSet::new();
        self.posts = posts
            .into_iter()
            .filter(|post| {
                let first = seen.insert(post.id);
                if !first {
                    log::warn!("dropping post with repeated id {}", post.id);
                }
                first
            })
            .collect();
        self.remount();
    }

    /// Updates the search query and remounts the matching cards.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.remount();
    }

    /// Process a feed message at frame instant `now`.
    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::SearchChanged(query) => {
                self.set_query(query);
                Event::None
            }
            Message::Refresh => Event::RefreshRequested,
            Message::Card(key, message) => {
                match self.cards.iter_mut().find(|card| card.key() == key) {
                    Some(card) => card.update(message, now),
                    None => log::debug!(
                        "ignoring {message:?} for unmounted card {} (generation {})",
                        key.id,
                        key.generation
                    ),
                }
                Event::None
            }
        }
    }

    /// Advances every running comments animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        for card in &mut self.cards {
            card.tick(now);
        }
    }

    /// Whether any card needs frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(|card| card.disclosure().is_animating())
    }

    /// Mounted cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    /// Mounted card for `id`, if the post is currently shown.
    #[must_use]
    pub fn card(&self, id: PostId) -> Option<&PostCard> {
        self.cards.iter().find(|card| card.key().id == id)
    }

    /// All posts from the source, including filtered ones.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    fn next_key(&mut self, id: PostId) -> CardKey {
        let key = CardKey {
            id,
            generation: self.next_generation,
        };
        self.next_generation += 1;
        key
    }

    /// Rebuilds the mounted cards from `posts` and `query`.
    fn remount(&mut self) {
        let mut previous: HashMap<PostId, PostCard> = self
            .cards
            .drain(..)
            .map(|card| (card.key().id, card))
            .collect();

        let visible: Vec<Post> = self
            .posts
            .iter()
            .filter(|post| post.matches_query(&self.query))
            .cloned()
            .collect();

        let mut kept = 0usize;
        let mut mounted = 0usize;
        for post in visible {
            let card = match previous.remove(&post.id) {
                Some(mut card) => {
                    kept += 1;
                    card.replace_post(post);
                    card
                }
                None => {
                    mounted += 1;
                    let key = self.next_key(post.id);
                    PostCard::new(key, post, self.settings.policy, self.settings.duration)
                }
            };
            self.cards.push(card);
        }

        let unmounted = previous.len();
        for (_, card) in previous {
            card.unmount();
        }

        log::debug!(
            "feed remounted: {kept} kept, {mounted} mounted, {unmounted} unmounted ({} of {} posts shown)",
            self.cards.len(),
            self.posts.len()
        );
    }

    /// Renders the feed screen.
    pub fn view(&self) -> Element<'_, Message> {
        let search = text_input("Search", &self.query)
            .on_input(Message::SearchChanged)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill);

        let refresh = button(Text::new("⟳").size(sizing::ICON_MD))
            .on_press(Message::Refresh)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::header);

        let header = Container::new(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new("⌕").size(sizing::ICON_MD).color(palette::WHITE))
                .push(search)
                .push(refresh),
        )
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::header_bar);

        let heading = Text::new("Your Feed")
            .size(typography::HEADING)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            })
            .color(palette::WHITE);

        let mut feed = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::SM)
            .max_width(sizing::FEED_MAX_WIDTH)
            .width(Length::Fill)
            .push(heading);

        if self.cards.is_empty() {
            let empty = if self.posts.is_empty() {
                "No posts yet."
            } else {
                "No posts match your search."
            };
            feed = feed.push(Text::new(empty).size(typography::BODY).color(palette::WHITE));
        }

        for card in &self.cards {
            let key = card.key();
            feed = feed.push(card.view().map(move |message| Message::Card(key, message)));
        }

        let body = Container::new(scrollable(
            Container::new(feed)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::feed_background);

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(body)
            .into()
    }
}
