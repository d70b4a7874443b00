// SPDX-License-Identifier: MPL-2.0
//! A single post: title, image, creator footer and the animated comments panel.
//!
//! The card owns the [`Controller`] for its comments. Pressing the toggle
//! affordance does nothing but call [`PostCard::toggle`].

use crate::domain::feed::{Comment, Post, PostId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::disclosure::{Controller, Effect, SizePolicy};
use crate::ui::feed::{comment_list, images};
use crate::ui::styles;
use crate::ui::widgets::Chevron;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Font, Length,
};
use std::time::{Duration, Instant};

/// Identity of one mounted card.
///
/// `generation` is unique per mount, so a card that is unmounted and later
/// mounted again for the same post gets a new key. Messages carrying an
/// old key no longer match any card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardKey {
    pub id: PostId,
    pub generation: u64,
}

/// Messages emitted by a post card.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleComments,
}

/// Mounted post card.
#[derive(Debug, Clone)]
pub struct PostCard {
    key: CardKey,
    post: Post,
    disclosure: Controller,
}

impl PostCard {
    /// Mounts a card for `post` with its comments closed.
    #[must_use]
    pub fn new(key: CardKey, post: Post, policy: SizePolicy, duration: Duration) -> Self {
        let disclosure = Controller::new(policy, post.comment_count(), duration);
        Self {
            key,
            post,
            disclosure,
        }
    }

    #[must_use]
    pub fn key(&self) -> CardKey {
        self.key
    }

    #[must_use]
    pub fn post(&self) -> &Post {
        &self.post
    }

    #[must_use]
    pub fn disclosure(&self) -> &Controller {
        &self.disclosure
    }

    /// Comments currently mounted in the panel, `None` while closed.
    #[must_use]
    pub fn mounted_comments(&self) -> Option<&[Comment]> {
        self.disclosure
            .is_content_mounted()
            .then_some(self.post.comments.as_slice())
    }

    /// Handles a card message at frame instant `now`.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::ToggleComments => {
                self.toggle(now);
            }
        }
    }

    /// Shows or hides the comments.
    pub fn toggle(&mut self, now: Instant) -> Effect {
        let effect = self.disclosure.toggle(now);
        log::debug!(
            "post {}: comments {:?} (progress {:.2})",
            self.key.id,
            self.disclosure.phase(),
            self.disclosure.progress()
        );
        self.log_effect(effect);
        effect
    }

    /// Advances the comments animation to `now`.
    pub fn tick(&mut self, now: Instant) -> Effect {
        let effect = self.disclosure.tick(now);
        self.log_effect(effect);
        effect
    }

    /// Swaps in refreshed data for the same post and retargets the panel.
    pub fn replace_post(&mut self, post: Post) {
        debug_assert_eq!(post.id, self.key.id);
        if post.comment_count() != self.post.comment_count() {
            log::debug!(
                "post {}: comment count {} -> {}, retargeting",
                self.key.id,
                self.post.comment_count(),
                post.comment_count()
            );
        }
        self.disclosure.set_comment_count(post.comment_count());
        self.post = post;
    }

    /// Tears the card down, cancelling any running animation.
    pub fn unmount(mut self) {
        if self.disclosure.phase().is_moving() {
            log::debug!(
                "post {}: unmounted while {:?}, animation cancelled",
                self.key.id,
                self.disclosure.phase()
            );
        }
        self.disclosure.cancel();
    }

    fn log_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Mounted => log::debug!("post {}: comments mounted", self.key.id),
            Effect::Opened => log::debug!("post {}: comments open", self.key.id),
            Effect::Unmounted => log::debug!("post {}: comments unmounted", self.key.id),
        }
    }

    /// Renders the card.
    pub fn view(&self) -> Element<'_, Message> {
        let bold = Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        };

        let title_bar = Container::new(
            Row::new()
                .align_y(Vertical::Center)
                .push(
                    Text::new(&self.post.title)
                        .size(typography::BODY_LG)
                        .font(bold)
                        .width(Length::Fill),
                )
                .push(
                    button(Text::new("↩").size(sizing::ICON_MD))
                        .padding([0.0, spacing::MD])
                        .style(styles::button::inert(palette::BLACK)),
                ),
        )
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::post_title_bar);

        let footer = Container::new(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(images::avatar(
                    &self.post.creator_image,
                    sizing::CREATOR_AVATAR,
                ))
                .push(Text::new(&self.post.creator_name).size(typography::BODY).font(bold))
                .push(Space::new().width(Length::Fill))
                .push(self.toggle_affordance()),
        )
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::post_footer);

        let mut card = Column::new()
            .width(Length::Fill)
            .push(title_bar)
            .push(images::cover(&self.post.image))
            .push(footer);

        if let Some(comments) = self.mounted_comments() {
            let panel = Container::new(comment_list::view(comments))
                .width(Length::Fill)
                .height(Length::Fixed(self.disclosure.current_height()))
                .clip(true)
                .style(styles::container::comments_panel);
            card = card.push(panel);
        }

        card.into()
    }

    fn toggle_affordance(&self) -> Element<'_, Message> {
        let count = self.post.comment_count();
        let label = match count {
            1 => "1 comment".to_string(),
            n => format!("{n} comments"),
        };

        let content = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(label).size(typography::BODY))
            .push(Chevron::new(palette::BLACK, self.disclosure.rotation_radians()).into_element());

        button(content)
            .on_press(Message::ToggleComments)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::ghost(palette::BLACK))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feed::test_support::post_with_comments;
    use crate::ui::disclosure::Phase;

    const DURATION: Duration = Duration::from_millis(500);

    fn card(id: u64, comments: usize) -> PostCard {
        PostCard::new(
            CardKey {
                id: PostId::new(id),
                generation: 0,
            },
            post_with_comments(id, comments),
            SizePolicy::default(),
            DURATION,
        )
    }

    #[test]
    fn closed_card_has_no_mounted_comments() {
        let card = card(1, 3);
        assert!(card.mounted_comments().is_none());
        assert_eq!(card.disclosure().phase(), Phase::Closed);
    }

    #[test]
    fn toggle_message_mounts_comments_in_order() {
        let mut card = card(1, 3);
        let t0 = Instant::now();

        card.update(Message::ToggleComments, t0);
        card.tick(t0 + DURATION);

        let authors: Vec<_> = card
            .mounted_comments()
            .expect("comments should be mounted")
            .iter()
            .map(|c| c.author.as_str())
            .collect();
        assert_eq!(authors, ["Author1", "Author2", "Author3"]);
        assert_eq!(card.disclosure().phase(), Phase::Open);
    }

    #[test]
    fn replace_post_retargets_without_resetting_progress() {
        let mut card = card(1, 1);
        let t0 = Instant::now();
        card.toggle(t0);
        card.tick(t0 + Duration::from_millis(100));
        let progress = card.disclosure().progress();

        card.replace_post(post_with_comments(1, 4));

        assert_eq!(card.disclosure().comment_count(), 4);
        assert_eq!(card.disclosure().progress(), progress);
        assert_eq!(card.post().comment_count(), 4);
    }
}
