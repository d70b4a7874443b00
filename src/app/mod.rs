// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the feed screen, its data
//! source and persisted preferences.
//!
//! The `App` struct loads `settings.toml`, picks a [`FeedSource`], feeds its
//! posts to the feed screen and turns the screen's events into side effects
//! such as refreshing the data.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config, MAX_POST_COUNT, MIN_POST_COUNT};
use crate::domain::feed::Post;
use crate::feed_source::{FeedSource, FixtureFeed, MockFeed};
use crate::ui::disclosure::SizePolicy;
use crate::ui::feed::{self, FeedSettings};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{widget::Container, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    feed: feed::State,
    source: Box<dyn FeedSource>,
    theme_mode: ThemeMode,
    /// Resolved once at startup; `System` detection is not repeated per frame.
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source.describe())
            .field("cards", &self.feed.cards().len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and the initial posts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}; using default settings");
        }

        let settings = FeedSettings {
            policy: SizePolicy::default(),
            duration: config.animation.disclosure_duration(),
        };
        let mock = mock_feed(&flags, &config);
        let (source, posts) = open_source(flags.feed_path, mock);

        log::info!(
            "starting with {} posts from {}, comments animate over {:?}",
            posts.len(),
            source.describe(),
            settings.duration
        );

        let mut feed = feed::State::new(settings);
        feed.apply_posts(posts);

        let theme_mode = config.general.theme_mode;
        let app = App {
            feed,
            source,
            theme_mode,
            theme: theme_mode.to_theme(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Feed")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(self.feed.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feed(feed_message) => {
                match self.feed.update(feed_message, Instant::now()) {
                    feed::Event::None => {}
                    feed::Event::RefreshRequested => self.refresh(),
                }
            }
            Message::Frame(now) => self.feed.tick(now),
        }
        Task::none()
    }

    /// Reloads posts from the source. On failure the current posts stay.
    fn refresh(&mut self) {
        match self.source.load() {
            Ok(posts) => {
                log::info!("refreshed {} posts from {}", posts.len(), self.source.describe());
                self.feed.apply_posts(posts);
            }
            Err(err) => log::warn!("refresh from {} failed: {err}", self.source.describe()),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        Container::new(self.feed.view().map(Message::Feed))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::feed_background)
            .into()
    }
}

/// Mock generator configured from CLI flags, falling back to `[feed]`.
fn mock_feed(flags: &Flags, config: &Config) -> MockFeed {
    let post_count = flags
        .posts
        .map_or_else(|| config.feed.post_count(), |n| n.clamp(MIN_POST_COUNT, MAX_POST_COUNT));
    let seed = flags.seed.or(config.feed.seed).unwrap_or_else(time_seed);
    MockFeed::new(seed, post_count, config.feed.max_comments())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
}

/// Picks the data source and performs the initial load.
///
/// A fixture that cannot be read or parsed falls back to `mock`.
fn open_source(
    feed_path: Option<PathBuf>,
    mut mock: MockFeed,
) -> (Box<dyn FeedSource>, Vec<Post>) {
    if let Some(path) = feed_path {
        let mut fixture = FixtureFeed::new(path);
        match fixture.load() {
            Ok(posts) => return (Box::new(fixture), posts),
            Err(err) => log::warn!(
                "could not load {}: {err}; falling back to mock feed",
                fixture.describe()
            ),
        }
    }

    let posts = match mock.load() {
        Ok(posts) => posts,
        Err(err) => {
            log::warn!("mock feed failed: {err}");
            Vec::new()
        }
    };
    (Box::new(mock), posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedConfig;
    use std::fs;
    use tempfile::tempdir;

    fn config_with_feed(feed: FeedConfig) -> Config {
        Config {
            feed,
            ..Config::default()
        }
    }

    #[test]
    fn flags_override_feed_config() {
        let config = config_with_feed(FeedConfig {
            post_count: Some(4),
            max_comments: Some(2),
            seed: Some(1),
        });
        let flags = Flags {
            posts: Some(7),
            seed: Some(99),
            ..Flags::default()
        };

        let mut mock = mock_feed(&flags, &config);

        assert_eq!(mock.seed(), 99);
        assert_eq!(mock.load().expect("mock load").len(), 7);
    }

    #[test]
    fn post_count_flag_is_clamped() {
        let flags = Flags {
            posts: Some(0),
            seed: Some(1),
            ..Flags::default()
        };

        let mut mock = mock_feed(&flags, &Config::default());

        assert_eq!(mock.load().expect("mock load").len(), MIN_POST_COUNT as usize);
    }

    #[test]
    fn config_seed_is_used_without_flag() {
        let config = config_with_feed(FeedConfig {
            seed: Some(42),
            ..FeedConfig::default()
        });

        assert_eq!(mock_feed(&Flags::default(), &config).seed(), 42);
    }

    #[test]
    fn fixture_source_is_used_when_readable() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("feed.toml");
        fs::write(&path, "[[posts]]\nid = 5\ntitle = \"From file\"\n")
            .expect("failed to write fixture");

        let (source, posts) = open_source(Some(path), MockFeed::new(1, 3, 2));

        assert!(source.describe().contains("feed.toml"));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "From file");
    }

    #[test]
    fn broken_fixture_falls_back_to_mock() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("feed.toml");
        fs::write(&path, "[[posts]\n").expect("failed to write fixture");

        let (_source, posts) = open_source(Some(path), MockFeed::new(1, 3, 2));

        assert_eq!(posts.len(), 3);
    }

    #[test]
    fn refresh_reconciles_new_mock_data() {
        let (source, posts) = open_source(None, MockFeed::new(7, 2, 4));
        let mut feed = feed::State::new(FeedSettings {
            policy: SizePolicy::default(),
            duration: config::AnimationConfig::default().disclosure_duration(),
        });
        feed.apply_posts(posts);
        let keys: Vec<_> = feed.cards().iter().map(|c| c.key()).collect();

        let mut app = App {
            feed,
            source,
            theme_mode: ThemeMode::Dark,
            theme: Theme::Dark,
        };
        let _ = app.update(Message::Feed(feed::Message::Refresh));

        let refreshed: Vec<_> = app.feed.cards().iter().map(|c| c.key()).collect();
        assert_eq!(keys, refreshed);
    }
}
