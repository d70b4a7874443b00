// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::feed;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Feed(feed::Message),
    /// Redraw tick, delivered only while a comments panel is animating.
    Frame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Number of mock posts, overriding `[feed] post_count`.
    pub posts: Option<u32>,
    /// Mock feed seed, overriding `[feed] seed`.
    pub seed: Option<u64>,
    /// TOML fixture to load posts from instead of the mock generator.
    pub feed_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FEED_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
