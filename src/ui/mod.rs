// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: screens own
//! their state, render from `&self` and report upward through messages.
//!
//! - [`feed`] - the feed screen, post cards and comments
//! - [`disclosure`] - expand/collapse state machine for the comments panel
//! - [`widgets`] - custom Iced widgets (animated chevron)
//! - [`styles`] - centralized styling (buttons, containers)
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod disclosure;
pub mod feed;
pub mod styles;
pub mod theming;
pub mod widgets;
