// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Disclosure**: Comment panel animation timing
//! - **Layout**: Comment panel extent used to size the animation target
//! - **Feed**: Mock data generation bounds

// ==========================================================================
// Disclosure Animation Defaults
// ==========================================================================

/// Default duration of one full open or close animation (in milliseconds).
pub const DEFAULT_DISCLOSURE_DURATION_MS: u64 = 500;

/// Minimum animation duration (in milliseconds).
pub const MIN_DISCLOSURE_DURATION_MS: u64 = 50;

/// Maximum animation duration (in milliseconds).
pub const MAX_DISCLOSURE_DURATION_MS: u64 = 5_000;

// ==========================================================================
// Comment Panel Layout
// ==========================================================================

/// Fixed part of the comments panel: vertical padding, the "Comments"
/// heading row and the trailing "more" button.
pub const HEADER_BLOCK_HEIGHT: f32 = 76.0;

/// Height of one comment row, including its bottom margin.
pub const COMMENT_ROW_HEIGHT: f32 = 60.0;

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Default number of posts produced by the mock feed.
pub const DEFAULT_POST_COUNT: u32 = 3;

/// Minimum number of posts the mock feed may produce.
pub const MIN_POST_COUNT: u32 = 1;

/// Maximum number of posts the mock feed may produce.
pub const MAX_POST_COUNT: u32 = 200;

/// Default upper bound on comments per generated post.
pub const DEFAULT_MAX_COMMENTS: u32 = 5;

/// Hard upper bound on comments per generated post.
pub const MAX_MAX_COMMENTS: u32 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Disclosure validation
    assert!(MIN_DISCLOSURE_DURATION_MS > 0);
    assert!(MAX_DISCLOSURE_DURATION_MS >= MIN_DISCLOSURE_DURATION_MS);
    assert!(DEFAULT_DISCLOSURE_DURATION_MS >= MIN_DISCLOSURE_DURATION_MS);
    assert!(DEFAULT_DISCLOSURE_DURATION_MS <= MAX_DISCLOSURE_DURATION_MS);

    // Layout validation
    assert!(HEADER_BLOCK_HEIGHT > 0.0);
    assert!(COMMENT_ROW_HEIGHT > 0.0);

    // Feed validation
    assert!(MIN_POST_COUNT > 0);
    assert!(MAX_POST_COUNT >= MIN_POST_COUNT);
    assert!(DEFAULT_POST_COUNT >= MIN_POST_COUNT);
    assert!(DEFAULT_POST_COUNT <= MAX_POST_COUNT);
    assert!(DEFAULT_MAX_COMMENTS <= MAX_MAX_COMMENTS);
};
