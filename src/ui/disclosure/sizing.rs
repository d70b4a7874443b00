// SPDX-License-Identifier: MPL-2.0
//! Fully-open extent of a comments panel.

use crate::config::{COMMENT_ROW_HEIGHT, HEADER_BLOCK_HEIGHT};

/// Layout constants the panel's open height is derived from.
///
/// The open height is `header_block + count * comment_row`, so a post with
/// no comments still opens far enough to show its heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizePolicy {
    header_block_height: f32,
    comment_row_height: f32,
}

impl SizePolicy {
    /// Creates a policy. Negative or NaN heights are treated as zero.
    #[must_use]
    pub fn new(header_block_height: f32, comment_row_height: f32) -> Self {
        Self {
            header_block_height: non_negative(header_block_height),
            comment_row_height: non_negative(comment_row_height),
        }
    }

    #[must_use]
    pub fn header_block_height(&self) -> f32 {
        self.header_block_height
    }

    #[must_use]
    pub fn comment_row_height(&self) -> f32 {
        self.comment_row_height
    }

    /// Height of the panel when fully open with `comment_count` rows.
    #[must_use]
    pub fn target_height(&self, comment_count: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        // comment counts are small; f32 is exact far beyond any feed size
        let rows = comment_count as f32;
        self.header_block_height + rows * self.comment_row_height
    }
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self::new(HEADER_BLOCK_HEIGHT, COMMENT_ROW_HEIGHT)
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
