// SPDX-License-Identifier: MPL-2.0
//! Animated disclosure of a post's comments.
//!
//! A [`Controller`] turns "show comments" / "hide comments" presses into a
//! single eased progress value. The panel height and the chevron rotation
//! are both read from that value, so they always finish together.
//!
//! The controller never reads the clock itself: every operation takes the
//! frame instant from the caller, which keeps it deterministic under test.

mod controller;
pub mod easing;
mod sizing;

pub use controller::{Controller, Effect, Phase};
pub use sizing::SizePolicy;
