// SPDX-License-Identifier: MPL-2.0
//! Open/closed state machine for one comments panel.

use super::easing::ease_out_cubic;
use super::sizing::SizePolicy;
use crate::config::DEFAULT_DISCLOSURE_DURATION_MS;
use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Discrete state of the disclosure.
///
/// `Open` implies progress 1 and `Closed` implies progress 0. The moving
/// phases may momentarily sit at an endpoint before the next tick settles
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    /// Whether an animation is expected to be running.
    #[must_use]
    pub fn is_moving(self) -> bool {
        matches!(self, Phase::Opening | Phase::Closing)
    }
}

/// What the owner of a controller has to react to after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Comment content must be mounted (Closed → Opening).
    Mounted,
    /// Opening finished; the panel is fully open.
    Opened,
    /// Closing finished; comment content must be unmounted.
    Unmounted,
}

/// One in-flight interpolation of the shared progress value.
#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Animation {
    /// Returns the eased value at `now` and whether the animation is over.
    fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let value = self.from + (self.to - self.from) * ease_out_cubic(t);
        (value.clamp(0.0, 1.0), t >= 1.0)
    }
}

/// Disclosure controller bound to a single post card.
///
/// Height and rotation are two projections of one progress value; there is
/// no way for them to drift apart.
#[derive(Debug, Clone)]
pub struct Controller {
    phase: Phase,
    progress: f32,
    animation: Option<Animation>,
    content_mounted: bool,
    comment_count: usize,
    policy: SizePolicy,
    duration: Duration,
    cancelled: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(
            SizePolicy::default(),
            0,
            Duration::from_millis(DEFAULT_DISCLOSURE_DURATION_MS),
        )
    }
}

impl Controller {
    /// Creates a closed controller with no mounted content.
    #[must_use]
    pub fn new(policy: SizePolicy, comment_count: usize, duration: Duration) -> Self {
        Self {
            phase: Phase::Closed,
            progress: 0.0,
            animation: None,
            content_mounted: false,
            comment_count,
            policy,
            duration,
            cancelled: false,
        }
    }

    /// Flips the user's intent at frame instant `now`.
    ///
    /// A toggle during an animation reverses it from the value it has at
    /// `now`. The reversal takes the share of the full duration that is
    /// left to travel, so the panel keeps its nominal speed.
    pub fn toggle(&mut self, now: Instant) -> Effect {
        if self.cancelled {
            return Effect::None;
        }

        if let Some(animation) = &self.animation {
            self.progress = animation.sample(now).0;
        }

        match self.phase {
            Phase::Closed => {
                self.phase = Phase::Opening;
                self.start(now, 1.0);
                if self.content_mounted {
                    Effect::None
                } else {
                    self.content_mounted = true;
                    Effect::Mounted
                }
            }
            Phase::Closing => {
                self.phase = Phase::Opening;
                self.start(now, 1.0);
                Effect::None
            }
            Phase::Open | Phase::Opening => {
                self.phase = Phase::Closing;
                self.start(now, 0.0);
                Effect::None
            }
        }
    }

    /// Samples the running animation at frame instant `now`.
    ///
    /// Settles into `Open` or `Closed` once the animation has run its
    /// course. Without a running animation this does nothing.
    pub fn tick(&mut self, now: Instant) -> Effect {
        if self.cancelled {
            return Effect::None;
        }
        let Some(animation) = self.animation else {
            return Effect::None;
        };

        let (value, finished) = animation.sample(now);
        self.progress = value;
        if !finished {
            return Effect::None;
        }

        self.animation = None;
        self.progress = animation.to;
        if self.phase == Phase::Opening {
            self.phase = Phase::Open;
            Effect::Opened
        } else {
            self.phase = Phase::Closed;
            self.content_mounted = false;
            Effect::Unmounted
        }
    }

    /// Updates the comment count the open height is computed from.
    ///
    /// Progress is left untouched, so an in-flight animation simply heads
    /// for the new extent.
    pub fn set_comment_count(&mut self, comment_count: usize) {
        self.comment_count = comment_count;
    }

    /// Tears the controller down.
    ///
    /// Drops any in-flight animation. Every later `toggle` or `tick` is a
    /// no-op, so a frame delivered after teardown cannot change anything.
    pub fn cancel(&mut self) {
        self.animation = None;
        self.cancelled = true;
    }

    fn start(&mut self, now: Instant, to: f32) {
        let distance = (to - self.progress).abs();
        self.animation = Some(Animation {
            from: self.progress,
            to,
            started_at: now,
            duration: self.duration.mul_f32(distance),
        });
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Shared eased progress in `[0, 1]` as of the last toggle or tick.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Panel height as a fraction of the fully-open height.
    #[must_use]
    pub fn height_factor(&self) -> f32 {
        self.progress
    }

    /// Chevron rotation as a fraction of a half turn.
    #[must_use]
    pub fn rotation_factor(&self) -> f32 {
        self.progress
    }

    /// Chevron angle in radians: 0 when closed, π when open.
    #[must_use]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_factor() * PI
    }

    #[must_use]
    pub fn is_content_mounted(&self) -> bool {
        self.content_mounted
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comment_count
    }

    /// Fully-open height for the current comment count.
    #[must_use]
    pub fn target_height(&self) -> f32 {
        self.policy.target_height(self.comment_count)
    }

    /// Height the panel should be drawn at right now.
    #[must_use]
    pub fn current_height(&self) -> f32 {
        self.target_height() * self.height_factor()
    }
}
