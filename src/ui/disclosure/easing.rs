// SPDX-License-Identifier: MPL-2.0
//! Timing curves for disclosure animations.

/// Cubic ease-out: fast start, gentle landing.
///
/// Input is clamped to `[0, 1]`, so the output is too.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
