// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{window, Subscription};

/// Frame ticks for the comments animation.
///
/// Only active while at least one card is animating, so an idle feed does
/// not redraw.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
