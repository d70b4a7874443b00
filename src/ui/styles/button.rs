// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Borderless button that only tints on hover.
pub fn ghost(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(
                Color {
                    a: 0.08,
                    ..palette::BLACK
                },
            )),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Decorative button without an action (like, reply, more).
///
/// Looks the same in every status so the missing `on_press` does not render
/// as greyed out.
pub fn inert(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Button on the maroon header bar.
pub fn header(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::MAROON_LIGHT,
        _ => palette::MAROON,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::WHITE,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
