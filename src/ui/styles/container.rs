// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Maroon header bar holding the search field.
pub fn header_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::MAROON)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dark page background behind the feed.
pub fn feed_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// White title row on top of a post, rounded at the top.
pub fn post_title_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: Radius {
                top_left: radius::SM,
                top_right: radius::SM,
                bottom_right: radius::NONE,
                bottom_left: radius::NONE,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// White creator footer under the post image.
pub fn post_footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::BLACK),
        ..Default::default()
    }
}

/// Stand-in for images that cannot be shown.
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::IMAGE_PLACEHOLDER)),
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}

/// Round avatar placeholder.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::AVATAR)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Comments panel, rounded at the bottom.
pub fn comments_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PANEL)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: Radius {
                top_left: radius::NONE,
                top_right: radius::NONE,
                bottom_right: radius::MD,
                bottom_left: radius::MD,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}
