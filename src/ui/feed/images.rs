// SPDX-License-Identifier: MPL-2.0
//! Image slots with placeholder fallback.
//!
//! Only local files are drawn. Remote and missing references render a
//! placeholder of the same size so layout never depends on image loading.

use crate::domain::feed::ImageSource;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::{
    widget::{image, Container, Image, Text},
    ContentFit, Element, Length,
};

/// Full-width post image, [`sizing::POST_IMAGE_HEIGHT`] tall.
pub fn cover<'a, Message: 'a>(source: &'a ImageSource) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::POST_IMAGE_HEIGHT);

    if let Some(path) = source.local_path() {
        return Image::new(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into();
    }

    Container::new(Text::new("No preview").size(typography::CAPTION))
        .width(Length::Fill)
        .height(height)
        .center_x(Length::Fill)
        .center_y(height)
        .style(styles::container::image_placeholder)
        .into()
}

/// Square avatar of `size`, round placeholder when the image is unavailable.
pub fn avatar<'a, Message: 'a>(source: &'a ImageSource, size: f32) -> Element<'a, Message> {
    if let Some(path) = source.local_path() {
        return Image::new(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into();
    }

    Container::new(Text::new(""))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(styles::container::avatar)
        .into()
}
