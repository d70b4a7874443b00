// SPDX-License-Identifier: MPL-2.0
//! One comment row: avatar, author, text, like count and an inert like button.

use crate::config::COMMENT_ROW_HEIGHT;
use crate::domain::feed::Comment;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::feed::images;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Vertical gap left under each row, part of [`COMMENT_ROW_HEIGHT`].
pub const ROW_MARGIN: f32 = spacing::LG;

/// Renders one comment. Always exactly [`COMMENT_ROW_HEIGHT`] tall.
pub fn view<'a, Message: Clone + 'a>(comment: &'a Comment) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    let body = Column::new()
        .width(Length::Fill)
        .push(
            Text::new(&comment.author)
                .size(typography::BODY)
                .font(bold),
        )
        .push(Text::new(&comment.text).size(typography::BODY));

    let like = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(Text::new(comment.like_count.to_string()).size(typography::CAPTION))
        .push(
            button(Text::new("♥").size(sizing::ICON_MD))
                .padding(0)
                .style(styles::button::inert(palette::WHITE)),
        );

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(images::avatar(&comment.author_image, sizing::COMMENT_AVATAR))
        .push(body)
        .push(Container::new(like).padding([0.0, spacing::MD]));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(COMMENT_ROW_HEIGHT))
        .clip(true)
        .padding(iced::Padding {
            bottom: ROW_MARGIN,
            ..iced::Padding::ZERO
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feed::LikeCount;

    #[test]
    fn row_margin_fits_inside_row_height() {
        assert!(ROW_MARGIN < COMMENT_ROW_HEIGHT);
        assert!(COMMENT_ROW_HEIGHT - ROW_MARGIN >= sizing::COMMENT_AVATAR);
    }

    #[test]
    fn long_comment_renders_as_a_single_row() {
        let comment = Comment::new(
            "Author1",
            "This comment keeps going ".repeat(40),
            "",
            LikeCount::new(7),
        );

        let _row: Element<'_, ()> = view(&comment);
    }
}
