// SPDX-License-Identifier: MPL-2.0
//! "Comments" heading followed by the comment rows, in input order.

use crate::domain::feed::Comment;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::feed::comment_item;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Padding above and below the list inside the panel.
pub const PANEL_PADDING: f32 = spacing::SM;

/// Heading row, including the gap under it.
pub const HEADING_HEIGHT: f32 = 32.0;

/// Trailing "more" button row.
pub const MORE_ROW_HEIGHT: f32 = sizing::ICON_MD;

/// Renders the list. An empty slice renders the heading only.
pub fn view<'a, Message: Clone + 'a>(comments: &'a [Comment]) -> Element<'a, Message> {
    let heading = Row::new()
        .align_y(Vertical::Top)
        .height(Length::Fixed(HEADING_HEIGHT))
        .push(
            Text::new("Comments")
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }),
        );

    let more = button(Text::new("…").size(sizing::ICON_MD))
        .padding(0)
        .height(Length::Fixed(MORE_ROW_HEIGHT))
        .style(styles::button::inert(palette::WHITE));

    let column = comments
        .iter()
        .fold(Column::new().push(heading), |column, comment| {
            column.push(comment_item::view(comment))
        })
        .push(more)
        .width(Length::Fill);

    Container::new(column)
        .width(Length::Fill)
        .padding([PANEL_PADDING, PANEL_PADDING])
        .into()
}
