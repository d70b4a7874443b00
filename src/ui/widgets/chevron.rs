// SPDX-License-Identifier: MPL-2.0
//! Rotating chevron drawn on a Canvas, used as the comments toggle indicator.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Radians, Rectangle, Renderer, Theme, Vector};

/// Chevron that points down at rotation 0 and up at rotation π.
pub struct Chevron {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl Chevron {
    /// Creates a chevron with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::CHEVRON,
        }
    }

    /// Creates a Canvas widget from this chevron.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Chevron {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let half = frame.width().min(frame.height()) / 2.0 - 3.0;

                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(Radians(self.rotation));

                // "v" around the origin; a half turn makes it a "^".
                let chevron = Path::new(|builder| {
                    builder.move_to(Point::new(-half, -half / 2.0));
                    builder.line_to(Point::new(0.0, half / 2.0));
                    builder.line_to(Point::new(half, -half / 2.0));
                });

                frame.stroke(
                    &chevron,
                    Stroke::default()
                        .with_width(2.5)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round)
                        .with_line_join(canvas::LineJoin::Round),
                );
            });

        vec![geometry]
    }
}
