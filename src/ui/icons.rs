// SPDX-License-Identifier: MPL-2.0
//! Vector glyphs drawn on a canvas.
//!
//! Each glyph is described on a 24×24 grid and scaled to the requested size,
//! so the same outline works for the 14px toggle icon and the 28px menu
//! affordance. Drawing on a canvas (instead of shipping raster icons) lets the
//! toggle and the plus affordance rotate and squash their glyph every frame.

use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::f32::consts::{PI, TAU};

/// Side of the grid glyphs are described on.
const GRID: f32 = 24.0;

/// Outline width on the 24px grid.
const STROKE_WIDTH: f32 = 1.8;

/// Symbolic glyph names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sunny,
    Moon,
    Add,
    ChevronForward,
    ChatBubble,
    Search,
    Heart,
    Person,
    Settings,
    Notifications,
    Bookmark,
    Camera,
    Mail,
    Calendar,
}

impl Glyph {
    /// Draws the glyph on a frame already transformed to the 24px grid.
    fn draw(self, frame: &mut Frame, color: Color, stroke_width: f32) {
        let stroke = Stroke::default()
            .with_width(stroke_width)
            .with_color(color)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round);

        match self {
            Glyph::Sunny => {
                frame.fill(&Path::circle(Point::new(12.0, 12.0), 4.5), color);
                frame.stroke(&rays(Point::new(12.0, 12.0), 7.0, 10.0, 8), stroke);
            }
            Glyph::Moon => {
                frame.fill(&crescent(), color);
            }
            Glyph::Add => {
                frame.stroke(
                    &Path::new(|b| {
                        b.move_to(Point::new(12.0, 5.0));
                        b.line_to(Point::new(12.0, 19.0));
                        b.move_to(Point::new(5.0, 12.0));
                        b.line_to(Point::new(19.0, 12.0));
                    }),
                    stroke,
                );
            }
            Glyph::ChevronForward => {
                frame.stroke(
                    &Path::new(|b| {
                        b.move_to(Point::new(9.0, 6.0));
                        b.line_to(Point::new(15.0, 12.0));
                        b.line_to(Point::new(9.0, 18.0));
                    }),
                    stroke,
                );
            }
            Glyph::ChatBubble => {
                frame.stroke(
                    &Path::new(|b| {
                        b.rounded_rectangle(
                            Point::new(3.0, 4.0),
                            Size::new(18.0, 13.0),
                            4.0_f32.into(),
                        );
                        b.move_to(Point::new(7.5, 17.0));
                        b.line_to(Point::new(7.0, 21.0));
                        b.line_to(Point::new(11.5, 17.0));
                    }),
                    stroke,
                );
            }
            Glyph::Search => {
                frame.stroke(&Path::circle(Point::new(10.5, 10.5), 6.5), stroke);
                frame.stroke(
                    &Path::line(Point::new(15.5, 15.5), Point::new(20.0, 20.0)),
                    stroke,
                );
            }
            Glyph::Heart => {
                frame.stroke(
                    &Path::new(|b| {
                        b.move_to(Point::new(12.0, 20.0));
                        b.bezier_curve_to(
                            Point::new(4.0, 14.0),
                            Point::new(2.0, 9.0),
                            Point::new(5.5, 6.0),
                        );
                        b.bezier_curve_to(
                            Point::new(8.5, 3.5),
                            Point::new(11.0, 5.0),
                            Point::new(12.0, 7.5),
                        );
                        b.bezier_curve_to(
                            Point::new(13.0, 5.0),
                            Point::new(15.5, 3.5),
                            Point::new(18.5, 6.0),
                        );
                        b.bezier_curve_to(
                            Point::new(22.0, 9.0),
                            Point::new(20.0, 14.0),
                            Point::new(12.0, 20.0),
                        );
                        b.close();
                    }),
                    stroke,
                );
            }
            Glyph::Person => {
                frame.stroke(&Path::circle(Point::new(12.0, 8.0), 4.0), stroke);
                frame.stroke(
                    &Path::new(|b| {
                        b.move_to(Point::new(4.5, 20.5));
                        b.bezier_curve_to(
                            Point::new(5.0, 15.0),
                            Point::new(9.0, 13.5),
                            Point::new(12.0, 13.5),
                        );
                        b.bezier_curve_to(
                            Point::new(15.0, 13.5),
                            Point::new(19.0, 15.0),
                            Point::new(19.5, 20.5),
                        );
                    }),
                    stroke,
                );
            }
            Glyph::Settings => {
                frame.stroke(&Path::circle(Point::new(12.0, 12.0), 3.0), stroke);
                frame.stroke(&Path::circle(Point::new(12.0, 12.0), 6.5), stroke);
                frame.stroke(&rays(Point::new(12.0, 12.0), 6.5, 9.5, 8), stroke);
            }
            Glyph::Notifications => {
                frame.stroke(
                    &Path::new(|b| {
                        b.move_to(Point::new(4.5, 17.0));
                        b.line_to(Point::new(19.5, 17.0));
                        b.move_to(Point::new(6.5, 17.0));
                        b.line_to(Point::new(6.5, 11.0));
                        b.bezier_curve_to(
                            Point::new(6.5, 7.5),
                            Point::new(9.0, 5.0),
                            Point::new(12.0, 5.0),
                        );
                        b.bezier_curve_to(
                            Point::new(15.0, 5.0),
                            Point::new(17.5, 7.5),
                            Point::new(17.5, 11.0),
                        );
                        b.line_to(Point::new(17.5, 17.0));
                        b.move_to(Point::new(10.0, 20.0));
                        b.line_to(Point::new(14.0, 20.0));
                    }),
                    stroke,
                );
            }
            Glyph::Bookmark => {
                frame.stroke(
                    &Path::new(|b| {
                        b.move_to(Point::new(6.0, 4.0));
                        b.line_to(Point::new(18.0, 4.0));
                        b.line_to(Point::new(18.0, 21.0));
                        b.line_to(Point::new(12.0, 16.5));
                        b.line_to(Point::new(6.0, 21.0));
                        b.close();
                    }),
                    stroke,
                );
            }
            Glyph::Camera => {
                frame.stroke(
                    &Path::new(|b| {
                        b.rounded_rectangle(
                            Point::new(3.0, 7.0),
                            Size::new(18.0, 13.0),
                            3.0_f32.into(),
                        );
                        b.move_to(Point::new(8.5, 7.0));
                        b.line_to(Point::new(10.0, 4.5));
                        b.line_to(Point::new(14.0, 4.5));
                        b.line_to(Point::new(15.5, 7.0));
                    }),
                    stroke,
                );
                frame.stroke(&Path::circle(Point::new(12.0, 13.5), 3.5), stroke);
            }
            Glyph::Mail => {
                frame.stroke(
                    &Path::new(|b| {
                        b.rounded_rectangle(
                            Point::new(3.0, 5.5),
                            Size::new(18.0, 13.0),
                            2.0_f32.into(),
                        );
                        b.move_to(Point::new(3.5, 7.0));
                        b.line_to(Point::new(12.0, 13.0));
                        b.line_to(Point::new(20.5, 7.0));
                    }),
                    stroke,
                );
            }
            Glyph::Calendar => {
                frame.stroke(
                    &Path::new(|b| {
                        b.rounded_rectangle(
                            Point::new(3.5, 5.0),
                            Size::new(17.0, 16.0),
                            2.0_f32.into(),
                        );
                        b.move_to(Point::new(3.5, 10.0));
                        b.line_to(Point::new(20.5, 10.0));
                        b.move_to(Point::new(8.0, 3.0));
                        b.line_to(Point::new(8.0, 7.0));
                        b.move_to(Point::new(16.0, 3.0));
                        b.line_to(Point::new(16.0, 7.0));
                    }),
                    stroke,
                );
            }
        }
    }
}

/// Evenly spaced radial strokes around `center`.
fn rays(center: Point, inner: f32, outer: f32, count: u16) -> Path {
    Path::new(|b| {
        for i in 0..count {
            let angle = TAU * f32::from(i) / f32::from(count);
            let (sin, cos) = angle.sin_cos();
            b.move_to(Point::new(center.x + inner * cos, center.y + inner * sin));
            b.line_to(Point::new(center.x + outer * cos, center.y + outer * sin));
        }
    })
}

/// Appends an arc approximated by line segments.
fn arc_segments(b: &mut path::Builder, center: Point, radius: f32, start: f32, end: f32) {
    let segments = 24;
    #[allow(clippy::cast_precision_loss)]
    // segments=24, i∈[1,24] - well within f32 precision
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let angle = start + (end - start) * t;
        b.line_to(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
}

/// Crescent moon: a disc of radius 8 with an offset disc of radius 7 cut out.
fn crescent() -> Path {
    let outer = Point::new(12.0, 12.0);
    let inner = Point::new(16.0, 8.0);

    // Intersections of the two circles, as angles around each center.
    let outer_start: f32 = 0.239;
    let outer_end: f32 = 4.473;
    let inner_start: f32 = 3.710;
    let inner_end: f32 = 1.002;

    Path::new(|b| {
        b.move_to(Point::new(
            outer.x + 8.0 * outer_start.cos(),
            outer.y + 8.0 * outer_start.sin(),
        ));
        arc_segments(b, outer, 8.0, outer_start, outer_end);
        arc_segments(b, inner, 7.0, inner_start, inner_end);
        b.close();
    })
}

/// Canvas program drawing one glyph, optionally rotated and scaled around its
/// center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphCanvas {
    glyph: Glyph,
    color: Color,
    size: f32,
    rotation_degrees: f32,
    scale: f32,
}

impl GlyphCanvas {
    #[must_use]
    pub fn new(glyph: Glyph, color: Color, size: f32) -> Self {
        Self {
            glyph,
            color,
            size,
            rotation_degrees: 0.0,
            scale: 1.0,
        }
    }

    #[must_use]
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Creates a Canvas widget from this glyph.
    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Draws the glyph centered at `center` on an existing frame.
    pub fn draw_at(&self, frame: &mut Frame, center: Point) {
        let factor = self.scale * self.size / GRID;
        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(self.rotation_degrees * PI / 180.0);
            frame.scale(factor);
            frame.translate(Vector::new(-GRID / 2.0, -GRID / 2.0));
            self.glyph.draw(frame, self.color, STROKE_WIDTH * factor);
        });
    }
}

impl<Message> canvas::Program<Message> for GlyphCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        self.draw_at(&mut frame, center);
        vec![frame.into_geometry()]
    }
}

/// Plain glyph widget without transforms.
pub fn glyph<'a, Message: 'static>(glyph: Glyph, color: Color, size: f32) -> Element<'a, Message> {
    GlyphCanvas::new(glyph, color, size).into_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_circle(center: Point, radius: f32, angle: f32) -> Point {
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    #[test]
    fn crescent_arcs_meet_at_circle_intersections() {
        let outer = Point::new(12.0, 12.0);
        let inner = Point::new(16.0, 8.0);

        let a = on_circle(outer, 8.0, 4.473);
        let b = on_circle(inner, 7.0, 3.710);
        assert!(a.distance(b) < 0.05, "{a:?} vs {b:?}");

        let c = on_circle(inner, 7.0, 1.002);
        let d = on_circle(outer, 8.0, 0.239);
        assert!(c.distance(d) < 0.05, "{c:?} vs {d:?}");
    }

    #[test]
    fn builder_methods_are_chainable() {
        let canvas = GlyphCanvas::new(Glyph::Add, Color::WHITE, 20.0)
            .rotation(45.0)
            .scale(0.8);
        assert_eq!(canvas.rotation_degrees, 45.0);
        assert_eq!(canvas.scale, 0.8);
    }
}
