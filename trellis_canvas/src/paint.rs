// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render consumption contract for the sketch surface.

use kurbo::Line;
use peniko::Color;
use peniko::color::palette;

use trellis_scene::{Shape, ShapeCollection};

/// Stroke width used for every segment.
pub const STROKE_WIDTH: f64 = 2.0;

/// Background fill painted beneath all segments.
pub const BACKGROUND: Color = palette::css::PALE_GREEN;

/// Minimal drawing surface the sketch paints onto.
///
/// Backends map these calls onto their own stroke/fill machinery; the
/// contract deliberately stays at the "background plus colored line
/// strokes" level the sketch needs and nothing more.
pub trait StrokeCanvas {
    /// Fills the whole surface with `color`.
    fn fill_background(&mut self, color: Color);

    /// Strokes a line segment with the given color and width.
    fn stroke_line(&mut self, line: Line, color: Color, width: f64);
}

/// Paints a collection onto a canvas.
///
/// The background is filled first, then every shape is stroked in insertion
/// order with [`STROKE_WIDTH`] and its own color. The match on the shape
/// kind is exhaustive; adding a variant to [`Shape`] forces backends under
/// this contract to handle it.
pub fn paint(shapes: &ShapeCollection, canvas: &mut dyn StrokeCanvas) {
    canvas.fill_background(BACKGROUND);
    for shape in shapes.iter() {
        match shape {
            Shape::Line(segment) => canvas.stroke_line(segment.line, segment.color, STROKE_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_scene::LineShape;

    #[derive(Debug, PartialEq)]
    enum Op {
        Background(Color),
        Stroke { y: f64, color: Color, width: f64 },
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl StrokeCanvas for Recorder {
        fn fill_background(&mut self, color: Color) {
            self.0.push(Op::Background(color));
        }

        fn stroke_line(&mut self, line: Line, color: Color, width: f64) {
            self.0.push(Op::Stroke {
                y: line.p0.y,
                color,
                width,
            });
        }
    }

    #[test]
    fn background_first_then_segments_in_insertion_order() {
        let red = Color::from_rgb8(255, 0, 0);
        let blue = Color::from_rgb8(0, 0, 255);

        let mut shapes = ShapeCollection::new();
        shapes.push(LineShape::new(Line::new((0.0, 1.0), (9.0, 1.0))).with_color(red).into());
        shapes.push(LineShape::new(Line::new((0.0, 2.0), (9.0, 2.0))).with_color(blue).into());

        let mut canvas = Recorder::default();
        paint(&shapes, &mut canvas);

        assert_eq!(
            canvas.0,
            vec![
                Op::Background(BACKGROUND),
                Op::Stroke {
                    y: 1.0,
                    color: red,
                    width: STROKE_WIDTH
                },
                Op::Stroke {
                    y: 2.0,
                    color: blue,
                    width: STROKE_WIDTH
                },
            ]
        );
    }

    #[test]
    fn empty_collection_still_fills_the_background() {
        let shapes = ShapeCollection::new();
        let mut canvas = Recorder::default();
        paint(&shapes, &mut canvas);
        assert_eq!(canvas.0, vec![Op::Background(BACKGROUND)]);
    }
}
