// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable shape primitives.

use kurbo::Line;
use peniko::Color;

/// A drawable primitive.
///
/// Shapes are a closed set so that render consumers can match exhaustively
/// on the kind. Only [`Shape::Line`] is produced by the generator in this
/// workspace; further variants are an additive change.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A straight line segment with a stroke color.
    Line(LineShape),
}

/// A line segment with a stroke color.
///
/// The color defaults to black, matching a plain pen stroke; use
/// [`with_color`](Self::with_color) to override it.
///
/// # Example
///
/// ```rust
/// use kurbo::Line;
/// use peniko::Color;
/// use trellis_scene::LineShape;
///
/// let plain = LineShape::new(Line::new((0.0, 0.0), (100.0, 0.0)));
/// assert_eq!(plain.color, Color::BLACK);
///
/// let red = plain.with_color(Color::from_rgb8(255, 0, 0));
/// assert_eq!(red.line, plain.line);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineShape {
    /// Segment endpoints.
    pub line: Line,
    /// Stroke color.
    pub color: Color,
}

impl LineShape {
    /// Creates a black line segment.
    #[must_use]
    pub const fn new(line: Line) -> Self {
        Self {
            line,
            color: Color::BLACK,
        }
    }

    /// Returns this segment with the given stroke color.
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Self {
            line: self.line,
            color,
        }
    }
}

impl From<LineShape> for Shape {
    fn from(line: LineShape) -> Self {
        Self::Line(line)
    }
}
