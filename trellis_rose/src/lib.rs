// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Rose: incremental rose-curve segment generation.
//!
//! [`RoseGenerator`] reveals a rose curve (r = cos 6θ) a slice at a time.
//! Each call to [`draw_next`](RoseGenerator::draw_next) appends one step's
//! worth of line segments — with a deterministic gradient color per segment —
//! to a [`ShapeCollection`], then advances a free-running step counter modulo
//! the configured step count. After a full cycle of calls the collection has
//! gained exactly one complete curve; further calls layer the same segments
//! again, so the collection grows without bound unless the owner clears it.
//!
//! The step boundaries come from floor division
//! (`step * segments / steps`), which partitions the segment indices into
//! contiguous, collectively exhaustive ranges whose sizes differ by at most
//! one. Geometry and colors are pure functions of the segment index and the
//! configuration, so replaying the same steps always reproduces the same
//! shapes bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use trellis_rose::{RoseConfig, RoseGenerator};
//! use trellis_scene::ShapeCollection;
//!
//! let mut shapes = ShapeCollection::new();
//! let mut rose = RoseGenerator::new();
//!
//! // Default configuration: 360 segments revealed over 3 steps.
//! rose.draw_next(&mut shapes);
//! assert_eq!(shapes.len(), 120);
//!
//! rose.draw_next(&mut shapes);
//! rose.draw_next(&mut shapes);
//! assert_eq!(shapes.len(), 360);
//!
//! // The cycle wraps: a fourth call re-adds the first slice.
//! rose.draw_next(&mut shapes);
//! assert_eq!(shapes.len(), 480);
//! ```
//!
//! Clearing the collection is the owner's business and does not touch the
//! step counter; use [`RoseGenerator::reset`] to restart the cycle
//! explicitly.
//!
//! This crate is `no_std`; enable the `libm` feature (instead of the default
//! `std`) for the trig on targets without a float runtime.

#![no_std]

use core::f64::consts::TAU;
use core::ops::Range;

use kurbo::{Line, Point, Vec2};
use peniko::Color;
use trellis_scene::{LineShape, ShapeCollection};

/// Angular frequency of the petal modulation, fixed at 6 (r = cos 6θ).
const PETAL_FREQUENCY: f64 = 6.0;

/// Fixed configuration for a [`RoseGenerator`].
///
/// The defaults ([`RoseConfig::DEFAULT`]) are what the drawing surface uses:
/// a 300×300 canvas, radius 150, and 360 segments revealed over 3 steps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoseConfig {
    /// Number of calls needed to reveal the full curve. Must be nonzero.
    pub steps: u32,
    /// Total number of line segments in the full curve. Must be nonzero.
    pub segments: u32,
    /// Side length of the square canvas; the curve is centered on it.
    pub extent: f64,
    /// Maximum petal radius.
    pub radius: f64,
}

impl RoseConfig {
    /// The configuration used by the drawing surface.
    pub const DEFAULT: Self = Self {
        steps: 3,
        segments: 360,
        extent: 300.0,
        radius: 150.0,
    };

    /// Center of the canvas.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.extent / 2.0, self.extent / 2.0)
    }
}

impl Default for RoseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns the segment indices revealed by the given step.
///
/// Floor division partitions `[0, segments)` into `steps` contiguous ranges
/// with no gaps or overlaps; range sizes differ by at most one. `step` is
/// taken modulo `config.steps`.
///
/// # Example
///
/// ```rust
/// use trellis_rose::{RoseConfig, step_range};
///
/// let config = RoseConfig::DEFAULT;
/// assert_eq!(step_range(0, &config), 0..120);
/// assert_eq!(step_range(1, &config), 120..240);
/// assert_eq!(step_range(2, &config), 240..360);
/// ```
#[must_use]
pub fn step_range(step: u32, config: &RoseConfig) -> Range<u32> {
    let steps = u64::from(config.steps);
    let segments = u64::from(config.segments);
    let step = u64::from(step % config.steps);
    #[expect(clippy::cast_possible_truncation, reason = "quotient <= segments")]
    let start = (step * segments / steps) as u32;
    #[expect(clippy::cast_possible_truncation, reason = "quotient <= segments")]
    let end = ((step + 1) * segments / steps) as u32;
    start..end
}

/// Incrementally appends rose-curve segments to a [`ShapeCollection`].
///
/// The generator's only state is the current step, advanced by one (modulo
/// [`RoseConfig::steps`]) on every [`draw_next`](Self::draw_next). There is
/// no terminal state; the cycle runs for the generator's lifetime.
#[derive(Clone, Debug)]
pub struct RoseGenerator {
    config: RoseConfig,
    step: u32,
}

impl RoseGenerator {
    /// Creates a generator with [`RoseConfig::DEFAULT`], at step 0.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(RoseConfig::DEFAULT)
    }

    /// Creates a generator with the given configuration, at step 0.
    #[must_use]
    pub const fn with_config(config: RoseConfig) -> Self {
        Self { config, step: 0 }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RoseConfig {
        &self.config
    }

    /// Returns the step the next [`draw_next`](Self::draw_next) will reveal.
    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Rewinds the cycle to step 0.
    ///
    /// Clearing the collection does not do this implicitly; restarting the
    /// reveal is a deliberate, separate operation.
    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Appends the current step's segments to `shapes`, then advances.
    ///
    /// Segments are appended in ascending index order, each carrying its
    /// gradient color. The collection's own change notifications fire once
    /// per appended segment.
    pub fn draw_next(&mut self, shapes: &mut ShapeCollection) {
        for index in step_range(self.step, &self.config) {
            shapes.push(self.segment(index).into());
        }
        self.step = (self.step + 1) % self.config.steps;
    }

    /// Computes the line segment for a single index.
    ///
    /// Pure: depends only on `index` and the configuration.
    #[must_use]
    pub fn segment(&self, index: u32) -> LineShape {
        let segments = f64::from(self.config.segments);
        let angle1 = TAU * f64::from(index) / segments;
        let angle2 = TAU * f64::from(index + 1) / segments;
        let line = Line::new(
            petal_point(angle1, &self.config),
            petal_point(angle2, &self.config),
        );
        LineShape::new(line).with_color(gradient_color(index, self.config.segments))
    }
}

impl Default for RoseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Point on the rose curve at angle `theta`.
///
/// The radial scale is `radius * cos(6θ)`; negative scales fold the point
/// through the center, which is what produces the petal lobes.
fn petal_point(theta: f64, config: &RoseConfig) -> Point {
    let scale = config.radius * Vec2::from_angle(PETAL_FREQUENCY * theta).x;
    config.center() + scale * Vec2::from_angle(theta)
}

/// Gradient color for segment `index` of `segments`.
///
/// With `t = index / segments`: red fades 255 → 0, green rises 0 → 255, and
/// blue runs a full cosine period. Channels are truncated toward zero;
/// Rust's float-to-int casts also saturate, which provides the clamp.
#[expect(clippy::cast_possible_truncation, reason = "channels lie in 0..=255")]
fn gradient_color(index: u32, segments: u32) -> Color {
    let t = f64::from(index) / f64::from(segments);
    let red = (255.0 * (1.0 - t)) as u8;
    let green = (255.0 * t) as u8;
    let blue = (255.0 * (0.5 + 0.5 * Vec2::from_angle(TAU * t).x)) as u8;
    Color::from_rgb8(red, green, blue)
}
