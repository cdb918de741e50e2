// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Scene: observable shape collection and drawable shape model.
//!
//! This crate provides the data side of a small retained drawing surface:
//!
//! - [`Shape`]: a tagged enum of drawable primitives. Consumers match on the
//!   variant exhaustively; the only variant currently populated by the rest
//!   of the workspace is [`Shape::Line`].
//! - [`LineShape`]: a line segment with a stroke color (black by default).
//! - [`ShapeCollection`]: an ordered, mutable sequence of shapes with an
//!   explicit publish/subscribe contract. Every mutation notifies all
//!   current subscribers synchronously, before the mutating call returns,
//!   so a burst of N mutations is observed as N handler invocations in
//!   mutation order.
//!
//! The collection deliberately knows nothing about rendering or scheduling.
//! Downstream layers subscribe to [`SceneEvent`]s and decide what a change
//! means — typically "restart the repaint debounce countdown" — without
//! inspecting the payload.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Line;
//! use trellis_scene::{LineShape, SceneEvent, Shape, ShapeCollection};
//!
//! let mut shapes = ShapeCollection::new();
//! let sub = shapes.subscribe(|event| {
//!     // Delivered synchronously, inside the mutating call.
//!     assert_eq!(*event, SceneEvent::Added { index: 0 });
//! });
//!
//! shapes.push(Shape::Line(LineShape::new(Line::new((0.0, 0.0), (10.0, 10.0)))));
//! assert_eq!(shapes.len(), 1);
//!
//! assert!(shapes.unsubscribe(sub));
//! ```
//!
//! ## Reentrancy
//!
//! Handlers run while the collection is mid-mutation and must not call back
//! into the same collection. They are expected to poke external machinery
//! (timers, dirty flags) and return.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collection;
mod shape;

pub use collection::{SceneEvent, ShapeCollection, Subscription};
pub use shape::{LineShape, Shape};
