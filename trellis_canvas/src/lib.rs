// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Canvas: debounced repaint wiring for the sketch surface.
//!
//! This crate ties the workspace together on the view side. The data flow it
//! implements is:
//!
//! ```text
//! RoseGenerator::draw_next
//!     -> mutates ShapeCollection
//!     -> SceneEvent (synchronous)
//!     -> RebindBridge handler
//!     -> DebounceHandle::start_or_restart
//!     -> (quiet period elapses)
//!     -> RefreshSink::invalidate
//! ```
//!
//! A burst of mutations — one `draw` call appends 120 segments, each with its
//! own change event — therefore collapses into a single repaint request,
//! issued one debounce interval after the burst settles.
//!
//! The pieces:
//!
//! - [`RefreshSink`]: the repaint request receiver. Implemented by whatever
//!   owns the real surface; closures work too.
//! - [`RebindBridge`]: keeps exactly one change subscription alive as the
//!   observed [`ShapeCollection`] instance is swapped. Unsubscribes the old
//!   instance before subscribing the new one, so a stale collection can
//!   never restart the countdown.
//! - [`SketchView`]: owns the debounce timer and the bridge; its
//!   [`set_shapes`](SketchView::set_shapes) is the property-changed hook a
//!   host calls when its bindable shapes reference is reassigned.
//! - [`SketchSession`]: the command side — owns the collection and a
//!   [`RoseGenerator`], exposing parameterless [`draw`](SketchSession::draw)
//!   and [`clear`](SketchSession::clear) actions.
//! - [`StrokeCanvas`] and [`paint`]: the render consumption contract —
//!   background fill, then every shape in insertion order at a fixed stroke
//!   width.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//! use trellis_canvas::{SketchSession, SketchView};
//!
//! let repaints = Arc::new(AtomicUsize::new(0));
//! let sink = Arc::clone(&repaints);
//!
//! let mut view = SketchView::with_interval(Duration::from_millis(20), move || {
//!     sink.fetch_add(1, Ordering::SeqCst);
//! });
//! let mut session = SketchSession::new();
//! view.set_shapes(Some(session.shapes()));
//!
//! // 120 synchronous mutations, one eventual repaint.
//! session.draw();
//! std::thread::sleep(Duration::from_millis(200));
//! assert_eq!(repaints.load(Ordering::SeqCst), 1);
//! ```

mod bridge;
mod paint;
mod view;

pub use bridge::{RebindBridge, SharedShapes};
pub use paint::{BACKGROUND, STROKE_WIDTH, StrokeCanvas, paint};
pub use view::{REFRESH_INTERVAL, RefreshSink, SketchSession, SketchView};
