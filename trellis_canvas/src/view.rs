// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View and session: the two owners in the drawing flow.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use trellis_rose::RoseGenerator;
use trellis_scene::ShapeCollection;
use trellis_watchdog::{DebounceHandle, RefreshDebouncer};

use crate::bridge::{RebindBridge, SharedShapes};
use crate::paint::{StrokeCanvas, paint};

/// Debounce interval between the last observed change and the repaint
/// request.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Receiver of debounced repaint requests.
///
/// [`invalidate`](Self::invalidate) is called at most once per settled burst
/// of collection changes, from the debounce worker thread. Closures
/// implement this automatically.
pub trait RefreshSink: Send {
    /// Requests a repaint of the surface.
    fn invalidate(&mut self);
}

impl<F: FnMut() + Send> RefreshSink for F {
    fn invalidate(&mut self) {
        self();
    }
}

/// The observing side of the sketch: debounce timer plus rebind bridge.
///
/// `SketchView` plays the role of the drawing surface's view object. It does
/// not own the shape collection — a [`SketchSession`] does — it only holds a
/// bindable reference to one. Reassigning that reference through
/// [`set_shapes`](Self::set_shapes) rebinds the change subscription, and
/// every change to the attached collection restarts the debounce countdown;
/// when a countdown survives [`REFRESH_INTERVAL`] undisturbed, the sink's
/// `invalidate` runs once.
///
/// # Example
///
/// ```rust
/// use trellis_canvas::{SketchSession, SketchView};
///
/// let mut view = SketchView::new(|| { /* request repaint */ });
/// let session = SketchSession::new();
/// view.set_shapes(Some(session.shapes()));
/// assert!(view.shapes().is_some());
/// ```
#[derive(Debug)]
pub struct SketchView {
    debouncer: RefreshDebouncer,
    bridge: RebindBridge,
}

impl SketchView {
    /// Creates a view firing into `sink`, debounced by [`REFRESH_INTERVAL`].
    #[must_use]
    pub fn new(sink: impl RefreshSink + 'static) -> Self {
        Self::with_interval(REFRESH_INTERVAL, sink)
    }

    /// Creates a view with a custom debounce interval.
    #[must_use]
    pub fn with_interval(interval: Duration, mut sink: impl RefreshSink + 'static) -> Self {
        let debouncer = RefreshDebouncer::spawn(interval, move || sink.invalidate());
        let bridge = RebindBridge::new(debouncer.handle());
        Self { debouncer, bridge }
    }

    /// Reassigns the bindable shapes reference.
    ///
    /// This is the property-changed hook: the old collection (if any) is
    /// unsubscribed before the new one (if any) is subscribed. A countdown
    /// already in flight is not cancelled.
    pub fn set_shapes(&mut self, shapes: Option<SharedShapes>) {
        self.bridge.rebind(shapes);
    }

    /// Returns the currently attached collection, if any.
    #[must_use]
    pub fn shapes(&self) -> Option<SharedShapes> {
        self.bridge.attached().map(Rc::clone)
    }

    /// Returns a handle to the debounce timer.
    ///
    /// Useful for hosts that have other "something changed" sources to fold
    /// into the same repaint countdown.
    #[must_use]
    pub fn debounce(&self) -> DebounceHandle {
        self.debouncer.handle()
    }

    /// Paints the attached collection onto `canvas`.
    ///
    /// The background is always filled, even with no collection attached.
    pub fn paint(&self, canvas: &mut dyn StrokeCanvas) {
        match self.bridge.attached() {
            Some(shapes) => paint(&shapes.borrow(), canvas),
            None => paint(&ShapeCollection::new(), canvas),
        }
    }
}

/// The command side of the sketch: owns the collection and the generator.
///
/// `draw` and `clear` are the two externally triggered actions, both
/// parameterless. `draw` appends the next slice of the rose curve; `clear`
/// empties the collection without rewinding the reveal cycle.
#[derive(Debug, Default)]
pub struct SketchSession {
    shapes: SharedShapes,
    rose: RoseGenerator,
}

impl SketchSession {
    /// Creates a session with an empty collection, at step 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shapes: Rc::new(RefCell::new(ShapeCollection::new())),
            rose: RoseGenerator::new(),
        }
    }

    /// Returns the shared collection, for binding to a [`SketchView`].
    #[must_use]
    pub fn shapes(&self) -> SharedShapes {
        Rc::clone(&self.shapes)
    }

    /// Returns the generator.
    #[must_use]
    pub fn generator(&self) -> &RoseGenerator {
        &self.rose
    }

    /// Appends the next batch of rose-curve segments.
    pub fn draw(&mut self) {
        self.rose.draw_next(&mut self.shapes.borrow_mut());
    }

    /// Empties the collection.
    ///
    /// The generator's step counter is untouched; the next [`draw`](Self::draw)
    /// continues the cycle where it left off.
    pub fn clear(&mut self) {
        self.shapes.borrow_mut().clear();
    }
}
