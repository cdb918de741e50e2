// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable ordered shape collection.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::shape::Shape;

/// A change to a [`ShapeCollection`], delivered to subscribers.
///
/// Subscribers that only need "something changed" (for example a repaint
/// debouncer) can ignore the payload entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// A shape was appended or inserted at `index`.
    Added {
        /// Index of the new shape after insertion.
        index: usize,
    },
    /// The shape at `index` was removed.
    Removed {
        /// Index the shape occupied before removal.
        index: usize,
    },
    /// The collection was emptied wholesale.
    Reset,
}

/// Token identifying a subscriber, returned by [`ShapeCollection::subscribe`].
///
/// Tokens are unique for the lifetime of the collection and never reused,
/// so a stale token passed to [`ShapeCollection::unsubscribe`] is a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler = Box<dyn FnMut(&SceneEvent)>;

/// An ordered, mutable sequence of shapes with synchronous change events.
///
/// Insertion order is significant: iteration order equals insertion order,
/// and render consumers draw in that order. Every mutation (`push`,
/// `remove`, `clear`) notifies all current subscribers before returning, so
/// observers see changes in exactly the order they happened.
///
/// Handlers must not call back into the collection that invoked them; they
/// run while the mutating call is still on the stack.
///
/// # Example
///
/// ```rust
/// use core::cell::Cell;
/// use kurbo::Line;
/// use trellis_scene::{LineShape, ShapeCollection};
///
/// let changes = std::rc::Rc::new(Cell::new(0));
/// let seen = std::rc::Rc::clone(&changes);
///
/// let mut shapes = ShapeCollection::new();
/// shapes.subscribe(move |_| seen.set(seen.get() + 1));
///
/// shapes.push(LineShape::new(Line::new((0.0, 0.0), (1.0, 0.0))).into());
/// shapes.push(LineShape::new(Line::new((0.0, 1.0), (1.0, 1.0))).into());
/// shapes.clear();
///
/// assert_eq!(changes.get(), 3);
/// assert!(shapes.is_empty());
/// ```
#[derive(Default)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
    handlers: Vec<(u64, Handler)>,
    next_token: u64,
}

impl ShapeCollection {
    /// Creates an empty collection with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shapes: Vec::new(),
            handlers: Vec::new(),
            next_token: 0,
        }
    }

    /// Returns the number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the collection holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns the shape at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Returns the shapes in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterates the shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Appends a shape, then notifies subscribers with
    /// [`SceneEvent::Added`].
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
        let event = SceneEvent::Added {
            index: self.shapes.len() - 1,
        };
        self.notify(&event);
    }

    /// Removes and returns the shape at `index`, then notifies subscribers
    /// with [`SceneEvent::Removed`].
    ///
    /// Out-of-range indices return `None` and emit no event.
    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let shape = self.shapes.remove(index);
        self.notify(&SceneEvent::Removed { index });
        Some(shape)
    }

    /// Empties the collection, then notifies subscribers with
    /// [`SceneEvent::Reset`].
    ///
    /// The event is emitted even if the collection was already empty,
    /// mirroring bulk-reset semantics: observers learn that "whatever you
    /// knew about the contents, forget it".
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.notify(&SceneEvent::Reset);
    }

    /// Registers a change handler and returns its [`Subscription`] token.
    ///
    /// Handlers are invoked in subscription order, synchronously, for every
    /// subsequent mutation until unsubscribed.
    pub fn subscribe<F>(&mut self, handler: F) -> Subscription
    where
        F: FnMut(&SceneEvent) + 'static,
    {
        let token = self.next_token;
        self.next_token += 1;
        self.handlers.push((token, Box::new(handler)));
        Subscription(token)
    }

    /// Removes the handler registered under `subscription`.
    ///
    /// Returns `true` if a handler was removed. Unsubscribing twice, or with
    /// a token from another collection, returns `false` and has no effect.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(token, _)| *token != subscription.0);
        self.handlers.len() != before
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    fn notify(&mut self, event: &SceneEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }
}

impl fmt::Debug for ShapeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeCollection")
            .field("shapes", &self.shapes)
            .field("subscriber_count", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::LineShape;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use kurbo::Line;

    fn line(y: f64) -> Shape {
        LineShape::new(Line::new((0.0, y), (10.0, y))).into()
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut shapes = ShapeCollection::new();
        shapes.push(line(0.0));
        shapes.push(line(1.0));
        shapes.push(line(2.0));

        let ys: Vec<f64> = shapes
            .iter()
            .map(|shape| {
                let Shape::Line(segment) = shape;
                segment.line.p0.y
            })
            .collect();
        assert_eq!(ys, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn events_are_delivered_synchronously_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);

        let mut shapes = ShapeCollection::new();
        shapes.subscribe(move |event| sink.borrow_mut().push(*event));

        shapes.push(line(0.0));
        // The handler has already run by the time push returns.
        assert_eq!(log.borrow().as_slice(), &[SceneEvent::Added { index: 0 }]);

        shapes.push(line(1.0));
        shapes.remove(0);
        shapes.clear();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                SceneEvent::Added { index: 0 },
                SceneEvent::Added { index: 1 },
                SceneEvent::Removed { index: 0 },
                SceneEvent::Reset,
            ]
        );
    }

    #[test]
    fn remove_out_of_range_emits_nothing() {
        let fired = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&fired);

        let mut shapes = ShapeCollection::new();
        shapes.subscribe(move |_| *sink.borrow_mut() += 1);

        assert_eq!(shapes.remove(0), None);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn clear_on_empty_collection_still_resets() {
        let fired = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&fired);

        let mut shapes = ShapeCollection::new();
        shapes.subscribe(move |_| *sink.borrow_mut() += 1);

        shapes.clear();
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn unsubscribe_is_paired_and_idempotent() {
        let fired = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&fired);

        let mut shapes = ShapeCollection::new();
        let sub = shapes.subscribe(move |_| *sink.borrow_mut() += 1);
        assert_eq!(shapes.subscriber_count(), 1);

        shapes.push(line(0.0));
        assert_eq!(*fired.borrow(), 1);

        assert!(shapes.unsubscribe(sub));
        assert!(!shapes.unsubscribe(sub));
        assert_eq!(shapes.subscriber_count(), 0);

        shapes.push(line(1.0));
        assert_eq!(*fired.borrow(), 1, "handler fired after unsubscribe");
    }

    #[test]
    fn tokens_are_never_reused() {
        let mut shapes = ShapeCollection::new();
        let first = shapes.subscribe(|_| {});
        assert!(shapes.unsubscribe(first));

        let second = shapes.subscribe(|_| {});
        assert_ne!(first, second);
        // The stale token no longer matches anything.
        assert!(!shapes.unsubscribe(first));
        assert!(shapes.unsubscribe(second));
    }

    #[test]
    fn multiple_subscribers_all_fire() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut shapes = ShapeCollection::new();
        for name in ["a", "b"] {
            let sink = Rc::clone(&fired);
            shapes.subscribe(move |_| sink.borrow_mut().push(name));
        }

        shapes.push(line(0.0));
        assert_eq!(fired.borrow().as_slice(), &["a", "b"]);
    }
}
