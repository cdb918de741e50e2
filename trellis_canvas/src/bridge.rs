// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscription lifecycle across collection rebinds.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_scene::{ShapeCollection, Subscription};
use trellis_watchdog::DebounceHandle;

/// A shared, observable shape collection.
///
/// The session owns the collection; the view only observes it through this
/// shared reference. Everything stays on one thread (the debounce worker
/// never touches the collection), so `Rc<RefCell<_>>` is the right amount
/// of machinery.
pub type SharedShapes = Rc<RefCell<ShapeCollection>>;

/// Keeps exactly one change subscription alive as the observed collection
/// instance is swapped.
///
/// On every [`rebind`](Self::rebind) the bridge unsubscribes from the old
/// instance *before* subscribing to the new one, which rules out both
/// duplicate handlers and notifications from a stale collection. The handler
/// it installs ignores the event payload: any mutation of the attached
/// collection restarts the debounce countdown.
///
/// Detaching does not cancel a countdown already in flight; it only stops
/// future restarts from that source. A countdown started by the last
/// mutation before a detach still fires.
#[derive(Debug)]
pub struct RebindBridge {
    debounce: DebounceHandle,
    attached: Option<(SharedShapes, Subscription)>,
}

impl RebindBridge {
    /// Creates a bridge that restarts countdowns through `debounce`.
    ///
    /// Nothing is attached yet; call [`rebind`](Self::rebind).
    #[must_use]
    pub fn new(debounce: DebounceHandle) -> Self {
        Self {
            debounce,
            attached: None,
        }
    }

    /// Returns the currently attached collection, if any.
    #[must_use]
    pub fn attached(&self) -> Option<&SharedShapes> {
        self.attached.as_ref().map(|(shapes, _)| shapes)
    }

    /// Returns `true` if a collection is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Replaces the observed collection.
    ///
    /// Unsubscribes from the previous collection (if any), then subscribes
    /// to `new` (if any). After this returns, mutating the old collection
    /// never restarts the countdown and mutating the new one always does.
    /// Rebinding the same instance is allowed and leaves exactly one
    /// handler installed.
    pub fn rebind(&mut self, new: Option<SharedShapes>) {
        if let Some((old, subscription)) = self.attached.take() {
            old.borrow_mut().unsubscribe(subscription);
        }
        if let Some(shapes) = new {
            let debounce = self.debounce.clone();
            let subscription = shapes.borrow_mut().subscribe(move |_| {
                debounce.start_or_restart();
            });
            self.attached = Some((shapes, subscription));
        }
    }

    /// Detaches the observed collection, if any.
    ///
    /// Equivalent to `rebind(None)`.
    pub fn detach(&mut self) {
        self.rebind(None);
    }
}
