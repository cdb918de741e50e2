// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic watchdog core: deadline plus generation counter.

use core::time::Duration;

/// A completed countdown.
///
/// Returned by [`Watchdog::poll`] when the current countdown's deadline has
/// passed without a restart superseding it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Generation of the countdown that ran to completion.
    ///
    /// This always equals [`Watchdog::generation`] at the moment of expiry;
    /// earlier generations were overwritten by the restart that created this
    /// countdown and can never complete.
    pub generation: u64,
}

/// A restartable single-shot countdown, advanced by explicit timestamps.
///
/// The watchdog holds at most one live countdown. [`start_or_restart`]
/// replaces any pending deadline with a fresh one, so only the most recent
/// countdown can ever expire. [`poll`] reports expiry at most once per
/// countdown and returns the watchdog to idle.
///
/// Timestamps are [`Duration`] offsets from an epoch the host chooses; the
/// only requirement is that successive calls use a non-decreasing clock.
///
/// # Example
///
/// ```rust
/// use core::time::Duration;
/// use trellis_watchdog::Watchdog;
///
/// let mut wd = Watchdog::new(Duration::from_millis(100));
/// assert!(!wd.is_pending());
///
/// wd.start_or_restart(Duration::from_millis(10));
/// assert!(wd.is_pending());
/// assert_eq!(wd.deadline(), Some(Duration::from_millis(110)));
///
/// let done = wd.poll(Duration::from_millis(110)).unwrap();
/// assert_eq!(done.generation, 1);
/// assert!(!wd.is_pending());
/// ```
///
/// [`start_or_restart`]: Self::start_or_restart
/// [`poll`]: Self::poll
#[derive(Clone, Debug)]
pub struct Watchdog {
    interval: Duration,
    deadline: Option<Duration>,
    generation: u64,
}

impl Watchdog {
    /// Creates an idle watchdog with the given countdown interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            generation: 0,
        }
    }

    /// Returns the countdown interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` if a countdown is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the deadline of the pending countdown, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns the current generation.
    ///
    /// The generation increments on every [`start_or_restart`]; it identifies
    /// the countdown a [`Completion`] belongs to.
    ///
    /// [`start_or_restart`]: Self::start_or_restart
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begins a countdown, cancelling any countdown already in flight.
    ///
    /// If no countdown is pending, one of length [`interval`](Self::interval)
    /// begins at `now`. If one is pending, its deadline is overwritten; the
    /// superseded countdown can no longer complete. Either way exactly one
    /// countdown is live when this returns.
    ///
    /// Returns the generation of the new countdown.
    pub fn start_or_restart(&mut self, now: Duration) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now + self.interval);
        self.generation
    }

    /// Reports expiry of the pending countdown, if its deadline has passed.
    ///
    /// Returns `Some` exactly once per countdown that is not superseded by a
    /// later restart: the first call with `now >= deadline` clears the
    /// deadline and yields a [`Completion`] tagged with the countdown's
    /// generation. All other calls return `None`.
    pub fn poll(&mut self, now: Duration) -> Option<Completion> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(Completion {
                    generation: self.generation,
                })
            }
            _ => None,
        }
    }
}
