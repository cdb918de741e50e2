// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Watchdog: restartable single-shot timer primitives for debounced
//! invalidation.
//!
//! A watchdog timer fires only if it is left undisturbed for its full
//! interval. Restarting it before expiry cancels the countdown in flight and
//! begins a fresh one, so a rapid burst of restarts collapses into a single
//! completion, delivered one interval after the burst settles. This is the
//! classic debounce shape: many upstream change events, one downstream
//! refresh.
//!
//! The crate is split into two layers:
//!
//! - [`Watchdog`]: a host-agnostic deterministic core. It holds the interval,
//!   the current deadline, and a generation counter, and is advanced by the
//!   caller passing explicit "now" timestamps to [`Watchdog::poll`]. No
//!   threads, no clocks; suitable for `no_std` hosts and for exact tests.
//! - [`RefreshDebouncer`] (`std` feature, on by default): a driver that owns a
//!   `Watchdog` behind a mutex, runs a worker thread against the real clock,
//!   and invokes a caller-supplied callback once per settled burst.
//!
//! ## Deterministic core
//!
//! Timestamps are [`Duration`] offsets from an arbitrary epoch chosen by the
//! host. The core never reads a clock itself:
//!
//! ```rust
//! use core::time::Duration;
//! use trellis_watchdog::Watchdog;
//!
//! let mut wd = Watchdog::new(Duration::from_millis(100));
//!
//! // Three restarts inside one interval: a single countdown survives.
//! wd.start_or_restart(Duration::from_millis(0));
//! wd.start_or_restart(Duration::from_millis(30));
//! wd.start_or_restart(Duration::from_millis(60));
//!
//! // Nothing is due before the last restart's deadline...
//! assert!(wd.poll(Duration::from_millis(159)).is_none());
//!
//! // ...then exactly one completion fires, and the watchdog goes idle.
//! assert!(wd.poll(Duration::from_millis(160)).is_some());
//! assert!(wd.poll(Duration::from_millis(500)).is_none());
//! ```
//!
//! ## Generations
//!
//! Every restart increments a generation counter, and a [`Completion`] carries
//! the generation of the countdown that expired. Because a restart overwrites
//! the previous deadline, a completion can only ever carry the generation of
//! the most recent restart; stale countdowns cannot fire. Hosts that hand
//! completions across threads can use the generation to detect that a
//! completion was superseded while in transit.
//!
//! ## Feature flags
//!
//! - `std` (default): enables [`RefreshDebouncer`] and [`DebounceHandle`].
//!   Without it the crate is `no_std` and exposes only the core.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod watchdog;

#[cfg(feature = "std")]
mod host;

pub use watchdog::{Completion, Watchdog};

#[cfg(feature = "std")]
pub use host::{DebounceHandle, RefreshDebouncer};
