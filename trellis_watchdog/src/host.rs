// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thread-backed driver for the watchdog core.

use core::time::Duration;

use std::string::ToString;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Instant;

use crate::watchdog::Watchdog;

/// State guarded by the driver's mutex.
///
/// The shutdown flag lives under the same mutex as the watchdog so the
/// worker's predicate check and its condvar wait are atomic with respect to
/// whoever sets the flag.
#[derive(Debug)]
struct State {
    watchdog: Watchdog,
    shutdown: bool,
}

/// Shared state between the driver, its handles, and the worker thread.
#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    wake: Condvar,
    /// Epoch the worker and handles measure timestamps against.
    epoch: Instant,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A debouncer that fires a callback once per settled burst of restarts.
///
/// `RefreshDebouncer` owns a [`Watchdog`] behind a mutex and a worker thread
/// that waits out countdowns against the real clock. Cloneable
/// [`DebounceHandle`]s feed restarts in from the producer side; when a
/// countdown survives a full interval undisturbed, the worker invokes the
/// callback exactly once (outside any lock) and goes back to sleep.
///
/// Dropping the debouncer shuts the worker down and joins it. Handles that
/// outlive the debouncer keep restarting the watchdog, but nothing is left
/// to observe the countdowns, so no further callbacks run.
///
/// # Example
///
/// ```rust
/// use core::time::Duration;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use trellis_watchdog::RefreshDebouncer;
///
/// let fired = Arc::new(AtomicUsize::new(0));
/// let sink = Arc::clone(&fired);
/// let debouncer = RefreshDebouncer::spawn(Duration::from_millis(20), move || {
///     sink.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let handle = debouncer.handle();
/// for _ in 0..5 {
///     handle.start_or_restart();
/// }
/// std::thread::sleep(Duration::from_millis(200));
/// assert_eq!(fired.load(Ordering::SeqCst), 1);
/// ```
#[derive(Debug)]
pub struct RefreshDebouncer {
    shared: Arc<Shared>,
    worker: Option<thread::JoinHandle<()>>,
}

impl RefreshDebouncer {
    /// Spawns a debouncer with the given interval and completion callback.
    ///
    /// The callback runs on the worker thread, at most once per settled
    /// burst. It must not block for long: while it runs, expiry of any
    /// countdown restarted in the meantime is delayed until it returns.
    pub fn spawn<F>(interval: Duration, mut on_fire: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                watchdog: Watchdog::new(interval),
                shutdown: false,
            }),
            wake: Condvar::new(),
            epoch: Instant::now(),
        });
        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("trellis-watchdog".to_string())
            .spawn(move || run(&worker_shared, &mut on_fire))
            .expect("failed to spawn watchdog worker thread");
        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Returns a cloneable handle for restarting the countdown.
    #[must_use]
    pub fn handle(&self) -> DebounceHandle {
        DebounceHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Returns the countdown interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.shared.lock().watchdog.interval()
    }

    /// Returns `true` if a countdown is currently pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.shared.lock().watchdog.is_pending()
    }
}

impl Drop for RefreshDebouncer {
    fn drop(&mut self) {
        self.shared.lock().shutdown = true;
        self.shared.wake.notify_all();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Producer-side handle to a [`RefreshDebouncer`].
///
/// Handles are cheap to clone and may be shared; the debouncer serializes
/// access to the underlying watchdog internally. Each call to
/// [`start_or_restart`](Self::start_or_restart) cancels any countdown in
/// flight and begins a fresh one.
#[derive(Clone, Debug)]
pub struct DebounceHandle {
    shared: Arc<Shared>,
}

impl DebounceHandle {
    /// Begins a countdown, cancelling any countdown already in flight.
    ///
    /// Returns the generation of the new countdown.
    pub fn start_or_restart(&self) -> u64 {
        let now = self.shared.epoch.elapsed();
        let generation = self.shared.lock().watchdog.start_or_restart(now);
        self.shared.wake.notify_all();
        generation
    }

    /// Returns the generation of the most recent restart.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.shared.lock().watchdog.generation()
    }
}

/// Worker loop: wait out countdowns, fire the callback on natural expiry.
fn run(shared: &Shared, on_fire: &mut (dyn FnMut() + Send)) {
    let mut state = shared.lock();
    loop {
        if state.shutdown {
            return;
        }
        let Some(deadline) = state.watchdog.deadline() else {
            // Idle until the next restart (or shutdown) wakes us.
            state = shared
                .wake
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
            continue;
        };
        let now = shared.epoch.elapsed();
        if state.watchdog.poll(now).is_some() {
            // The countdown survived its full interval. Fire outside the
            // lock so the callback can restart the watchdog reentrantly.
            drop(state);
            on_fire();
            state = shared.lock();
        } else {
            // Not due yet; poll returning None guarantees now < deadline.
            let (guard, _timed_out) = shared
                .wake
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            state = guard;
        }
    }
}
