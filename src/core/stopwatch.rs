//! The stopwatch accumulator.
//!
//! The accumulator tracks elapsed milliseconds across start, pause, reset
//! and add-time operations. It is independent of the wall-clock date: all
//! measurement goes through a monotonic counter, so the accumulated value
//! cannot jump due to system clock changes, NTP sync or timezone changes.
//!
//! While running, the state is a single anchor (`started_at`) and the
//! elapsed time is re-derived from the counter on every read, which makes
//! [`Stopwatch::elapsed`] cheap enough to call at arbitrary frequency.
//! While stopped, the elapsed time is frozen.
use std::marker::PhantomData;
use std::sync::Arc;

use decimal_clock_clock::monotonic::Time;
use decimal_clock_primitives::ElapsedMillis;
use parking_lot::Mutex;

/// The elapsed-time accumulator over the monotonic counter `C`.
///
/// States: stopped (initial) and running. There is no terminal state: a
/// stopwatch lives as long as its owning session.
#[derive(Debug)]
pub struct Stopwatch<C: Time> {
    running: bool,
    /// The frozen elapsed time while stopped; stale while running.
    elapsed_millis: u64,
    /// The counter value the running measurement is anchored to. May be
    /// logically negative after `add_time`; wrapping arithmetic keeps
    /// `now - started_at` correct.
    started_at: ElapsedMillis,
    counter: PhantomData<C>,
}

impl<C: Time> Default for Stopwatch<C> {
    fn default() -> Self {
        Self {
            running: false,
            elapsed_millis: 0,
            started_at: 0,
            counter: PhantomData,
        }
    }
}

impl<C: Time> Stopwatch<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// It starts the measurement. The anchor is set behind the current
    /// counter value by the already accumulated time, so the elapsed time
    /// carries over instead of resetting. No-op when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }

        self.started_at = C::now().wrapping_sub(self.elapsed_millis);
        self.running = true;
    }

    /// It freezes the elapsed time. No-op when already stopped.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }

        self.elapsed_millis = C::now().wrapping_sub(self.started_at);
        self.running = false;
    }

    /// It zeroes the elapsed time and stops, regardless of prior state.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_millis = 0;
        self.started_at = 0;
    }

    /// It adds time unconditionally. When running, the anchor is moved back
    /// so the display reflects the addition immediately, without a
    /// discontinuity.
    pub fn add_time(&mut self, delta_millis: u64) {
        self.elapsed_millis = self.elapsed().saturating_add(delta_millis);

        if self.running {
            self.started_at = C::now().wrapping_sub(self.elapsed_millis);
        }
    }

    /// The current elapsed milliseconds. A pure computation from the
    /// monotonic counter; no I/O, no allocation.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        if self.running {
            C::now().wrapping_sub(self.started_at)
        } else {
            self.elapsed_millis
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// A stopwatch shared between the owner and the periodic display job.
///
/// Every operation takes the lock once, so the read-then-write sequences
/// inside `add_time` and `start` are single critical sections even with a
/// multi-threaded host.
#[derive(Debug)]
pub struct SharedStopwatch<C: Time> {
    inner: Arc<Mutex<Stopwatch<C>>>,
}

impl<C: Time> Clone for SharedStopwatch<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Time> Default for SharedStopwatch<C> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Stopwatch::default())),
        }
    }
}

impl<C: Time> SharedStopwatch<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) {
        self.inner.lock().start();
    }

    pub fn pause(&self) {
        self.inner.lock().pause();
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn add_time(&self, delta_millis: u64) {
        self.inner.lock().add_time(delta_millis);
    }

    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.inner.lock().elapsed()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.lock().is_running()
    }
}
