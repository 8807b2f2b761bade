//! A monotonic counter stopped at a given value, for testing.
//!
//! Tests drive the counter forward explicitly, which makes stopwatch
//! scenarios deterministic: no sleeping, no tolerance windows.
use decimal_clock_primitives::ElapsedMillis;

use super::Time;
use crate::monotonic;

#[allow(clippy::module_name_repetitions)]
pub struct StoppedUptime {}

/// Trait for manipulating the stopped counter. The fixed value is
/// thread-local, so tests running in parallel do not interfere with each
/// other.
#[allow(clippy::module_name_repetitions)]
pub trait Stopped: monotonic::Time {
    /// It sets the counter to a given number of elapsed milliseconds.
    fn local_set(millis: ElapsedMillis);

    /// It advances the counter by `millis`, saturating at `u64::MAX`.
    fn local_add(millis: ElapsedMillis);

    /// It resets the counter to zero.
    fn local_reset() {
        Self::local_set(0);
    }
}

impl Time for monotonic::Stopped {
    fn now() -> ElapsedMillis {
        detail::FIXED_MILLIS.with(|millis| *millis.borrow())
    }

    fn dbg_counter_type() -> String {
        "Stopped".to_owned()
    }
}

impl Stopped for monotonic::Stopped {
    fn local_set(millis: ElapsedMillis) {
        detail::FIXED_MILLIS.with(|fixed| {
            *fixed.borrow_mut() = millis;
        });
    }

    fn local_add(millis: ElapsedMillis) {
        detail::FIXED_MILLIS.with(|fixed| {
            let current = *fixed.borrow();
            *fixed.borrow_mut() = current.saturating_add(millis);
        });
    }
}


mod detail {
    use std::cell::RefCell;

    use decimal_clock_primitives::ElapsedMillis;

    thread_local!(pub static FIXED_MILLIS: RefCell<ElapsedMillis> = const { RefCell::new(0) });
}
