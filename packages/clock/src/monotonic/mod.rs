//! The monotonic elapsed-milliseconds source.
//!
//! A monotonic source is guaranteed never to run backward or jump due to
//! wall-clock adjustments. It's the only source the stopwatch accumulator is
//! allowed to read: a stopwatch measured against the wall clock would gain or
//! lose time whenever the system clock is adjusted.
//!
//! The returned values are milliseconds since an arbitrary process-start
//! anchor. They carry no calendar meaning and are only comparable with other
//! values from the same source.
use decimal_clock_primitives::ElapsedMillis;

use self::stopped::StoppedUptime;
use self::working::WorkingUptime;

pub mod stopped;
pub mod working;

/// A generic structure that represents a monotonic milliseconds counter.
///
/// It can be either the working counter (production) or the stopped counter
/// (testing). It implements the `Time` trait, which gives you the elapsed
/// milliseconds since the anchor.
#[derive(Debug)]
pub struct Uptime<T> {
    counter: std::marker::PhantomData<T>,
}

/// The working counter. It measures against the process-start instant.
pub type Working = Uptime<WorkingUptime>;
/// The stopped counter. It returns a fixed value that tests can move forward.
pub type Stopped = Uptime<StoppedUptime>;

/// Trait for types that can be used as a monotonic milliseconds counter.
pub trait Time: Sized {
    fn now() -> ElapsedMillis;

    fn dbg_counter_type() -> String;
}
