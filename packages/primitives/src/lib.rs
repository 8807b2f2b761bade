//! Primitive types for the [Decimal Clock](https://docs.rs/decimal-clock).
//!
//! This module contains the basic time units and value types shared by the
//! decimal clock packages: the conversion engine, the clock sources and the
//! application shell all speak in these types.
//!
//! There are two different kinds of time in this workspace and they are never
//! mixed:
//!
//! - [`DurationSinceUnixEpoch`]: a wall-clock timestamp, used for calendar
//!   dates and the persisted user selection.
//! - [`ElapsedMillis`]: a monotonic elapsed-milliseconds counter, used for
//!   stopwatch measurement so that the accumulated value cannot jump due to
//!   system clock changes, NTP sync or timezone changes.
use std::time::Duration;

pub mod day_fraction;

pub use day_fraction::DayFraction;

/// Duration since the Unix Epoch (wall-clock timestamp).
pub type DurationSinceUnixEpoch = Duration;

/// Milliseconds measured against a monotonic anchor.
///
/// Values of this type are only comparable with other values produced by the
/// same anchor. They carry no calendar meaning.
pub type ElapsedMillis = u64;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u32 = 3600;

/// Seconds in one day. The denominator of every day fraction.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
