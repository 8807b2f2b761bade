//! Time sources for the decimal clock.
//!
//! It's usually a good idea to control where the time comes from in an
//! application so that it can be mocked for testing and we get the intended
//! behavior without relying on the underlying system configuration.
//!
//! This crate provides two independent time sources:
//!
//! - [`clock`]: a wall-clock timestamp source returning a
//!   `DurationSinceUnixEpoch`. It's used to read the current calendar date
//!   and time of day.
//! - [`monotonic`]: an elapsed-milliseconds source measured against a
//!   process-start anchor. It's used for stopwatch measurement, where the
//!   accumulated value must not jump due to system clock changes, NTP sync
//!   or timezone changes.
//!
//! Both come in a `Working` version for production and a `Stopped` version
//! for testing, selected with a per-crate type alias:
//!
//! ```text
//! #[cfg(not(test))]
//! pub(crate) type CurrentClock = decimal_clock_clock::clock::Working;
//!
//! #[cfg(test)]
//! pub(crate) type CurrentClock = decimal_clock_clock::clock::Stopped;
//! ```
pub mod clock;
pub mod conv;
pub mod monotonic;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;

/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentMonotonic = monotonic::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentMonotonic = monotonic::Stopped;
