//! Decimal Clock. A clock that displays the current time and date in both
//! conventional and decimal representations, and a stopwatch with the same
//! dual display.
//!
//! The decimal representation of a time of day is the fraction of the local
//! day elapsed since local midnight: noon is `0.50000 days`. The decimal
//! representation of a date is the day of the year: `2023 86 days`. Both can
//! be combined into a single value, `86.50000 days`.
//!
//! The crate is organized in three layers:
//!
//! - [`core`]: the conversion and formatting engine, the stopwatch
//!   accumulator and the selection store. Pure domain logic, no I/O except
//!   the store drivers.
//! - [`bootstrap`]: configuration loading, logging setup and the periodic
//!   display jobs.
//! - [`app`]: glue that starts the jobs and hands their readings to the
//!   display.
//!
//! Time never comes directly from the operating system. The wall clock and
//! the monotonic counter are read through the
//! [`decimal-clock-clock`](decimal_clock_clock) crate, which provides a
//! stopped version of both for deterministic tests.
pub mod app;
pub mod bootstrap;
pub mod core;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
pub type CurrentClock = decimal_clock_clock::clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
pub type CurrentClock = decimal_clock_clock::clock::Stopped;

/// Working version, for production.
#[cfg(not(test))]
pub type CurrentMonotonic = decimal_clock_clock::monotonic::Working;

/// Stopped version, for testing.
#[cfg(test)]
pub type CurrentMonotonic = decimal_clock_clock::monotonic::Stopped;
