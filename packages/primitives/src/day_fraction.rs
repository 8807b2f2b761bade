//! The decimal representation of a time of day.
//!
//! A day fraction is the number of seconds elapsed since local midnight
//! divided by `86400`, so it always lies in the half-open interval
//! `[0.0, 1.0)`. Midnight is `0.0` and `23:59:59` is `86399/86400`.
//!
//! The upper bound is excluded: a fraction of exactly `1.0` would decode to
//! `hours == 24`, which is not a time of day. Out-of-range values, including
//! negative ones, are rejected at construction instead of being clamped or
//! wrapped.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// A fraction of a day, guaranteed to be in `[0.0, 1.0)`.
#[derive(Serialize, Deserialize, PartialEq, PartialOrd, Debug, Clone, Copy, Default)]
#[serde(try_from = "f64", into = "f64")]
pub struct DayFraction(f64);

/// Error returned when a raw `f64` is not a valid day fraction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("day fraction must be in [0.0, 1.0), got {value}")]
    OutOfRange { value: f64 },
}

impl DayFraction {
    /// Local midnight.
    pub const ZERO: Self = Self(0.0);

    /// It builds a day fraction from a raw `f64`.
    ///
    /// # Errors
    ///
    /// Will return an error if `value` is negative, is `1.0` or greater, or
    /// is not a number.
    pub fn new(value: f64) -> Result<Self, Error> {
        if (0.0..1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::OutOfRange { value })
        }
    }

    /// It builds the day fraction for a whole number of seconds since local
    /// midnight. The input is reduced modulo one day, so the result is always
    /// in range.
    #[must_use]
    pub fn from_day_seconds(seconds: u64) -> Self {
        let seconds_of_day = seconds % u64::from(SECONDS_PER_DAY);
        #[allow(clippy::cast_precision_loss)]
        Self(seconds_of_day as f64 / f64::from(SECONDS_PER_DAY))
    }

    /// It builds the day fraction for a time of day given as hours, minutes
    /// and seconds: `(h*3600 + m*60 + s) / 86400`.
    ///
    /// No bounds clamping is performed on the individual components. Callers
    /// construct components in ordinary ranges; an out-of-range component
    /// (for example `seconds == 60`) is reduced modulo one day like any other
    /// second count.
    #[must_use]
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self::from_day_seconds(u64::from(
            hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds,
        ))
    }

    /// The raw fraction value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for DayFraction {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayFraction> for f64 {
    fn from(fraction: DayFraction) -> Self {
        fraction.0
    }
}

impl std::fmt::Display for DayFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}", self.0)
    }
}
