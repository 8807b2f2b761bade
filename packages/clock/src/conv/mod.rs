//! Conversions between timestamps and local calendar date-times.
//!
//! The persisted user selection crosses the storage boundary as a single
//! epoch-milliseconds instant. These functions convert that instant to and
//! from a `chrono::DateTime<Local>`, from which the calendar fields (year,
//! month, day of year, hour, minute, second) are read.
//!
//! The local timezone is used on purpose: the decimal representation is
//! defined as the fraction of the *local* day elapsed since *local* midnight.
use chrono::{DateTime, Local, TimeZone};
use decimal_clock_primitives::DurationSinceUnixEpoch;

/// It converts a timestamp to a `DateTime::<Local>`.
/// For example, the timestamp of 0: `DurationSinceUnixEpoch::ZERO` will be
/// converted to the local representation of the Unix Epoch.
///
/// # Panics
///
/// Will panic if the timestamp in milliseconds overflows the `i64` type.
/// (this will naturally happen in 292.5 million years)
#[must_use]
pub fn local_date_time_from_timestamp(timestamp: &DurationSinceUnixEpoch) -> DateTime<Local> {
    Local
        .timestamp_millis_opt(i64::try_from(timestamp.as_millis()).expect("Overflow of i64 milliseconds, very future!"))
        .unwrap()
}

/// It converts a `DateTime::<Local>` to a timestamp.
///
/// # Panics
///
/// Will panic if the input date-time is before the Unix Epoch.
#[must_use]
pub fn timestamp_from_local_date_time(local: &DateTime<Local>) -> DurationSinceUnixEpoch {
    DurationSinceUnixEpoch::from_millis(
        u64::try_from(local.timestamp_millis()).expect("Cannot represent times before the Unix Epoch"),
    )
}
