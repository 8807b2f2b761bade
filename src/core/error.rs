//! Errors for the conversion engine.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The calendar fields do not name a real Gregorian date, for example
    /// February 30th. The month is the zero-based index.
    #[error("invalid calendar date: year {year}, month index {month}, day {day_of_month}")]
    InvalidCalendarDate { year: i32, month: u32, day_of_month: u32 },
}
