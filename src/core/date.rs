//! The calendar date value and its day-of-year form.
//!
//! The month is stored as a zero-based index (January is `0`), matching the
//! calendar source the application reads from. The offset is applied at
//! format time, so `format_standard` prints the familiar one-based month.
use chrono::{Datelike, NaiveDate};

use crate::core::error::Error;

/// A Gregorian calendar date with its day-of-year form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    /// Zero-based month index, `0..=11`.
    pub month: u32,
    pub day_of_month: u32,
    /// One-based ordinal day, `1..=366`, consistent with the proleptic
    /// Gregorian leap-year rule.
    pub day_of_year: u32,
}

impl CalendarDate {
    /// It builds a date from calendar fields, computing the day of the year.
    ///
    /// # Errors
    ///
    /// Will return an error if the fields do not name a real date, for
    /// example a month index of `12` or February 30th.
    pub fn from_calendar_fields(year: i32, month: u32, day_of_month: u32) -> Result<Self, Error> {
        let date = NaiveDate::from_ymd_opt(year, month + 1, day_of_month).ok_or(Error::InvalidCalendarDate {
            year,
            month,
            day_of_month,
        })?;

        Ok(Self {
            year,
            month,
            day_of_month,
            day_of_year: date.ordinal(),
        })
    }

    /// It builds a date from the date part of a calendar value.
    #[must_use]
    pub fn from_datelike(date: &impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day_of_month: date.day(),
            day_of_year: date.ordinal(),
        }
    }

    /// `YYYY-MM-DD`, with the one-based month.
    #[must_use]
    pub fn format_standard(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month + 1, self.day_of_month)
    }

    /// The decimal form: `"{year} {day_of_year} days"`.
    #[must_use]
    pub fn format_decimal(&self) -> String {
        format!("{} {} days", self.year, self.day_of_year)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_standard())
    }
}
