//! The composite of a calendar date and a time of day.
//!
//! Besides the formats of its parts, the composite provides the combined
//! decimal form (day of year plus day fraction) and the conversion to a
//! single epoch instant for the persistence boundary.
use chrono::{Local, NaiveDate, TimeZone};
use decimal_clock_clock::clock::Time;
use decimal_clock_clock::conv;
use decimal_clock_primitives::DurationSinceUnixEpoch;

use crate::core::date::CalendarDate;
use crate::core::time::TimeOfDay;

/// A calendar date with a time of day. No extra invariants beyond its parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTime {
    pub date: CalendarDate,
    pub time: TimeOfDay,
}

impl DateTime {
    #[must_use]
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// The current local date and time read from the given clock.
    #[must_use]
    pub fn current<C: Time>() -> Self {
        Self::from_instant(&C::now())
    }

    /// It builds the composite from an epoch instant, using the local
    /// timezone's calendar fields.
    #[must_use]
    pub fn from_instant(instant: &DurationSinceUnixEpoch) -> Self {
        let local = conv::local_date_time_from_timestamp(instant);

        Self {
            date: CalendarDate::from_datelike(&local),
            time: TimeOfDay::from_timelike(&local),
        }
    }

    /// It converts the composite back to a single epoch instant, using the
    /// local timezone. This is the shape the persistence collaborator
    /// stores.
    ///
    /// # Panics
    ///
    /// Will panic if the fields do not name a representable local time, for
    /// example a time skipped by a daylight-saving jump. Values built with
    /// [`DateTime::from_instant`] or [`DateTime::current`] are always
    /// representable.
    #[must_use]
    pub fn to_instant(&self) -> DurationSinceUnixEpoch {
        let local = Local
            .with_ymd_and_hms(
                self.date.year,
                self.date.month + 1,
                self.date.day_of_month,
                self.time.hours,
                self.time.minutes,
                self.time.seconds,
            )
            .earliest()
            .expect("a stored date-time names a representable local time");

        conv::timestamp_from_local_date_time(&local)
    }

    /// The combined decimal form: day of year plus day fraction.
    ///
    /// The day of year is one-based and the fraction is in `[0.0, 1.0)`, so
    /// the combined value ranges over `[day_of_year, day_of_year + 1)`. The
    /// offset is kept on purpose for compatibility with the classic decimal
    /// date display.
    #[must_use]
    pub fn combined_decimal(&self, precision: usize) -> String {
        let combined = f64::from(self.date.day_of_year) + self.time.day_fraction;

        format!("{combined:.precision$} days")
    }

    /// A human-readable mixed form, for example `Mar 27 16:12:00`. The month
    /// abbreviation comes from the date-formatting collaborator.
    ///
    /// # Panics
    ///
    /// Will panic if the fields do not name a real calendar date. Values
    /// built through the fallible constructors always do.
    #[must_use]
    pub fn mixed_format(&self) -> String {
        let date = NaiveDate::from_ymd_opt(self.date.year, self.date.month + 1, self.date.day_of_month)
            .expect("a composite holds a real calendar date")
            .and_hms_opt(self.time.hours, self.time.minutes, self.time.seconds)
            .expect("a composite holds a real time of day");

        date.format("%b %d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use decimal_clock_primitives::DurationSinceUnixEpoch;

    use crate::core::date::CalendarDate;
    use crate::core::date_time::DateTime;
    use crate::core::time::TimeOfDay;

    fn march_27th_at_noon() -> DateTime {
        DateTime::new(
            CalendarDate::from_calendar_fields(2023, 2, 27).unwrap(),
            TimeOfDay::from_hms(12, 0, 0),
        )
    }

    #[test]
    fn the_combined_decimal_should_add_the_fraction_to_the_ordinal_day() {
        assert_eq!(march_27th_at_noon().combined_decimal(5), "86.50000 days");
    }

    #[test]
    fn the_combined_decimal_should_honor_the_precision() {
        assert_eq!(march_27th_at_noon().combined_decimal(2), "86.50 days");
    }

    #[test]
    fn the_combined_decimal_at_midnight_should_equal_the_ordinal_day() {
        let date_time = DateTime::new(
            CalendarDate::from_calendar_fields(2023, 0, 1).unwrap(),
            TimeOfDay::from_hms(0, 0, 0),
        );

        assert_eq!(date_time.combined_decimal(5), "1.00000 days");
    }

    #[test]
    fn the_mixed_format_should_abbreviate_the_month() {
        assert_eq!(march_27th_at_noon().mixed_format(), "Mar 27 12:00:00");
    }

    #[test]
    fn an_instant_should_survive_a_round_trip_through_calendar_fields() {
        let instant = DurationSinceUnixEpoch::from_secs(1_679_929_920);

        let date_time = DateTime::from_instant(&instant);

        assert_eq!(date_time.to_instant(), instant);
    }

    #[test]
    fn the_instant_conversion_should_truncate_sub_second_precision() {
        let instant = DurationSinceUnixEpoch::from_millis(1_679_929_920_123);

        let date_time = DateTime::from_instant(&instant);

        assert_eq!(date_time.to_instant(), DurationSinceUnixEpoch::from_secs(1_679_929_920));
    }

    #[test]
    fn the_time_fraction_should_be_consistent_with_the_local_fields() {
        let date_time = DateTime::from_instant(&DurationSinceUnixEpoch::from_secs(1_679_929_920));

        let seconds_of_day =
            date_time.time.hours * 3600 + date_time.time.minutes * 60 + date_time.time.seconds;

        assert_eq!(date_time.time.day_fraction, f64::from(seconds_of_day) / 86_400.0);
    }
}
