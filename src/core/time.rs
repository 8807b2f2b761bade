//! The time-of-day value and the fraction-of-day conversion.
//!
//! A [`TimeOfDay`] is an immutable snapshot: it is constructed fresh on
//! every query and never mutated, only replaced. The decimal value is
//! derived from the components at construction, so the invariant
//! `day_fraction == (h*3600 + m*60 + s) / 86400` always holds.
use chrono::Timelike;
use decimal_clock_primitives::{DayFraction, MILLIS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Slack added before truncating a fraction to whole seconds.
///
/// A fraction built from integral seconds is the correctly-rounded double
/// nearest to `s / 86400`, which can land a few ULPs *below* the exact
/// value. A bare floor of `fraction * 86400` would then produce `s - 1`
/// (it does, for thousands of the 86400 whole-second fractions). The slack
/// is far larger than that rounding error and far smaller than the spacing
/// between representable sub-second inputs we care about, so truncation
/// semantics are preserved.
const TRUNCATION_SLACK: f64 = 1e-9;

/// A time of day with its decimal representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Fraction of the day elapsed since midnight, in `[0.0, 1.0)`.
    pub day_fraction: f64,
}

impl TimeOfDay {
    /// It builds a time of day from hours, minutes and seconds, deriving the
    /// decimal value. Components are expected in ordinary ranges (callers
    /// construct them from a calendar source); out-of-range components are
    /// not clamped.
    #[must_use]
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            day_fraction: DayFraction::from_hms(hours, minutes, seconds).value(),
        }
    }

    /// It builds a time of day from a decimal day fraction, truncating to
    /// whole seconds.
    #[must_use]
    pub fn from_day_fraction(fraction: DayFraction) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total_seconds = (fraction.value() * f64::from(SECONDS_PER_DAY) + TRUNCATION_SLACK).floor() as u32;

        Self {
            hours: total_seconds / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
            day_fraction: fraction.value(),
        }
    }

    /// It builds a time of day from elapsed milliseconds, wrapping at 24
    /// hours. Used for the stopwatch display, which is independent of the
    /// wall-clock date.
    #[must_use]
    pub fn from_elapsed_millis(millis: u64) -> Self {
        let total_seconds = millis / MILLIS_PER_SECOND;

        #[allow(clippy::cast_possible_truncation)]
        Self {
            hours: ((total_seconds / u64::from(SECONDS_PER_HOUR)) % 24) as u32,
            minutes: ((total_seconds / u64::from(SECONDS_PER_MINUTE)) % 60) as u32,
            seconds: (total_seconds % u64::from(SECONDS_PER_MINUTE)) as u32,
            day_fraction: DayFraction::from_day_seconds(total_seconds).value(),
        }
    }

    /// It builds a time of day from the time part of a calendar value.
    #[must_use]
    pub fn from_timelike(time: &impl Timelike) -> Self {
        Self::from_hms(time.hour(), time.minute(), time.second())
    }

    /// Zero-padded `HH:MM:SS`.
    #[must_use]
    pub fn format_standard(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }

    /// The decimal value as a fixed-point fraction of the day, for example
    /// `0.52083 days` for half past noon.
    #[must_use]
    pub fn format_decimal(&self, precision: usize) -> String {
        format!("{:.*} days", precision, self.day_fraction)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_standard())
    }
}

#[cfg(test)]
mod tests {
    use decimal_clock_primitives::DayFraction;

    use crate::core::time::TimeOfDay;

    #[test]
    fn midnight_should_have_a_zero_decimal_value() {
        assert_eq!(TimeOfDay::from_hms(0, 0, 0).day_fraction, 0.0);
    }

    #[test]
    fn the_last_second_of_the_day_should_be_almost_one() {
        let time = TimeOfDay::from_hms(23, 59, 59);
        assert_eq!(time.day_fraction, 86_399.0 / 86_400.0);
    }

    #[test]
    fn every_whole_second_time_should_survive_a_decimal_round_trip() {
        for hours in 0..24 {
            for minutes in 0..60 {
                for seconds in 0..60 {
                    let fraction = DayFraction::from_hms(hours, minutes, seconds);
                    let time = TimeOfDay::from_day_fraction(fraction);

                    assert_eq!((time.hours, time.minutes, time.seconds), (hours, minutes, seconds));
                }
            }
        }
    }

    #[test]
    fn a_fraction_between_whole_seconds_should_be_truncated_not_rounded() {
        // 10.9 seconds after midnight.
        let fraction = DayFraction::new(10.9 / 86_400.0).unwrap();

        let time = TimeOfDay::from_day_fraction(fraction);

        assert_eq!(time.seconds, 10);
    }

    #[test]
    fn standard_format_should_be_zero_padded() {
        assert_eq!(TimeOfDay::from_hms(5, 3, 9).format_standard(), "05:03:09");
    }

    #[test]
    fn decimal_format_should_have_the_requested_precision() {
        let time = TimeOfDay::from_hms(12, 0, 0);

        assert_eq!(time.format_decimal(5), "0.50000 days");
        assert_eq!(time.format_decimal(2), "0.50 days");
    }

    #[test]
    fn elapsed_millis_should_wrap_at_24_hours() {
        let one_day_and_one_second = (24 * 3600 + 1) * 1000;

        let time = TimeOfDay::from_elapsed_millis(one_day_and_one_second);

        assert_eq!((time.hours, time.minutes, time.seconds), (0, 0, 1));
        assert_eq!(time.day_fraction, 1.0 / 86_400.0);
    }

    #[test]
    fn sub_second_elapsed_millis_should_truncate_to_the_current_second() {
        let time = TimeOfDay::from_elapsed_millis(1_999);

        assert_eq!((time.hours, time.minutes, time.seconds), (0, 0, 1));
    }

    #[test]
    fn display_should_use_the_standard_format() {
        assert_eq!(TimeOfDay::from_hms(23, 59, 59).to_string(), "23:59:59");
    }
}
