//! The clock readings service.
use decimal_clock_clock::clock::Time;
use decimal_clock_primitives::DurationSinceUnixEpoch;

use crate::core::date_time::DateTime;

/// All the formatted strings the clock screen displays, computed from one
/// wall-clock snapshot so they never disagree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockReadings {
    /// `HH:MM:SS`.
    pub standard_time: String,
    /// Fraction of the day, for example `0.52083 days`.
    pub decimal_time: String,
    /// `YYYY-MM-DD`.
    pub standard_date: String,
    /// Year and ordinal day, for example `2023 86 days`.
    pub decimal_date: String,
    /// Ordinal day plus day fraction, for example `86.52083 days`.
    pub combined_decimal: String,
    /// For example `Mar 27 12:30:00`.
    pub mixed_date_time: String,
}

/// It computes the readings for a given instant, using the local timezone's
/// calendar fields.
#[must_use]
pub fn at(instant: &DurationSinceUnixEpoch, precision: usize) -> ClockReadings {
    let date_time = DateTime::from_instant(instant);

    ClockReadings {
        standard_time: date_time.time.format_standard(),
        decimal_time: date_time.time.format_decimal(precision),
        standard_date: date_time.date.format_standard(),
        decimal_date: date_time.date.format_decimal(),
        combined_decimal: date_time.combined_decimal(precision),
        mixed_date_time: date_time.mixed_format(),
    }
}

/// It computes the readings for the current time of the given clock.
#[must_use]
pub fn current<C: Time>(precision: usize) -> ClockReadings {
    at(&C::now(), precision)
}

#[cfg(test)]
mod tests {
    use decimal_clock_clock::clock::stopped::Stopped as _;
    use decimal_clock_clock::clock::Time as _;
    use decimal_clock_primitives::DurationSinceUnixEpoch;

    use crate::core::services::clock::{at, current};
    use crate::CurrentClock;

    #[test]
    fn all_readings_should_come_from_the_same_snapshot() {
        let readings = at(&DurationSinceUnixEpoch::from_secs(1_679_929_920), 5);

        // The standard time reappears inside the mixed form.
        assert!(readings.mixed_date_time.ends_with(&readings.standard_time));

        // Both decimal readings carry the day-fraction suffix.
        assert!(readings.decimal_time.ends_with(" days"));
        assert!(readings.combined_decimal.ends_with(" days"));
    }

    #[test]
    fn the_combined_reading_should_start_with_the_ordinal_day() {
        let readings = at(&DurationSinceUnixEpoch::from_secs(1_679_929_920), 5);

        let ordinal = readings
            .decimal_date
            .split_whitespace()
            .nth(1)
            .expect("decimal date has an ordinal day");

        assert!(readings.combined_decimal.starts_with(&format!("{ordinal}.")));
    }

    #[test]
    fn current_readings_should_use_the_injected_clock() {
        CurrentClock::local_set(&DurationSinceUnixEpoch::from_secs(1_679_929_920));

        let readings = current::<CurrentClock>(5);

        assert_eq!(readings, at(&CurrentClock::now(), 5));

        CurrentClock::local_reset();
    }

    #[test]
    fn the_precision_should_apply_to_both_decimal_readings() {
        let readings = at(&DurationSinceUnixEpoch::from_secs(1_679_929_920), 2);

        let fraction_digits = |reading: &str| reading.split('.').nth(1).unwrap().split(' ').next().unwrap().len();

        // "0.XX days" and "DDD.XX days".
        assert_eq!(fraction_digits(&readings.decimal_time), 2);
        assert_eq!(fraction_digits(&readings.combined_decimal), 2);
    }
}
