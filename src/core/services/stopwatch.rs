//! The stopwatch readings service.
use decimal_clock_clock::monotonic::Time;
use decimal_clock_primitives::MILLIS_PER_DAY;

use crate::core::prefix;
use crate::core::stopwatch::SharedStopwatch;
use crate::core::time::TimeOfDay;

/// All the formatted strings the stopwatch screen displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopwatchReadings {
    /// `HH:MM:SS`, wrapping at 24 hours.
    pub standard_time: String,
    /// Fraction of the day, for example `0.00347 days`.
    pub decimal_time: String,
    /// The elapsed days scaled into a readable range, for example `3.47`.
    pub scaled_value: String,
    /// The unit of the scaled value, for example `mD [milliday]`.
    pub unit_label: String,
    pub running: bool,
}

/// It computes the readings from one elapsed-time snapshot of the
/// stopwatch.
///
/// The scaled value is computed from the raw elapsed duration, not from the
/// wrapped time of day, so a run longer than a day reads `1.04 D [day]`
/// rather than wrapping back to millidays.
#[must_use]
pub fn read<C: Time>(stopwatch: &SharedStopwatch<C>, precision: usize) -> StopwatchReadings {
    let elapsed = stopwatch.elapsed();
    let running = stopwatch.is_running();

    let time = TimeOfDay::from_elapsed_millis(elapsed);

    #[allow(clippy::cast_precision_loss)]
    let elapsed_days = elapsed as f64 / MILLIS_PER_DAY as f64;
    let scaled = prefix::scale(elapsed_days);

    StopwatchReadings {
        standard_time: time.format_standard(),
        decimal_time: time.format_decimal(precision),
        scaled_value: scaled.value,
        unit_label: scaled.unit.to_string(),
        running,
    }
}

#[cfg(test)]
mod tests {
    use decimal_clock_clock::monotonic::stopped::Stopped as _;

    use crate::core::services::stopwatch::read;
    use crate::core::stopwatch::SharedStopwatch;
    use crate::CurrentMonotonic;

    fn stopwatch() -> SharedStopwatch<CurrentMonotonic> {
        CurrentMonotonic::local_reset();
        SharedStopwatch::new()
    }

    #[test]
    fn a_fresh_stopwatch_should_read_all_zeros_with_the_milliday_unit() {
        let readings = read(&stopwatch(), 5);

        assert_eq!(readings.standard_time, "00:00:00");
        assert_eq!(readings.decimal_time, "0.00000 days");
        assert_eq!(readings.scaled_value, "0.000");
        assert_eq!(readings.unit_label, "mD [milliday]");
        assert!(!readings.running);
    }

    #[test]
    fn five_minutes_should_read_in_millidays() {
        let stopwatch = stopwatch();
        stopwatch.start();
        CurrentMonotonic::local_add(5 * 60 * 1_000);

        let readings = read(&stopwatch, 5);

        assert_eq!(readings.standard_time, "00:05:00");
        assert_eq!(readings.scaled_value, "3.47");
        assert_eq!(readings.unit_label, "mD [milliday]");
        assert!(readings.running);
    }

    #[test]
    fn more_than_a_day_should_read_in_days_even_though_the_time_wraps() {
        let stopwatch = stopwatch();
        stopwatch.add_time(25 * 3_600 * 1_000);

        let readings = read(&stopwatch, 5);

        // The HH:MM:SS display wraps at 24 hours.
        assert_eq!(readings.standard_time, "01:00:00");
        // The scaled display does not.
        assert_eq!(readings.scaled_value, "1.04");
        assert_eq!(readings.unit_label, "D [day]");
    }
}
