//! Integration tests for the readings services.
//!
//! Wall-clock readings are produced for the local timezone of the machine
//! running the tests, so the assertions check shapes and consistency rather
//! than literal local values.
use decimal_clock::core::services;
use decimal_clock::core::stopwatch::SharedStopwatch;
use decimal_clock_clock::clock::stopped::Stopped as _;
use decimal_clock_clock::clock::Time;
use decimal_clock_clock::monotonic::stopped::Stopped as _;
use decimal_clock_primitives::DurationSinceUnixEpoch;

use crate::{CurrentClock, CurrentMonotonic};

#[test]
fn the_clock_readings_should_cover_both_representations() {
    let instant = DurationSinceUnixEpoch::from_secs(1_679_929_920);

    let readings = services::clock::at(&instant, 5);

    assert_eq!(readings.standard_time.len(), "00:00:00".len());
    assert!(readings.standard_date.starts_with("2023-"));
    assert!(readings.decimal_time.ends_with(" days"));
    assert!(readings.decimal_date.starts_with("2023 "));
    assert!(readings.decimal_date.ends_with(" days"));
    assert!(readings.combined_decimal.ends_with(" days"));
}

#[test]
fn the_decimal_time_reading_should_honor_the_configured_precision() {
    let instant = DurationSinceUnixEpoch::from_secs(1_679_929_920);

    let readings = services::clock::at(&instant, 3);

    let fraction = readings
        .decimal_time
        .strip_suffix(" days")
        .and_then(|value| value.split('.').nth(1))
        .expect("the decimal time has a fractional part");

    assert_eq!(fraction.len(), 3);
}

#[test]
fn the_current_readings_should_come_from_the_injected_clock() {
    let instant = DurationSinceUnixEpoch::from_secs(1_679_929_920);
    CurrentClock::local_set(&instant);

    let current = services::clock::current::<CurrentClock>(5);

    assert_eq!(current, services::clock::at(&CurrentClock::now(), 5));

    CurrentClock::local_reset();
}

#[test]
fn the_stopwatch_readings_should_scale_the_decimal_value() {
    CurrentMonotonic::local_reset();
    let stopwatch: SharedStopwatch<CurrentMonotonic> = SharedStopwatch::new();

    stopwatch.start();
    CurrentMonotonic::local_add(300_000); // five minutes

    let readings = services::stopwatch::read(&stopwatch, 5);

    assert_eq!(readings.standard_time, "00:05:00");
    assert_eq!(readings.scaled_value, "3.47");
    assert_eq!(readings.unit_label, "mD [milliday]");
    assert!(readings.running);
}

#[test]
fn a_fresh_stopwatch_should_read_as_stopped_zeros() {
    CurrentMonotonic::local_reset();
    let stopwatch: SharedStopwatch<CurrentMonotonic> = SharedStopwatch::new();

    let readings = services::stopwatch::read(&stopwatch, 5);

    assert_eq!(readings.standard_time, "00:00:00");
    assert_eq!(readings.scaled_value, "0.000");
    assert!(!readings.running);
}
