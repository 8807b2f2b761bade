//! Integration tests for the stopwatch over the stopped monotonic counter.
//!
//! They drive whole sessions (start, pause, add time, reset) and check the
//! accumulated value, with the counter advanced by hand so every assertion
//! is exact.
use decimal_clock::core::stopwatch::SharedStopwatch;
use decimal_clock_clock::monotonic::stopped::Stopped as _;

use crate::CurrentMonotonic;

fn shared_stopwatch() -> SharedStopwatch<CurrentMonotonic> {
    CurrentMonotonic::local_reset();
    SharedStopwatch::new()
}

#[test]
fn a_full_session_should_accumulate_only_running_time() {
    let stopwatch = shared_stopwatch();

    stopwatch.start();
    CurrentMonotonic::local_add(1_500);
    stopwatch.pause();

    // A break between laps.
    CurrentMonotonic::local_add(120_000);

    stopwatch.start();
    CurrentMonotonic::local_add(500);
    stopwatch.pause();

    assert_eq!(stopwatch.elapsed(), 2_000);
}

#[test]
fn added_time_should_survive_pauses_and_restarts() {
    let stopwatch = shared_stopwatch();

    stopwatch.start();
    CurrentMonotonic::local_add(1_000);
    stopwatch.add_time(3_600_000);
    stopwatch.pause();

    stopwatch.start();
    CurrentMonotonic::local_add(1_000);

    assert_eq!(stopwatch.elapsed(), 3_602_000);
}

#[test]
fn a_display_observer_should_see_the_owner_session() {
    let stopwatch = shared_stopwatch();
    let observer = stopwatch.clone();

    stopwatch.start();
    CurrentMonotonic::local_add(250);

    assert!(observer.is_running());
    assert_eq!(observer.elapsed(), 250);

    stopwatch.reset();

    assert!(!observer.is_running());
    assert_eq!(observer.elapsed(), 0);
}
