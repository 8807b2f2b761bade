use decimal_clock_clock::monotonic::stopped::Stopped as _;
use decimal_clock_clock::monotonic::Time;

use crate::CurrentMonotonic;

#[test]
fn it_should_use_the_stopped_counter_for_testing() {
    assert_eq!(CurrentMonotonic::dbg_counter_type(), "Stopped".to_owned());

    CurrentMonotonic::local_reset();

    let millis = CurrentMonotonic::now();
    std::thread::sleep(std::time::Duration::from_millis(50));
    let millis_2 = CurrentMonotonic::now();

    // Real time passed, the stopped counter did not move.
    assert_eq!(millis, millis_2);

    CurrentMonotonic::local_add(1_000);
    assert_eq!(CurrentMonotonic::now(), millis + 1_000);

    CurrentMonotonic::local_reset();
}
