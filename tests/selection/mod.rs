//! Integration tests for the selection store.
//!
//! They exercise the full path a calendar selection travels: composite
//! date-time, epoch instant, repository driver, and back.
use decimal_clock::core::date_time::DateTime;
use decimal_clock::core::selection::driver;
use decimal_clock_primitives::DurationSinceUnixEpoch;
use decimal_clock_test_helpers::configuration;

#[test]
fn a_selection_should_survive_a_round_trip_through_the_json_file_driver() {
    let config = configuration::ephemeral();
    let repository = driver::build(&config.core.selection);

    let selected = DateTime::from_instant(&DurationSinceUnixEpoch::from_secs(1_679_929_920));

    repository.save(&selected.to_instant()).expect("the selection can be saved");

    let reloaded = repository
        .load()
        .expect("the selection can be loaded")
        .expect("a selection was stored");

    assert_eq!(DateTime::from_instant(&reloaded), selected);

    repository.clear().expect("the selection can be cleared");
}

#[test]
fn the_memory_driver_should_behave_like_the_file_driver() {
    let config = configuration::ephemeral_in_memory();
    let repository = driver::build(&config.core.selection);

    let instant = DurationSinceUnixEpoch::from_secs(1_679_929_920);

    assert!(!repository.exists().expect("the store can be queried"));

    repository.save(&instant).expect("the selection can be saved");
    assert_eq!(repository.load().expect("the selection can be loaded"), Some(instant));

    repository.clear().expect("the selection can be cleared");
    assert!(!repository.exists().expect("the store can be queried"));
}

#[test]
fn clearing_an_absent_selection_should_be_a_no_op_for_both_drivers() {
    for config in [configuration::ephemeral(), configuration::ephemeral_in_memory()] {
        let repository = driver::build(&config.core.selection);

        assert!(repository.clear().is_ok());
    }
}
