//! Ephemeral configurations for testing.
use std::env;

use decimal_clock_configuration::{Configuration, SelectionDriver, Threshold};

use crate::random;

/// This configuration is used for testing. It generates a random selection
/// store path so tests running at the same time do not collide.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    // Change to `Threshold::Debug` for tests debugging.
    config.logging.threshold = Threshold::Off;

    // Ephemeral JSON document for the selection store.
    let temp_directory = env::temp_dir();
    let random_store_id = random::string(16);
    let temp_file = temp_directory.join(format!("selection_{random_store_id}.json"));
    config.core.selection.driver = SelectionDriver::JsonFile;
    config.core.selection.path = temp_file.to_str().unwrap().to_owned();

    config
}

/// Same as [`ephemeral`], but the selection is kept in process memory.
#[must_use]
pub fn ephemeral_in_memory() -> Configuration {
    let mut config = ephemeral();

    config.core.selection.driver = SelectionDriver::Memory;

    config
}
