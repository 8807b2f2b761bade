//! The selection store driver factory.
use decimal_clock_configuration::{Selection, SelectionDriver};

use super::json_file::JsonFile;
use super::memory::Memory;
use super::Repository;

/// It builds the repository named by the configuration.
#[must_use]
pub fn build(config: &Selection) -> Box<dyn Repository> {
    match config.driver {
        SelectionDriver::Memory => Box::new(Memory::default()),
        SelectionDriver::JsonFile => Box::new(JsonFile::new(&config.path)),
    }
}
