//! The in-process selection store.
use decimal_clock_primitives::DurationSinceUnixEpoch;
use parking_lot::Mutex;

use super::error::Error;
use super::Repository;

/// Keeps the selection in process memory. It is lost when the application
/// exits, which is exactly what tests and ephemeral sessions want.
#[derive(Debug, Default)]
pub struct Memory {
    selection: Mutex<Option<DurationSinceUnixEpoch>>,
}

impl Repository for Memory {
    fn save(&self, instant: &DurationSinceUnixEpoch) -> Result<(), Error> {
        *self.selection.lock() = Some(*instant);
        Ok(())
    }

    fn load(&self) -> Result<Option<DurationSinceUnixEpoch>, Error> {
        Ok(*self.selection.lock())
    }

    fn clear(&self) -> Result<(), Error> {
        *self.selection.lock() = None;
        Ok(())
    }
}
