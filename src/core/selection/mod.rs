//! The persisted user selection.
//!
//! The calendar screen lets the user pick a date and time and keeps it
//! across sessions. The selection crosses this boundary as a single epoch
//! instant; the calendar fields are re-derived from it on load.
//!
//! Persistence is implemented with one [`Repository`] trait and two drivers:
//!
//! - [`Memory`](crate::core::selection::memory::Memory): in-process, for
//!   testing and ephemeral sessions.
//! - [`JsonFile`](crate::core::selection::json_file::JsonFile): a single
//!   JSON document on disk.
//!
//! An absent selection is a normal `None`, not an error.
pub mod driver;
pub mod error;
pub mod json_file;
pub mod memory;

use decimal_clock_primitives::DurationSinceUnixEpoch;

use self::error::Error;

/// The persistence trait for the user-selected date-time.
pub trait Repository: Sync + Send {
    /// It stores the selection, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Will return an error if the selection cannot be written to the
    /// underlying storage.
    fn save(&self, instant: &DurationSinceUnixEpoch) -> Result<(), Error>;

    /// It returns the stored selection, or `None` if none was ever stored
    /// or it was cleared.
    ///
    /// # Errors
    ///
    /// Will return an error if the underlying storage cannot be read or
    /// holds an invalid document.
    fn load(&self) -> Result<Option<DurationSinceUnixEpoch>, Error>;

    /// Whether a selection is currently stored.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Repository::load`].
    fn exists(&self) -> Result<bool, Error> {
        Ok(self.load()?.is_some())
    }

    /// It removes the stored selection. Clearing an absent selection is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Will return an error if the underlying storage cannot be modified.
    fn clear(&self) -> Result<(), Error>;
}
