//! The JSON file selection store.
use std::path::{Path, PathBuf};

use decimal_clock_primitives::DurationSinceUnixEpoch;
use serde::{Deserialize, Serialize};

use super::error::Error;
use super::Repository;

/// The document stored on disk.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
struct StoredSelection {
    epoch_millis: u64,
}

/// Keeps the selection in a single JSON document on disk.
///
/// A missing file means no selection is stored; clearing removes the file.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Repository for JsonFile {
    fn save(&self, instant: &DurationSinceUnixEpoch) -> Result<(), Error> {
        let document = StoredSelection {
            epoch_millis: u64::try_from(instant.as_millis()).expect("Overflow of u64 milliseconds, very future!"),
        };

        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") {
                std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&self.path, json).map_err(|err| self.io_error(err))?;

        Ok(())
    }

    fn load(&self) -> Result<Option<DurationSinceUnixEpoch>, Error> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let document: StoredSelection = serde_json::from_str(&json)?;

        Ok(Some(DurationSinceUnixEpoch::from_millis(document.epoch_millis)))
    }

    fn clear(&self) -> Result<(), Error> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use decimal_clock_primitives::DurationSinceUnixEpoch;
    use decimal_clock_test_helpers::configuration;

    use crate::core::selection::json_file::JsonFile;
    use crate::core::selection::Repository;

    fn ephemeral_repository() -> JsonFile {
        let config = configuration::ephemeral();
        JsonFile::new(&config.core.selection.path)
    }

    #[test]
    fn a_missing_file_should_mean_no_selection() {
        let repository = ephemeral_repository();

        assert_eq!(repository.load().unwrap(), None);
        assert!(!repository.exists().unwrap());
    }

    #[test]
    fn it_should_return_the_saved_selection() {
        let repository = ephemeral_repository();
        let instant = DurationSinceUnixEpoch::from_millis(1_679_929_914_000);

        repository.save(&instant).unwrap();

        assert_eq!(repository.load().unwrap(), Some(instant));

        repository.clear().unwrap();
    }

    #[test]
    fn clearing_should_remove_the_file() {
        let repository = ephemeral_repository();

        repository.save(&DurationSinceUnixEpoch::from_secs(1)).unwrap();
        repository.clear().unwrap();

        assert_eq!(repository.load().unwrap(), None);
    }

    #[test]
    fn clearing_an_absent_selection_should_be_a_no_op() {
        let repository = ephemeral_repository();

        assert!(repository.clear().is_ok());
    }

    #[test]
    fn an_invalid_document_should_be_an_error() {
        let config = decimal_clock_test_helpers::configuration::ephemeral();
        std::fs::write(&config.core.selection.path, "not json").unwrap();

        let repository = JsonFile::new(&config.core.selection.path);

        assert!(repository.load().is_err());

        repository.clear().unwrap();
    }
}
