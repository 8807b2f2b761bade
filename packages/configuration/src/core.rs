//! Core configuration: display precision, tick intervals and the selection
//! store.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    /// Number of fractional digits used when formatting decimal values
    /// (day fractions and combined day-of-year values).
    #[serde(default = "Core::default_precision")]
    pub precision: u8,

    /// Interval in milliseconds between clock display updates. The tick is
    /// advisory and best-effort; missed ticks are skipped.
    #[serde(default = "Core::default_clock_tick_interval_ms")]
    pub clock_tick_interval_ms: u64,

    /// Interval in milliseconds between stopwatch display updates.
    #[serde(default = "Core::default_stopwatch_tick_interval_ms")]
    pub stopwatch_tick_interval_ms: u64,

    /// Selection store configuration.
    #[serde(default = "Core::default_selection")]
    pub selection: Selection,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            clock_tick_interval_ms: Self::default_clock_tick_interval_ms(),
            stopwatch_tick_interval_ms: Self::default_stopwatch_tick_interval_ms(),
            selection: Self::default_selection(),
        }
    }
}

impl Core {
    fn default_precision() -> u8 {
        5
    }

    fn default_clock_tick_interval_ms() -> u64 {
        1000
    }

    fn default_stopwatch_tick_interval_ms() -> u64 {
        10
    }

    fn default_selection() -> Selection {
        Selection::default()
    }
}

/// Where the user-selected date-time is stored.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Selection {
    /// The storage driver to use.
    #[serde(default = "Selection::default_driver")]
    pub driver: SelectionDriver,

    /// Path of the JSON document used by the `json_file` driver. Ignored by
    /// the `memory` driver.
    #[serde(default = "Selection::default_path")]
    pub path: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            driver: Self::default_driver(),
            path: Self::default_path(),
        }
    }
}

impl Selection {
    fn default_driver() -> SelectionDriver {
        SelectionDriver::JsonFile
    }

    fn default_path() -> String {
        "./storage/selection.json".to_owned()
    }
}

/// The selection store drivers.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum SelectionDriver {
    /// In-process storage, lost when the application exits.
    Memory,
    /// A single JSON document on disk.
    JsonFile,
}
