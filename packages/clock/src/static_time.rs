//! Process-start anchors.
//!
//! Both anchors are captured lazily on first use. Applications that need the
//! anchors to match the real process start should force initialization early
//! with `lazy_static::initialize`.
use std::time::{Instant, SystemTime};

lazy_static! {
    /// The wall-clock time when the application started.
    pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();

    /// The monotonic instant when the application started. Elapsed
    /// milliseconds are measured against this anchor.
    pub static ref INSTANT_AT_APP_START: Instant = Instant::now();
}
