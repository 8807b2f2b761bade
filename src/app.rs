//! Decimal Clock application.
//!
//! The application is a container for the periodic display jobs. It starts
//! them with the global configuration and hands their watch receivers to the
//! caller, which renders the readings however it likes (the bundled binary
//! logs them to standard output).
//!
//! Jobs executed always:
//!
//! - Clock ticker: recomputes the clock readings every `clock_tick_interval_ms`.
//! - Stopwatch ticker: recomputes the stopwatch readings every
//!   `stopwatch_tick_interval_ms`.
use decimal_clock_clock::monotonic::Time;
use decimal_clock_configuration::Configuration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::{clock_ticker, stopwatch_ticker};
use crate::core::services::clock::ClockReadings;
use crate::core::services::stopwatch::StopwatchReadings;
use crate::core::stopwatch::SharedStopwatch;

/// The running application: the job handles and the readings receivers.
pub struct Running {
    pub jobs: Vec<JoinHandle<()>>,
    pub clock_readings: watch::Receiver<ClockReadings>,
    pub stopwatch_readings: watch::Receiver<StopwatchReadings>,
}

/// It starts the display jobs.
#[must_use]
pub fn start<C>(config: &Configuration, stopwatch: &SharedStopwatch<C>) -> Running
where
    C: Time + Send + Sync + 'static,
{
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    let (clock_job, clock_readings) = clock_ticker::start_job(&config.core);
    jobs.push(clock_job);

    let (stopwatch_job, stopwatch_readings) = stopwatch_ticker::start_job(&config.core, stopwatch);
    jobs.push(stopwatch_job);

    Running {
        jobs,
        clock_readings,
        stopwatch_readings,
    }
}
