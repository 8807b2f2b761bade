//! Job that recomputes the stopwatch readings on a fixed interval.
//!
//! On every tick it reads the shared stopwatch and publishes the formatted
//! readings, including the prefix-scaled decimal value. The tick interval is
//! the `stopwatch_tick_interval_ms` core option, ten milliseconds by default
//! so the centisecond digits of the conventional display stay live.
use decimal_clock_clock::monotonic::Time;
use decimal_clock_configuration::Core;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::services::stopwatch::{self, StopwatchReadings};
use crate::core::stopwatch::SharedStopwatch;

/// It starts the stopwatch ticker job.
///
/// Returns the task handle and the receiver for the published readings. The
/// receiver already holds the readings for the stopwatch state at start.
#[must_use]
pub fn start_job<C>(config: &Core, stopwatch: &SharedStopwatch<C>) -> (JoinHandle<()>, watch::Receiver<StopwatchReadings>)
where
    C: Time + Send + Sync + 'static,
{
    let precision = usize::from(config.precision);
    let interval = config.stopwatch_tick_interval_ms;
    let stopwatch = stopwatch.clone();

    let (tx, rx) = watch::channel(stopwatch::read(&stopwatch, precision));

    let join_handle = tokio::spawn(async move {
        let interval = std::time::Duration::from_millis(interval);
        let mut interval = tokio::time::interval(interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Stopping stopwatch ticker job..");
                    break;
                }
                _ = interval.tick() => {
                    if tx.send(stopwatch::read(&stopwatch, precision)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    (join_handle, rx)
}
