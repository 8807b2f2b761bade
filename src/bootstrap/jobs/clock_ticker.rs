//! Job that recomputes the clock readings on a fixed interval.
//!
//! On every tick it takes the current local date-time and produces the full
//! set of formatted readings (conventional, decimal and mixed) for the
//! display. The tick interval is the `clock_tick_interval_ms` core option,
//! one second by default.
use decimal_clock_configuration::Core;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::services::clock::{self, ClockReadings};
use crate::CurrentClock;

/// It starts the clock ticker job.
///
/// Returns the task handle and the receiver for the published readings. The
/// receiver already holds the readings for the starting instant.
#[must_use]
pub fn start_job(config: &Core) -> (JoinHandle<()>, watch::Receiver<ClockReadings>) {
    let precision = usize::from(config.precision);
    let interval = config.clock_tick_interval_ms;

    let (tx, rx) = watch::channel(clock::current::<CurrentClock>(precision));

    let join_handle = tokio::spawn(async move {
        let interval = std::time::Duration::from_millis(interval);
        let mut interval = tokio::time::interval(interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Stopping clock ticker job..");
                    break;
                }
                _ = interval.tick() => {
                    if tx.send(clock::current::<CurrentClock>(precision)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    (join_handle, rx)
}
