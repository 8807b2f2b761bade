use decimal_clock::core::stopwatch::SharedStopwatch;
use decimal_clock::{app, bootstrap, CurrentMonotonic};
use tracing::info;

#[tokio::main]
async fn main() {
    let config = bootstrap::app::setup();

    let stopwatch = SharedStopwatch::<CurrentMonotonic>::default();
    stopwatch.start();

    let mut running = app::start(&config, &stopwatch);

    // Render the readings every time the clock publishes, until ctrl-c.
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Decimal Clock shutting down..");
                break;
            }
            changed = running.clock_readings.changed() => {
                if changed.is_err() {
                    break;
                }

                let clock = running.clock_readings.borrow_and_update().clone();
                let stopwatch = running.stopwatch_readings.borrow_and_update().clone();

                info!(
                    "{} | {} | {}",
                    clock.standard_time, clock.decimal_time, clock.combined_decimal
                );
                info!(
                    "stopwatch: {} | {} {}",
                    stopwatch.standard_time, stopwatch.scaled_value, stopwatch.unit_label
                );
            }
        }
    }

    // Await for all jobs to shutdown
    futures::future::join_all(running.jobs).await;
    info!("Decimal Clock successfully shutdown.");
}
