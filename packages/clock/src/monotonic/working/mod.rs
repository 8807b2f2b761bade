use decimal_clock_primitives::ElapsedMillis;

use crate::monotonic;
use crate::static_time;

#[allow(clippy::module_name_repetitions)]
pub struct WorkingUptime;

impl monotonic::Time for monotonic::Working {
    /// # Panics
    ///
    /// Will panic if the process uptime overflows the `u64` milliseconds.
    /// (this will naturally happen in 584.9 million years)
    fn now() -> ElapsedMillis {
        u64::try_from(static_time::INSTANT_AT_APP_START.elapsed().as_millis())
            .expect("Overflow of u64 milliseconds, very long uptime!")
    }

    fn dbg_counter_type() -> String {
        "Working".to_owned()
    }
}
