//! Application jobs.
//!
//! Each job is a tokio task that recomputes a set of readings on a fixed
//! interval and publishes them on a [`watch`](tokio::sync::watch) channel.
//! The display side holds the receiver and redraws whenever a new value
//! arrives.
//!
//! Jobs stop when `ctrl-c` is received or when every receiver has been
//! dropped.
pub mod clock_ticker;
pub mod stopwatch_ticker;
