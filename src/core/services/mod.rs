//! Domain services producing display readings.
//!
//! A reading is a bundle of formatted strings computed from one snapshot of
//! a time source. The periodic jobs call these services on every tick and
//! publish the result; the display layer never computes anything itself.
//!
//! There are two services:
//!
//! - [`clock`]: readings for the clock screen, from the wall clock.
//! - [`stopwatch`]: readings for the stopwatch screen, from a
//!   [`SharedStopwatch`](crate::core::stopwatch::SharedStopwatch).
pub mod clock;
pub mod stopwatch;
