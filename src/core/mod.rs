//! The domain core of the decimal clock.
//!
//! The core converts between conventional and decimal representations of
//! time and date, accumulates stopwatch time, and stores the user-selected
//! date-time. It performs no presentation: it produces formatted strings
//! that a display collaborator (the console binary, in this repository)
//! renders however it likes.
//!
//! The modules, leaves first:
//!
//! - [`time`]: the time-of-day value and the fraction-of-day conversion.
//! - [`date`]: the calendar date value and its day-of-year form.
//! - [`date_time`]: the composite of both, with the combined decimal form
//!   and the conversion to a single instant for the persistence boundary.
//! - [`prefix`]: the magnitude-dependent unit selection for the stopwatch
//!   decimal display (day, deciday, centiday, milliday, microday).
//! - [`stopwatch`]: the elapsed-time accumulator over a monotonic counter.
//! - [`selection`]: the persisted user selection, behind a repository trait
//!   with two drivers.
//! - [`services`]: snapshot services producing all the formatted readings a
//!   display needs in one call.
pub mod date;
pub mod date_time;
pub mod error;
pub mod prefix;
pub mod selection;
pub mod services;
pub mod stopwatch;
pub mod time;
