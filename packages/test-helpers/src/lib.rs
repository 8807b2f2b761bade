//! Test helpers for the decimal clock packages.
pub mod configuration;
pub mod random;
