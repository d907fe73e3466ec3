//! Core module tree: the exponent engine and its support code.

#[macro_use]
pub mod debug; // gated debug logging (HENON_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod titan;

pub use error::LyapunovError;
