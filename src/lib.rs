//! Lyapunov exponent spectra and attractor classification for the Hénon map.
//!
//! The engine lives under `core::titan`; `cli`, `commands` and `config`
//! back the `henon-lyapunov` binary.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

pub use crate::core::titan::{
    classify, compute_for_map, lyapunov_grid, AttractorLabel, ExponentPair, ScalarOrSweep, SpectrumOutput,
    SpectrumSettings,
};
pub use crate::core::LyapunovError;
