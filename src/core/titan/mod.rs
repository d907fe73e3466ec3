//! Titan math library: Lyapunov spectra of the Hénon map.

pub mod attractor;
pub mod henon;
pub mod linear_algebra;
pub mod lyapunov;
pub mod orbit_analysis;
pub mod oracle;
pub mod spectrum;

pub use attractor::{classify, classify_pair, AttractorLabel, ChaosKind, PointKind};
pub use lyapunov::ExponentPair;
pub use spectrum::{compute_for_map, lyapunov_grid, ScalarOrSweep, SpectrumEngine, SpectrumOutput, SpectrumSettings};
