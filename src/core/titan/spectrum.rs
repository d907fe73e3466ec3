//! Parameter-sweep front end of the exponent engine.
//!
//! For every (a, b) cell: generate the orbit, short-circuit divergence to
//! the `None` sentinel, prefer the closed forms for fixed points and
//! cycles, and fall back to the full cocycle iteration otherwise. The
//! result is shaped by how many of the two parameters are swept.
use std::fmt;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::attractor::{classify, AttractorLabel};
use super::henon::HenonMap;
use super::linear_algebra::standard_basis;
use super::lyapunov::{compute_spectrum, periodic_orbit_exponents, point_attractor_exponents, ExponentPair};
use super::oracle::{CycleOracle, EigenOracle, TrajectoryOracle};
use super::orbit_analysis::RecurrenceDetector;
use crate::core::error::LyapunovError;

/// A map parameter: one value, or an ordered sweep of values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScalarOrSweep {
    Scalar(f64),
    Sweep(Vec<f64>),
}

impl From<f64> for ScalarOrSweep {
    fn from(v: f64) -> Self { ScalarOrSweep::Scalar(v) }
}

impl From<Vec<f64>> for ScalarOrSweep {
    fn from(v: Vec<f64>) -> Self { ScalarOrSweep::Sweep(v) }
}

impl From<&[f64]> for ScalarOrSweep {
    fn from(v: &[f64]) -> Self { ScalarOrSweep::Sweep(v.to_vec()) }
}

impl ScalarOrSweep {
    fn validate(&self, name: &str) -> Result<(), LyapunovError> {
        let values: &[f64] = match self {
            ScalarOrSweep::Scalar(v) => std::slice::from_ref(v),
            ScalarOrSweep::Sweep(vs) if vs.is_empty() => {
                return Err(LyapunovError::InvalidParameter(format!("empty sweep for parameter {name}")));
            }
            ScalarOrSweep::Sweep(vs) => vs,
        };
        match values.iter().find(|v| !v.is_finite()) {
            Some(bad) => Err(LyapunovError::InvalidParameter(format!("parameter {name} has non-finite value {bad}"))),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSettings {
    /// Orbit length generated per cell.
    pub n_init: usize,
    /// Transient samples discarded before iterating.
    pub cutoff: usize,
    pub start: (f64, f64),
    /// Let the trajectory oracle flag escaping orbits.
    pub diverge: bool,
}

impl Default for SpectrumSettings {
    fn default() -> Self {
        Self { n_init: 10_000, cutoff: 1_000, start: (0.0, 0.0), diverge: true }
    }
}

impl SpectrumSettings {
    pub fn validate(&self) -> Result<(), LyapunovError> {
        if self.n_init < 2 {
            return Err(LyapunovError::invalid_parameter("n_init must be at least 2"));
        }
        if self.cutoff >= self.n_init {
            return Err(LyapunovError::InvalidParameter(format!(
                "cutoff ({}) must be smaller than n_init ({})",
                self.cutoff, self.n_init
            )));
        }
        if !(self.start.0.is_finite() && self.start.1.is_finite()) {
            return Err(LyapunovError::invalid_parameter("start point must be finite"));
        }
        Ok(())
    }

    /// Steps run by the cocycle iteration.
    pub fn iterations(&self) -> usize {
        self.n_init - self.cutoff
    }
}

/// Which estimator produced a cell's exponents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EstimatorPath {
    Diverged,
    PointAttractor,
    PeriodicOrbit { period: usize },
    Iteration,
    Degenerate,
}

impl fmt::Display for EstimatorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorPath::Diverged => f.write_str("diverged"),
            EstimatorPath::PointAttractor => f.write_str("fixed point"),
            EstimatorPath::PeriodicOrbit { period } => write!(f, "period-{period} cycle"),
            EstimatorPath::Iteration => f.write_str("cocycle iteration"),
            EstimatorPath::Degenerate => f.write_str("degenerate cocycle"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CellEstimate {
    pub a: f64,
    pub b: f64,
    pub path: EstimatorPath,
    /// `None` for diverged or degenerate cells.
    pub pair: Option<ExponentPair>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SpectrumOutput {
    Single(Option<ExponentPair>),
    /// Index-aligned with the swept parameter.
    Line { max: Vec<Option<f64>>, min: Vec<Option<f64>> },
    /// Indexed `[a_index][b_index]`.
    Grid { max: Vec<Vec<Option<f64>>>, min: Vec<Vec<Option<f64>>> },
}

fn split(pairs: Vec<Option<ExponentPair>>) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    pairs.into_iter().map(|p| (p.map(|p| p.max), p.map(|p| p.min))).unzip()
}

pub struct SpectrumEngine<T = HenonMap, C = RecurrenceDetector, E = HenonMap> {
    trajectory: T,
    cycles: C,
    eigen: E,
    settings: SpectrumSettings,
}

impl SpectrumEngine {
    /// Hénon map with the default divergence threshold and recurrence detector.
    pub fn henon(settings: SpectrumSettings) -> Result<Self, LyapunovError> {
        Self::new(HenonMap::default(), RecurrenceDetector::default(), HenonMap::default(), settings)
    }
}

impl<T: TrajectoryOracle, C: CycleOracle, E: EigenOracle> SpectrumEngine<T, C, E> {
    pub fn new(trajectory: T, cycles: C, eigen: E, settings: SpectrumSettings) -> Result<Self, LyapunovError> {
        settings.validate()?;
        Ok(Self { trajectory, cycles, eigen, settings })
    }

    pub fn settings(&self) -> &SpectrumSettings {
        &self.settings
    }

    /// Exponents for one (a, b) cell.
    pub fn estimate_cell(&self, a: f64, b: f64) -> Result<CellEstimate, LyapunovError> {
        let s = &self.settings;
        let cell = |path: EstimatorPath, pair: Option<ExponentPair>| CellEstimate { a, b, path, pair };

        let Some(orbit) = self.trajectory.generate_orbit(s.start, s.n_init, a, b, s.diverge) else {
            debug_log!("a={a} b={b}: orbit diverged");
            return Ok(cell(EstimatorPath::Diverged, None));
        };

        if let Some((xp, _)) = self.cycles.find_fixed_point(&orbit) {
            debug_log!("a={a} b={b}: fixed point at x={xp}");
            let pair = point_attractor_exponents(&self.eigen, xp, a, b);
            return Ok(cell(EstimatorPath::PointAttractor, Some(pair)));
        }

        if let Some(cycle) = self.cycles.find_periodic_cycle(&orbit) {
            debug_log!("a={a} b={b}: period-{} cycle", cycle.period);
            let pair = periodic_orbit_exponents(&self.eigen, &cycle.xs, a, b)?;
            return Ok(cell(EstimatorPath::PeriodicOrbit { period: cycle.period }, Some(pair)));
        }

        let basis = standard_basis(2);
        match compute_spectrum(s.iterations(), &basis, orbit.tail(s.cutoff), a, b) {
            Ok(exponents) => {
                debug_log!("a={a} b={b}: iterated spectrum {exponents:?}");
                Ok(cell(EstimatorPath::Iteration, ExponentPair::from_spectrum(&exponents)))
            }
            Err(LyapunovError::DegenerateCocycle { step }) => {
                debug_log!("a={a} b={b}: degenerate cocycle at step {step}");
                Ok(cell(EstimatorPath::Degenerate, None))
            }
            Err(e) => Err(e),
        }
    }

    fn pairs_over<I>(&self, cells: I) -> Result<Vec<Option<ExponentPair>>, LyapunovError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        cells.into_iter().map(|(a, b)| self.estimate_cell(a, b).map(|c| c.pair)).collect()
    }

    /// Exponents over the requested sweep, shaped by its arity.
    pub fn compute_for_map(&self, a: &ScalarOrSweep, b: &ScalarOrSweep) -> Result<SpectrumOutput, LyapunovError> {
        a.validate("A")?;
        b.validate("B")?;

        let output = match (a, b) {
            (ScalarOrSweep::Scalar(a), ScalarOrSweep::Scalar(b)) => {
                SpectrumOutput::Single(self.estimate_cell(*a, *b)?.pair)
            }
            (ScalarOrSweep::Sweep(av), ScalarOrSweep::Scalar(b)) => {
                let (max, min) = split(self.pairs_over(av.iter().map(|&a| (a, *b)))?);
                SpectrumOutput::Line { max, min }
            }
            (ScalarOrSweep::Scalar(a), ScalarOrSweep::Sweep(bv)) => {
                let (max, min) = split(self.pairs_over(bv.iter().map(|&b| (*a, b)))?);
                SpectrumOutput::Line { max, min }
            }
            (ScalarOrSweep::Sweep(av), ScalarOrSweep::Sweep(bv)) => {
                let mut max = Vec::with_capacity(av.len());
                let mut min = Vec::with_capacity(av.len());
                for &a in av {
                    let (row_max, row_min) = split(self.pairs_over(bv.iter().map(|&b| (a, b)))?);
                    max.push(row_max);
                    min.push(row_min);
                }
                SpectrumOutput::Grid { max, min }
            }
        };
        Ok(output)
    }
}

/// One-call entry point over the Hénon map with default oracles.
pub fn compute_for_map(
    n_init: usize,
    cutoff: usize,
    start: (f64, f64),
    a: impl Into<ScalarOrSweep>,
    b: impl Into<ScalarOrSweep>,
    diverge: bool,
) -> Result<SpectrumOutput, LyapunovError> {
    let engine = SpectrumEngine::henon(SpectrumSettings { n_init, cutoff, start, diverge })?;
    engine.compute_for_map(&a.into(), &b.into())
}

/// Dense exponent grids; sentinel cells are `NaN`.
#[derive(Clone, Debug, PartialEq)]
pub struct LyapunovGrid {
    pub a_values: Vec<f64>,
    pub b_values: Vec<f64>,
    pub max: DMatrix<f64>,
    pub min: DMatrix<f64>,
}

impl LyapunovGrid {
    pub fn labels(&self, tolerance: f64) -> Vec<Vec<AttractorLabel>> {
        let present = |v: f64| if v.is_nan() { None } else { Some(v) };
        (0..self.max.nrows())
            .map(|i| {
                (0..self.max.ncols())
                    .map(|j| classify(present(self.max[(i, j)]), present(self.min[(i, j)]), tolerance))
                    .collect()
            })
            .collect()
    }
}

fn dense(rows: &[Vec<Option<f64>>], ncols: usize) -> DMatrix<f64> {
    DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j].unwrap_or(f64::NAN))
}

/// Full a × b grid through `engine`.
pub fn lyapunov_grid_with<T, C, E>(
    engine: &SpectrumEngine<T, C, E>,
    a_values: &[f64],
    b_values: &[f64],
) -> Result<LyapunovGrid, LyapunovError>
where
    T: TrajectoryOracle,
    C: CycleOracle,
    E: EigenOracle,
{
    let output = engine.compute_for_map(&a_values.into(), &b_values.into())?;
    let SpectrumOutput::Grid { max, min } = output else {
        unreachable!("two sweeps always produce a grid");
    };
    Ok(LyapunovGrid {
        a_values: a_values.to_vec(),
        b_values: b_values.to_vec(),
        max: dense(&max, b_values.len()),
        min: dense(&min, b_values.len()),
    })
}

pub fn lyapunov_grid(a_values: &[f64], b_values: &[f64], settings: SpectrumSettings) -> Result<LyapunovGrid, LyapunovError> {
    lyapunov_grid_with(&SpectrumEngine::henon(settings)?, a_values, b_values)
}
