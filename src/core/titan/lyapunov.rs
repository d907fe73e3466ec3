//! Lyapunov spectrum estimators for the Hénon map.
//!
//! The generic path propagates a tangent basis through the Jacobian
//! cocycle, re-orthogonalising and renormalising after every step and
//! accumulating the log of each vector's squared length. The closed-form
//! paths read the exponents straight off the Jacobian eigenvalues at a
//! fixed point or along a periodic cycle.
use serde::Serialize;

use super::henon::jacobian;
use super::linear_algebra::{gram_schmidt, norm, Basis, Vector};
use super::oracle::EigenOracle;
use crate::core::error::LyapunovError;

/// Exponent pair, largest first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExponentPair {
    pub max: f64,
    pub min: f64,
}

impl ExponentPair {
    pub fn ordered(l1: f64, l2: f64) -> Self {
        if l1 >= l2 {
            Self { max: l1, min: l2 }
        } else {
            Self { max: l2, min: l1 }
        }
    }

    /// Larger and smaller entry of an estimated spectrum.
    pub fn from_spectrum(exponents: &[f64]) -> Option<Self> {
        let max = exponents.iter().copied().reduce(f64::max)?;
        let min = exponents.iter().copied().reduce(f64::min)?;
        Some(Self { max, min })
    }
}

fn collapsed(n: f64) -> bool {
    !(n > 0.0 && n.is_finite())
}

/// Run the re-orthonormalisation cocycle for `n` steps over `orbit_x`
/// (one Jacobian per sample) and return the averaged log growth of every
/// basis slot, in basis order.
///
/// Fails with `DegenerateCocycle` when a tangent vector collapses, since
/// its logarithm is undefined.
pub fn compute_spectrum(
    n: usize,
    initial_basis: &[Vector],
    orbit_x: &[f64],
    a: f64,
    b: f64,
) -> Result<Vec<f64>, LyapunovError> {
    if n == 0 {
        return Err(LyapunovError::invalid_parameter("iteration count must be positive"));
    }
    if orbit_x.len() < n {
        return Err(LyapunovError::InvalidParameter(format!(
            "orbit has {} samples, {} iterations requested",
            orbit_x.len(),
            n
        )));
    }
    assert!(
        initial_basis.iter().all(|v| v.len() == 2),
        "Hénon tangent basis vectors must be two-dimensional"
    );

    let mut exponents = vec![0.0; initial_basis.len()];
    let mut u: Basis = initial_basis.to_vec();

    for (step, &x) in orbit_x[..n].iter().enumerate() {
        let j = jacobian(x, a, b);
        let v: Basis = u.iter().map(|w| &j * w).collect();
        // projection needs nonzero vectors
        if v.iter().any(|w| collapsed(norm(w))) {
            debug_log!("cocycle collapsed before orthogonalisation at step {step} (a={a}, b={b})");
            return Err(LyapunovError::degenerate(step));
        }

        let mut next = Vec::with_capacity(v.len());
        for (w, acc) in gram_schmidt(&v).into_iter().zip(exponents.iter_mut()) {
            let nw = norm(&w);
            if collapsed(nw) {
                debug_log!("orthogonalised vector collapsed at step {step} (a={a}, b={b})");
                return Err(LyapunovError::degenerate(step));
            }
            *acc += nw.ln();
            next.push(w / nw);
        }
        u = next;
    }

    Ok(exponents.into_iter().map(|e| e / n as f64).collect())
}

/// Exponents of a point attractor: `ln|λ|` of the Jacobian eigenvalues at `xp`.
pub fn point_attractor_exponents(eigen: &impl EigenOracle, xp: f64, a: f64, b: f64) -> ExponentPair {
    let (l1, l2) = eigen.solve_characteristic_equation(xp, a, b);
    ExponentPair::ordered(l1.norm().ln(), l2.norm().ln())
}

/// Per-point exponents averaged over the cycle, branch by branch, then
/// re-sorted so the larger mean comes first.
pub fn periodic_orbit_exponents(
    eigen: &impl EigenOracle,
    cycle_xs: &[f64],
    a: f64,
    b: f64,
) -> Result<ExponentPair, LyapunovError> {
    if cycle_xs.is_empty() {
        return Err(LyapunovError::invalid_parameter("periodic cycle has no points"));
    }

    let (maxes, mins): (Vec<f64>, Vec<f64>) = cycle_xs
        .iter()
        .map(|&x| {
            let pair = point_attractor_exponents(eigen, x, a, b);
            (pair.max, pair.min)
        })
        .unzip();

    let count = cycle_xs.len() as f64;
    let mean_max = maxes.iter().sum::<f64>() / count;
    let mean_min = mins.iter().sum::<f64>() / count;
    Ok(ExponentPair::ordered(mean_max, mean_min))
}
