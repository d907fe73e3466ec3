//! Collaborator seams for the exponent engine: orbit generation,
//! fixed-point / cycle detection and the Jacobian eigenvalue solver.
use num_complex::Complex64;

/// Forward orbit of a planar map; `xs` and `ys` always have equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Orbit {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        assert_eq!(xs.len(), ys.len(), "orbit axes must have equal length");
        Self { xs, ys }
    }

    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    /// x values with the first `cutoff` transient samples dropped.
    pub fn tail(&self, cutoff: usize) -> &[f64] {
        &self.xs[cutoff.min(self.xs.len())..]
    }
}

/// Periodic cycle found in an orbit; `xs` are the cycle's x coordinates in orbit order.
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
    pub period: usize,
    pub xs: Vec<f64>,
}

pub trait TrajectoryOracle {
    /// Exactly `n` samples starting at `start`, or `None` when `diverge`
    /// is set and the orbit escapes.
    fn generate_orbit(&self, start: (f64, f64), n: usize, a: f64, b: f64, diverge: bool) -> Option<Orbit>;
}

pub trait CycleOracle {
    fn find_fixed_point(&self, orbit: &Orbit) -> Option<(f64, f64)>;
    fn find_periodic_cycle(&self, orbit: &Orbit) -> Option<Cycle>;
}

pub trait EigenOracle {
    /// Both eigenvalues of the map's Jacobian at x coordinate `xp`.
    fn solve_characteristic_equation(&self, xp: f64, a: f64, b: f64) -> (Complex64, Complex64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_drops_transient() {
        let orbit = Orbit::new(vec![1.0, 2.0, 3.0, 4.0], vec![0.0; 4]);
        assert_eq!(orbit.tail(1), &[2.0, 3.0, 4.0]);
        assert!(orbit.tail(10).is_empty());
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn mismatched_axes_rejected() {
        let _ = Orbit::new(vec![1.0], vec![]);
    }
}
