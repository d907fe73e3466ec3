//! The Hénon map `x' = 1 - a x² + y`, `y' = b x`, its Jacobian, and the
//! reference trajectory / eigenvalue oracles built on it.
use nalgebra::DMatrix;
use num_complex::Complex64;

use super::oracle::{EigenOracle, Orbit, TrajectoryOracle};

pub const DEFAULT_DIVERGENCE_THRESHOLD: f64 = 1e5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HenonMap {
    /// An orbit coordinate beyond this magnitude counts as escaped.
    pub divergence_threshold: f64,
}

impl Default for HenonMap {
    fn default() -> Self {
        Self { divergence_threshold: DEFAULT_DIVERGENCE_THRESHOLD }
    }
}

impl HenonMap {
    pub fn new(divergence_threshold: f64) -> Self {
        Self { divergence_threshold }
    }

    pub fn step(x: f64, y: f64, a: f64, b: f64) -> (f64, f64) {
        (1.0 - a * x * x + y, b * x)
    }

    fn escaped(&self, x: f64, y: f64) -> bool {
        !(x.is_finite() && y.is_finite())
            || x.abs() > self.divergence_threshold
            || y.abs() > self.divergence_threshold
    }
}

/// `J = [[-2 a x, 1], [b, 0]]`
pub fn jacobian(x: f64, a: f64, b: f64) -> DMatrix<f64> {
    DMatrix::from_row_slice(2, 2, &[-2.0 * a * x, 1.0, b, 0.0])
}

impl TrajectoryOracle for HenonMap {
    fn generate_orbit(&self, start: (f64, f64), n: usize, a: f64, b: f64, diverge: bool) -> Option<Orbit> {
        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        let (mut x, mut y) = start;

        for _ in 0..n {
            if diverge && self.escaped(x, y) {
                return None;
            }
            xs.push(x);
            ys.push(y);
            (x, y) = HenonMap::step(x, y, a, b);
        }

        Some(Orbit::new(xs, ys))
    }
}

impl EigenOracle for HenonMap {
    // λ² + 2 a xp λ - b = 0
    fn solve_characteristic_equation(&self, xp: f64, a: f64, b: f64) -> (Complex64, Complex64) {
        let half_trace = Complex64::new(-a * xp, 0.0);
        let root = Complex64::new(a * a * xp * xp + b, 0.0).sqrt();
        (half_trace + root, half_trace - root)
    }
}
