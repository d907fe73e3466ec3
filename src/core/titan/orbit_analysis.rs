//! Recurrence-based detection of fixed points and periodic cycles at the
//! end of a generated orbit.
use super::oracle::{Cycle, CycleOracle, Orbit};

pub const DEFAULT_RECURRENCE_TOLERANCE: f64 = 1e-9;
pub const DEFAULT_MAX_PERIOD: usize = 128;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecurrenceDetector {
    pub tolerance: f64,
    pub max_period: usize,
}

impl Default for RecurrenceDetector {
    fn default() -> Self {
        Self { tolerance: DEFAULT_RECURRENCE_TOLERANCE, max_period: DEFAULT_MAX_PERIOD }
    }
}

impl RecurrenceDetector {
    pub fn new(tolerance: f64, max_period: usize) -> Self {
        Self { tolerance, max_period }
    }

    fn same_point(&self, orbit: &Orbit, i: usize, j: usize) -> bool {
        (orbit.xs[i] - orbit.xs[j]).abs() < self.tolerance
            && (orbit.ys[i] - orbit.ys[j]).abs() < self.tolerance
    }

    /// Every one of the last `period` samples repeats `period` steps earlier.
    fn repeats_with_period(&self, orbit: &Orbit, period: usize) -> bool {
        let last = orbit.len() - 1;
        (0..period).all(|i| self.same_point(orbit, last - i, last - i - period))
    }
}

impl CycleOracle for RecurrenceDetector {
    fn find_fixed_point(&self, orbit: &Orbit) -> Option<(f64, f64)> {
        let n = orbit.len();
        if n < 2 || !self.same_point(orbit, n - 1, n - 2) {
            return None;
        }
        Some((orbit.xs[n - 1], orbit.ys[n - 1]))
    }

    fn find_periodic_cycle(&self, orbit: &Orbit) -> Option<Cycle> {
        let n = orbit.len();
        let longest = self.max_period.min(n / 2);
        (2..=longest)
            .find(|&p| self.repeats_with_period(orbit, p))
            .map(|period| Cycle { period, xs: orbit.xs[n - period..].to_vec() })
    }
}
