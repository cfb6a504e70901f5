use numsolve_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// An observer that stops a solver once `|residual|` drops below a tolerance.
///
/// Useful with methods whose own stopping rule looks only at `x` (bisection,
/// Newton, secant), when a small residual is already good enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualStop {
    tolerance: f64,
}

impl ResidualStop {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for ResidualStop {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() < self.tolerance).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numsolve_solvers::equation::{Config, Status, bisection};

    #[test]
    fn stops_bisection_on_a_small_residual() {
        let solution = bisection::solve(
            |x| x * x - 2.0,
            [0.0, 2.0],
            &Config::default(),
            ResidualStop::new(1e-2),
        )
        .expect("finite estimates");

        // Midpoints 1, 1.5, 1.25, 1.375, 1.4375, 1.40625 (residual ≈ -0.0225),
        // then 1.421875 (residual ≈ 0.0217), then 1.4140625 (≈ -0.00043).
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 8);
        assert_relative_eq!(solution.x.unwrap(), 1.4140625);
    }

    #[test]
    fn never_stops_with_zero_tolerance() {
        let solution = bisection::solve(
            |x| x * x - 2.0,
            [0.0, 2.0],
            &Config::default(),
            ResidualStop::new(0.0),
        )
        .expect("finite estimates");

        assert_eq!(solution.status, Status::Converged);
    }
}
