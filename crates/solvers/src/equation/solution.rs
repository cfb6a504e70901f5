use std::fmt;

/// The two-valued outcome tag reported by every root finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fail,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("success"),
            Outcome::Fail => f.write_str("fail"),
        }
    }
}

/// Why a root finder stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The step or bracket half-width fell below the tolerance.
    Converged,

    /// A bisection midpoint evaluated to exactly zero.
    ExactRoot,

    /// The hybrid solver accepted its bounded Newton step.
    NewtonAccepted,

    /// The initial bracket has no strict sign change.
    NoSignChange,

    /// Newton hit a derivative smaller than the slope tolerance.
    SmallSlope,

    /// The secant points have equal function values.
    FlatSecant,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Collapses the status into its outcome tag.
    #[must_use]
    pub fn outcome(self) -> Outcome {
        match self {
            Status::Converged | Status::ExactRoot | Status::NewtonAccepted => Outcome::Success,
            Status::NoSignChange
            | Status::SmallSlope
            | Status::FlatSecant
            | Status::MaxIters
            | Status::StoppedByObserver => Outcome::Fail,
        }
    }
}

/// The result of a root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best available estimate of the root.
    ///
    /// Only `None` when the initial bracket has no sign change.
    pub x: Option<f64>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(crate) fn new(x: f64, iters: usize, status: Status) -> Self {
        Self {
            status,
            x: Some(x),
            iters,
        }
    }

    pub(crate) fn no_sign_change() -> Self {
        Self {
            status: Status::NoSignChange,
            x: None,
            iters: 0,
        }
    }

    /// Returns the outcome tag.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.status.outcome()
    }

    /// Returns true if the solver succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome() == Outcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display_uses_lowercase_tags() {
        assert_eq!(Outcome::Success.to_string(), "success");
        assert_eq!(Outcome::Fail.to_string(), "fail");
    }

    #[test]
    fn only_converging_statuses_succeed() {
        assert!(Solution::new(1.0, 3, Status::ExactRoot).is_success());
        assert!(Solution::new(1.0, 3, Status::NewtonAccepted).is_success());
        assert!(!Solution::new(1.0, 3, Status::FlatSecant).is_success());
        assert!(!Solution::new(1.0, 3, Status::StoppedByObserver).is_success());
    }

    #[test]
    fn no_sign_change_has_no_estimate() {
        let solution = Solution::no_sign_change();
        assert_eq!(solution.x, None);
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.outcome(), Outcome::Fail);
    }
}
