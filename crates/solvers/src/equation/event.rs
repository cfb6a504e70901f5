/// Iteration event emitted by the root finders.
///
/// Each solver emits exactly one event per iteration, before its convergence
/// check, so an observer that returns [`Action::StopEarly`](super::Action)
/// always sees the estimate that will be reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A bisection midpoint was evaluated.
    Bisection {
        /// Iteration counter (1-based).
        iter: usize,
        /// Bracket before this iteration's update.
        bracket: [f64; 2],
        /// The midpoint.
        x: f64,
        /// `f(x)` at the midpoint.
        residual: f64,
    },

    /// A Newton step was taken.
    Newton {
        /// Iteration counter (1-based).
        iter: usize,
        /// The updated estimate.
        x: f64,
        /// `f(x)` at the updated estimate.
        residual: f64,
        /// Derivative at the previous estimate.
        slope: f64,
        /// Step `f(x)/f'(x)` that was subtracted.
        step: f64,
    },

    /// A secant step was computed.
    Secant {
        /// Iteration counter (1-based).
        iter: usize,
        /// The better of the two current points.
        x: f64,
        /// `f(x)` at that point.
        residual: f64,
        /// Step about to be subtracted from `x`.
        step: f64,
    },

    /// A hybrid midpoint was evaluated.
    Hybrid {
        /// Iteration counter (1-based).
        iter: usize,
        /// Bracket before this iteration's update.
        bracket: [f64; 2],
        /// The midpoint.
        x: f64,
        /// `f(x)` at the midpoint.
        residual: f64,
    },
}

impl Event {
    /// Returns the iteration counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Event::Bisection { iter, .. }
            | Event::Newton { iter, .. }
            | Event::Secant { iter, .. }
            | Event::Hybrid { iter, .. } => *iter,
        }
    }

    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Bisection { x, .. }
            | Event::Newton { x, .. }
            | Event::Secant { x, .. }
            | Event::Hybrid { x, .. } => *x,
        }
    }

    /// Returns `f(x)` for the evaluated x value.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self {
            Event::Bisection { residual, .. }
            | Event::Newton { residual, .. }
            | Event::Secant { residual, .. }
            | Event::Hybrid { residual, .. } => *residual,
        }
    }

    /// Returns the bracket for bracketing methods.
    #[must_use]
    pub fn bracket(&self) -> Option<[f64; 2]> {
        match self {
            Event::Bisection { bracket, .. } | Event::Hybrid { bracket, .. } => Some(*bracket),
            Event::Newton { .. } | Event::Secant { .. } => None,
        }
    }

    /// Returns the step size for open methods.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        match self {
            Event::Newton { step, .. } | Event::Secant { step, .. } => Some(*step),
            Event::Bisection { .. } | Event::Hybrid { .. } => None,
        }
    }
}
