use numsolve_core::Observer;

use super::{Action, Config, Error, Event, Solution, bisection, hybrid, newton, secant};

/// A root-finding method together with its initial estimates.
///
/// Newton starts from one point; the other methods need two. Bisection and
/// hybrid additionally require the two points to bracket a sign change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    Bisection { a: f64, b: f64 },
    Newton { x0: f64 },
    Secant { a: f64, b: f64 },
    Hybrid { a: f64, b: f64 },
}

impl Method {
    /// Returns the display name of the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Method::Bisection { .. } => "bisection",
            Method::Newton { .. } => "newton",
            Method::Secant { .. } => "secant",
            Method::Hybrid { .. } => "hybrid",
        }
    }

    /// Returns true if the method evaluates the derivative.
    #[must_use]
    pub fn uses_derivative(&self) -> bool {
        matches!(self, Method::Newton { .. } | Method::Hybrid { .. })
    }

    /// Runs the selected method.
    ///
    /// `df` is ignored by bisection and secant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteEstimate`] if an initial estimate is NaN or
    /// infinite.
    pub fn solve<F, D, Obs>(
        &self,
        f: F,
        df: D,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
        Obs: Observer<Event, Action>,
    {
        match *self {
            Method::Bisection { a, b } => bisection::solve(f, [a, b], config, observer),
            Method::Newton { x0 } => newton::solve(f, df, x0, config, observer),
            Method::Secant { a, b } => secant::solve(f, [a, b], config, observer),
            Method::Hybrid { a, b } => hybrid::solve(f, df, [a, b], config, observer),
        }
    }
}
