use thiserror::Error;

/// Configuration shared by the root finders.
///
/// - `max_iters` caps the number of iterations; it is the only cancellation
///   mechanism besides an observer's early stop.
/// - `x_tol` is the step (or bracket half-width) below which an iteration is
///   considered converged. The hybrid solver also compares `|f(c)|` against it.
/// - `slope_tol` is the derivative magnitude below which Newton gives up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
    slope_tol: f64,
}

/// Errors that can occur when validating a root finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and non-negative")]
    XTol,

    #[error("slope_tol must be finite and non-negative")]
    SlopeTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 10_000,
            x_tol: 1e-7,
            slope_tol: 1e-7,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_tol: f64, slope_tol: f64) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::XTol);
        }
        if !slope_tol.is_finite() || slope_tol < 0.0 {
            return Err(ConfigError::SlopeTol);
        }

        Ok(Self {
            max_iters,
            x_tol,
            slope_tol,
        })
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the one-iteration config used for the hybrid Newton refinement.
    ///
    /// The slope tolerance is tied to `x_tol`.
    pub(super) fn single_newton_step(&self) -> Self {
        Self {
            max_iters: 1,
            x_tol: self.x_tol,
            slope_tol: self.x_tol,
        }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance on the step size.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the smallest derivative magnitude Newton will divide by.
    #[must_use]
    pub fn slope_tol(&self) -> f64 {
        self.slope_tol
    }
}
