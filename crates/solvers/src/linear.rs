//! Dense linear systems solved by Gaussian elimination.
//!
//! A [`LinearSystem`] owns an `n×n` coefficient matrix and a length-`n`
//! constant vector. Solving consumes the system: elimination runs in place on
//! the owned arrays, so callers that still need the original keep a clone.
//!
//! # Strategies
//!
//! - [`naive`] — eliminates in natural row order with no pivoting
//! - [`spp`] — scaled partial pivoting through an index [`Permutation`],
//!   never moving matrix rows
//!
//! # Degenerate systems
//!
//! Neither strategy checks for zero pivots (or, for SPP, all-zero rows).
//! A singular or badly ordered system produces `NaN` or infinite entries in the
//! result rather than an error, and there is no outcome tag: the solvers always
//! return a vector.

mod error;
mod permutation;
mod system;

pub mod naive;
pub mod spp;

pub use error::Error;
pub use permutation::Permutation;
pub use system::LinearSystem;

use ndarray::Array1;

/// Elimination strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Natural row order, no pivoting.
    #[default]
    Naive,

    /// Scaled partial pivoting.
    ScaledPartialPivoting,
}

impl Strategy {
    /// Solves the system with this strategy.
    #[must_use]
    pub fn solve(self, system: LinearSystem) -> Array1<f64> {
        match self {
            Strategy::Naive => naive_gaussian(system),
            Strategy::ScaledPartialPivoting => spp_gaussian(system),
        }
    }

    /// Returns a human-readable name for the strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive Gaussian elimination",
            Strategy::ScaledPartialPivoting => {
                "Gaussian elimination with scaled partial pivoting"
            }
        }
    }
}

/// Solves the system by naive Gaussian elimination.
#[must_use]
pub fn naive_gaussian(mut system: LinearSystem) -> Array1<f64> {
    naive::forward_eliminate(&mut system);
    naive::back_substitute(&system)
}

/// Solves the system by Gaussian elimination with scaled partial pivoting.
#[must_use]
pub fn spp_gaussian(mut system: LinearSystem) -> Array1<f64> {
    let order = spp::forward_eliminate(&mut system);
    spp::back_substitute(&system, &order)
}
