//! Solvers for scalar equations: finding `x` such that `f(x) = 0`.
//!
//! Every solver takes the function as a plain callable (`Fn(f64) -> f64`),
//! a [`Config`], and an [`Observer`] that sees one [`Event`] per iteration.
//! All of them report a [`Solution`]: the estimate, the iteration count, and a
//! [`Status`] that reduces to a two-valued [`Outcome`].
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a sign-changing bracket
//! - [`newton`] — fast local convergence from a single estimate, needs `f'`
//! - [`secant`] — derivative-free local convergence from two estimates
//! - [`hybrid`] — bisection with a bounded Newton refinement per iteration
//!
//! [`Method`] selects one of them at runtime.
//!
//! # Failure is not an error
//!
//! A bracket without a sign change, a vanishing slope, or an exhausted budget
//! yields `Ok` with a failing [`Status`]. [`Error`] is reserved for inputs the
//! solvers refuse to start with, such as a NaN initial estimate.
//!
//! [`Observer`]: numsolve_core::Observer

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod method;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use method::Method;
pub use solution::{Outcome, Solution, Status};

pub mod bisection;
pub mod hybrid;
pub mod newton;
pub mod secant;

/// Rejects NaN and infinite initial estimates.
fn check_finite(values: &[f64]) -> Result<(), Error> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(Error::NonFiniteEstimate { value }),
        None => Ok(()),
    }
}
