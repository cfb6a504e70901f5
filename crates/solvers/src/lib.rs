//! Classical numerical solvers.
//!
//! - [`linear`] — dense linear systems by Gaussian elimination, naive or with
//!   scaled partial pivoting
//! - [`equation`] — scalar root finding by bisection, Newton, secant, or a
//!   bisection/Newton hybrid

pub mod equation;
pub mod linear;
