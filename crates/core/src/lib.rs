//! Core traits and types shared by the numsolve crates.
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Polynomial`] — a real polynomial with value and derivative evaluation,
//!   the driving example for the root finders

mod observer;
mod polynomial;

pub use observer::Observer;
pub use polynomial::Polynomial;
